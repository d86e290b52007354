use crate::models::{ConciergeJoin, ConciergeRow, MiiDataRow, MiiMetadataRow, MsgInfoRow};
use crate::Database;
use anyhow::Result;
use rusqlite::Connection;

impl Database {
    // -- Miis --

    pub fn insert_mii(&self, metadata: &MiiMetadataRow, data: &[u8]) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO mii_data (mii_id, data, name, color1, color2) VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![metadata.mii_id, data, metadata.name, metadata.color1, metadata.color2],
            )?;
            Ok(())
        })
    }

    pub fn get_mii_data(&self, mii_id: i64) -> Result<Option<MiiDataRow>> {
        self.with_conn(|conn| query_mii_data(conn, mii_id))
    }

    // -- Concierge --

    pub fn insert_concierge(&self, row: &ConciergeRow) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO concierge_miis (mii_id, clothes, action, prof, movie_id, voice)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                rusqlite::params![row.mii_id, row.clothes, row.action, row.prof, row.movie_id, row.voice],
            )?;
            Ok(())
        })
    }

    /// Look up both halves of a concierge Mii. Either side may be missing.
    pub fn get_concierge_join(&self, mii_id: i64) -> Result<ConciergeJoin> {
        self.with_conn(|conn| {
            Ok(ConciergeJoin {
                metadata: query_mii_metadata(conn, mii_id)?,
                concierge: query_concierge(conn, mii_id)?,
            })
        })
    }

    // -- Message info --

    pub fn insert_msg_info(&self, row: &MsgInfoRow) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO mii_msg_info (mii_id, type, seq, msg, face) VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![row.mii_id, row.kind, row.seq, row.msg, row.face],
            )?;
            Ok(())
        })
    }

    /// All message-info rows for a Mii, ordered by `type` then `seq`.
    /// Rows sharing a `(type, seq)` pair keep insertion order.
    pub fn get_msg_info(&self, mii_id: i64) -> Result<Vec<MsgInfoRow>> {
        self.with_conn(|conn| query_msg_info(conn, mii_id))
    }
}

fn query_mii_data(conn: &Connection, mii_id: i64) -> Result<Option<MiiDataRow>> {
    let mut stmt = conn.prepare("SELECT mii_id, data FROM mii_data WHERE mii_id = ?1")?;

    let row = stmt
        .query_row([mii_id], |row| {
            Ok(MiiDataRow {
                mii_id: row.get(0)?,
                data: row.get(1)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn query_mii_metadata(conn: &Connection, mii_id: i64) -> Result<Option<MiiMetadataRow>> {
    let mut stmt =
        conn.prepare("SELECT mii_id, name, color1, color2 FROM mii_data WHERE mii_id = ?1")?;

    let row = stmt
        .query_row([mii_id], |row| {
            Ok(MiiMetadataRow {
                mii_id: row.get(0)?,
                name: row.get(1)?,
                color1: row.get(2)?,
                color2: row.get(3)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn query_concierge(conn: &Connection, mii_id: i64) -> Result<Option<ConciergeRow>> {
    let mut stmt = conn.prepare(
        "SELECT mii_id, clothes, action, prof, movie_id, voice FROM concierge_miis WHERE mii_id = ?1",
    )?;

    let row = stmt
        .query_row([mii_id], |row| {
            Ok(ConciergeRow {
                mii_id: row.get(0)?,
                clothes: row.get(1)?,
                action: row.get(2)?,
                prof: row.get(3)?,
                movie_id: row.get(4)?,
                voice: row.get(5)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn query_msg_info(conn: &Connection, mii_id: i64) -> Result<Vec<MsgInfoRow>> {
    let mut stmt = conn.prepare(
        "SELECT mii_id, type, seq, msg, face
         FROM mii_msg_info
         WHERE mii_id = ?1
         ORDER BY type ASC, seq ASC, rowid ASC",
    )?;

    let rows = stmt
        .query_map([mii_id], |row| {
            Ok(MsgInfoRow {
                mii_id: row.get(0)?,
                kind: row.get(1)?,
                seq: row.get(2)?,
                msg: row.get(3)?,
                face: row.get(4)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(mii_id: i64) -> MiiMetadataRow {
        MiiMetadataRow {
            mii_id,
            name: "Guest".into(),
            color1: "1".into(),
            color2: "2".into(),
        }
    }

    fn concierge(mii_id: i64) -> ConciergeRow {
        ConciergeRow {
            mii_id,
            clothes: 1,
            action: 2,
            prof: "Florist".into(),
            movie_id: 3,
            voice: 0,
        }
    }

    fn msg(mii_id: i64, kind: i64, seq: i64, msg: &str) -> MsgInfoRow {
        MsgInfoRow { mii_id, kind, seq, msg: msg.into(), face: 0 }
    }

    #[test]
    fn mii_data_roundtrips_bytes() {
        let db = Database::open_in_memory().unwrap();
        let data = vec![0x5A; 76];
        db.insert_mii(&metadata(1), &data).unwrap();

        let row = db.get_mii_data(1).unwrap().unwrap();
        assert_eq!(row.mii_id, 1);
        assert_eq!(row.data, data);
        assert!(db.get_mii_data(2).unwrap().is_none());
    }

    #[test]
    fn join_sides_are_independent() {
        let db = Database::open_in_memory().unwrap();
        db.insert_mii(&metadata(1), &[0; 76]).unwrap();
        db.insert_concierge(&concierge(2)).unwrap();
        db.insert_mii(&metadata(3), &[0; 76]).unwrap();
        db.insert_concierge(&concierge(3)).unwrap();

        let only_metadata = db.get_concierge_join(1).unwrap();
        assert!(only_metadata.metadata.is_some());
        assert!(only_metadata.concierge.is_none());
        assert!(only_metadata.into_pair().is_none());

        let only_concierge = db.get_concierge_join(2).unwrap();
        assert!(only_concierge.metadata.is_none());
        assert!(only_concierge.into_pair().is_none());

        let (meta, profile) = db.get_concierge_join(3).unwrap().into_pair().unwrap();
        assert_eq!(meta, metadata(3));
        assert_eq!(profile, concierge(3));

        assert!(db.get_concierge_join(4).unwrap().into_pair().is_none());
    }

    #[test]
    fn msg_info_is_ordered_by_type_then_seq() {
        let db = Database::open_in_memory().unwrap();
        db.insert_msg_info(&msg(1, 2, 1, "c")).unwrap();
        db.insert_msg_info(&msg(1, 1, 2, "b")).unwrap();
        db.insert_msg_info(&msg(9, 1, 1, "other mii")).unwrap();
        db.insert_msg_info(&msg(1, 1, 1, "a")).unwrap();
        db.insert_msg_info(&msg(1, 1, 2, "b2")).unwrap();

        let rows = db.get_msg_info(1).unwrap();
        let order: Vec<_> = rows.iter().map(|r| (r.kind, r.seq, r.msg.as_str())).collect();
        assert_eq!(order, vec![(1, 1, "a"), (1, 2, "b"), (1, 2, "b2"), (2, 1, "c")]);

        assert!(db.get_msg_info(5).unwrap().is_empty());
    }
}
