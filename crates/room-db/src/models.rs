/// Database row types — these map directly to SQLite rows.
/// Distinct from room-types API models to keep the DB layer independent.

/// The raw payload half of `mii_data`.
pub struct MiiDataRow {
    pub mii_id: i64,
    pub data: Vec<u8>,
}

/// The display half of `mii_data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiiMetadataRow {
    pub mii_id: i64,
    pub name: String,
    pub color1: String,
    pub color2: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConciergeRow {
    pub mii_id: i64,
    pub clothes: i64,
    pub action: i64,
    pub prof: String,
    pub movie_id: i64,
    pub voice: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgInfoRow {
    pub mii_id: i64,
    pub kind: i64,
    pub seq: i64,
    pub msg: String,
    pub face: i64,
}

/// Both sides of the metadata/concierge join, each present or not on its own.
#[derive(Debug, Default)]
pub struct ConciergeJoin {
    pub metadata: Option<MiiMetadataRow>,
    pub concierge: Option<ConciergeRow>,
}

impl ConciergeJoin {
    /// The joined pair, or `None` unless both sides exist.
    pub fn into_pair(self) -> Option<(MiiMetadataRow, ConciergeRow)> {
        match (self.metadata, self.concierge) {
            (Some(metadata), Some(concierge)) => Some((metadata, concierge)),
            _ => None,
        }
    }
}
