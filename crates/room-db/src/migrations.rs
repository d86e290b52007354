use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (version INTEGER NOT NULL);"
    )?;

    let version: i64 = conn
        .query_row("SELECT COALESCE(MAX(version), 0) FROM schema_version", [], |r| r.get(0))?;

    if version < 1 {
        info!("Room DB: running migration v1 (initial schema)");
        conn.execute_batch(
            "
            CREATE TABLE mii_data (
                mii_id      INTEGER PRIMARY KEY,
                data        BLOB NOT NULL,
                name        TEXT NOT NULL,
                color1      TEXT NOT NULL,
                color2      TEXT NOT NULL
            );

            CREATE TABLE concierge_miis (
                mii_id      INTEGER PRIMARY KEY,
                clothes     INTEGER NOT NULL,
                action      INTEGER NOT NULL,
                prof        TEXT NOT NULL,
                movie_id    INTEGER NOT NULL,
                voice       INTEGER NOT NULL DEFAULT 0
            );

            -- No uniqueness on (type, seq): repeated pairs are legitimate.
            CREATE TABLE mii_msg_info (
                mii_id      INTEGER NOT NULL,
                type        INTEGER NOT NULL,
                seq         INTEGER NOT NULL,
                msg         TEXT NOT NULL,
                face        INTEGER NOT NULL DEFAULT 0
            );

            CREATE INDEX idx_mii_msg_info_order
                ON mii_msg_info(mii_id, type, seq);

            INSERT INTO schema_version (version) VALUES (1);
            "
        )?;
    }

    info!("Database migrations complete");
    Ok(())
}
