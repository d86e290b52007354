use room_db::Database;
use room_types::mii::check_integrity;

use crate::error::ApiError;

/// Raw bytes of a stored Mii, checksum included.
pub fn fetch_mii(db: &Database, mii_id: i64) -> Result<Vec<u8>, ApiError> {
    let row = db
        .get_mii_data(mii_id)
        .map_err(ApiError::internal)?
        .ok_or(ApiError::NotFound)?;

    Ok(check_integrity(row.mii_id, row.data)?)
}
