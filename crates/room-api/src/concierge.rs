use room_db::Database;
use room_types::api::ConciergeMii;

use crate::error::ApiError;
use crate::msginfo::group_msginfo;

/// Assemble the `.met` document for a concierge Mii.
///
/// Both the Mii metadata and its concierge profile must exist. A Mii without
/// any message-info rows is still served, with an empty `msginfo`.
pub fn fetch_concierge_mii(db: &Database, mii_id: i64) -> Result<ConciergeMii, ApiError> {
    let (metadata, concierge) = db
        .get_concierge_join(mii_id)
        .map_err(ApiError::internal)?
        .into_pair()
        .ok_or(ApiError::NotFound)?;

    let rows = db.get_msg_info(mii_id).map_err(ApiError::internal)?;

    Ok(ConciergeMii {
        miiid: mii_id,
        clothes: concierge.clothes,
        color1: metadata.color1,
        color2: metadata.color2,
        action: concierge.action,
        prof: concierge.prof,
        name: metadata.name,
        msginfo: group_msginfo(rows),
        movieid: concierge.movie_id,
        voice: concierge.voice,
    })
}
