//! Regrouping of flat message-info rows into nested `msginfo` groups.

use std::collections::HashMap;

use tracing::warn;

use room_db::models::MsgInfoRow;
use room_types::api::{MsgEntry, MsgInfo};

/// Fold rows into one group per run of equal `type`, in a single pass.
///
/// Rows must already be sorted by `(type, seq)`; this function does not sort.
/// Group order is the order types are first seen and entries keep input order.
/// Duplicate `(type, seq)` pairs are kept as separate entries.
///
/// A `type` that shows up again after a different one means the input was not
/// sorted. It is logged and starts a second group with the same key rather
/// than being merged back.
pub fn group_msginfo(rows: Vec<MsgInfoRow>) -> Vec<MsgInfo> {
    let mut groups: Vec<MsgInfo> = Vec::new();
    // type -> index of the most recent group opened for it
    let mut seen: HashMap<i64, usize> = HashMap::new();

    for row in rows {
        let entry = MsgEntry {
            seq: row.seq,
            msg: row.msg,
            face: row.face,
        };

        match groups.last_mut() {
            Some(current) if current.kind == row.kind => current.msglist.push(entry),
            _ => {
                if let Some(&previous) = seen.get(&row.kind) {
                    warn!(
                        "Mii #{}: msginfo type {} reappears after group {}; rows are not sorted by type",
                        row.mii_id, row.kind, previous
                    );
                }
                seen.insert(row.kind, groups.len());
                groups.push(MsgInfo {
                    kind: row.kind,
                    msglist: vec![entry],
                });
            }
        }
    }

    groups
}
