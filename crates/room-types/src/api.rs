use serde::Serialize;

/// Root node name of a `.met` document.
pub const CONCIERGE_MII_NODE: &str = "ConciergeMii";

// -- Concierge metadata --

/// A concierge Mii as served from `/mii/{id}.met`.
///
/// Field order is the element order on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConciergeMii {
    pub miiid: i64,
    pub clothes: i64,
    pub color1: String,
    pub color2: String,
    pub action: i64,
    pub prof: String,
    pub name: String,
    /// Repeated: one `<msginfo>` element per group.
    pub msginfo: Vec<MsgInfo>,
    pub movieid: i64,
    pub voice: i64,
}

/// One group of messages sharing a `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MsgInfo {
    #[serde(rename = "type")]
    pub kind: i64,
    /// Repeated: one `<msglist>` element per entry.
    pub msglist: Vec<MsgEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MsgEntry {
    pub seq: i64,
    pub msg: String,
    pub face: i64,
}
