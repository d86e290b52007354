//! Raw Mii payload constants and the length-based integrity check.
//!
//! A stored Mii is the 74-byte RFLCharData blob followed by its big-endian
//! CRC-16. Only the presence of the checksum is checked here, inferred from the
//! total length. Its value is never recomputed.

use thiserror::Error;
use tracing::error;

/// Size of a bare Mii without its trailing checksum.
pub const MII_SIZE: usize = 74;

/// Size of the checksum suffix.
pub const MII_CRC_SIZE: usize = 2;

/// Size of a well-formed stored Mii.
pub const MII_SIZE_WITH_CRC: usize = MII_SIZE + MII_CRC_SIZE;

/// A stored Mii whose length does not match [`MII_SIZE_WITH_CRC`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Mii #{mii_id} is {len} bytes, expected {MII_SIZE_WITH_CRC}")]
pub struct IntegrityFault {
    pub mii_id: i64,
    pub len: usize,
}

impl IntegrityFault {
    /// True when the payload looks like a bare Mii that was stored without its CRC-16.
    pub fn is_missing_crc(&self) -> bool {
        self.len == MII_SIZE
    }
}

/// Pass `data` through untouched if it carries a checksum, otherwise report
/// the fault and withhold the bytes.
pub fn check_integrity(mii_id: i64, data: Vec<u8>) -> Result<Vec<u8>, IntegrityFault> {
    if data.len() == MII_SIZE_WITH_CRC {
        return Ok(data);
    }

    let fault = IntegrityFault { mii_id, len: data.len() };
    if fault.is_missing_crc() {
        error!("Mii #{} lacks a CRC-16 checksum. Was it inserted properly?", mii_id);
    } else {
        error!("Mii #{} has unexpected length {} (expected {})", mii_id, fault.len, MII_SIZE_WITH_CRC);
    }
    Err(fault)
}
