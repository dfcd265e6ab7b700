use std::io::Cursor;

use crate::byte_order::{ByteOrder, NetworkOrder, ReadExt};

/// Per-frame meta record, kept in the same layout as the trace file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetaHeader {
    /// Number of frame bytes stored after this record
    pub capture_length: u16,
    /// Unused, carried through as read
    pub padding: u16,
    pub ts_sec: u32,
    pub ts_usec: u32,
}

impl MetaHeader {
    pub const SIZE: usize = 12;

    pub fn new(capture_length: u16, ts_sec: u32, ts_usec: u32) -> Self {
        Self {
            capture_length,
            padding: 0,
            ts_sec,
            ts_usec,
        }
    }
    #[inline(always)]
    pub fn parse_bytes(bytes: &[u8; Self::SIZE]) -> Self {
        let mut cursor = Cursor::new(bytes);
        // The cursor is over a fixed size array so none of these reads can fail
        let capture_length = cursor.read_u16(NetworkOrder::default()).unwrap_or_default();
        let padding = cursor.read_u16(NetworkOrder::default()).unwrap_or_default();
        let ts_sec = cursor.read_u32(NetworkOrder::default()).unwrap_or_default();
        let ts_usec = cursor.read_u32(NetworkOrder::default()).unwrap_or_default();
        Self {
            capture_length,
            padding,
            ts_sec,
            ts_usec,
        }
    }
    /// Encodes the record in trace file layout
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let order = NetworkOrder::default();
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..2].copy_from_slice(&order.u16_to_bytes(self.capture_length));
        bytes[2..4].copy_from_slice(&order.u16_to_bytes(self.padding));
        bytes[4..8].copy_from_slice(&order.u32_to_bytes(self.ts_sec));
        bytes[8..12].copy_from_slice(&order.u32_to_bytes(self.ts_usec));
        bytes
    }
    /// Capture time as fractional seconds since the epoch
    pub fn timestamp(&self) -> f64 {
        self.ts_sec as f64 + self.ts_usec as f64 / 1_000_000.0
    }
    /// Capture time as a UTC datetime
    ///
    /// Returns `None` if the microsecond field is out of range
    #[cfg(feature = "chrono")]
    pub fn datetime(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp(
            i64::from(self.ts_sec),
            self.ts_usec.checked_mul(1_000)?,
        )
    }
}
