//! Byte order handling for trace records and the headers inside them
//!
//! Every multi-byte field in a trace file, and in the Ethernet/IPv4/TCP/UDP
//! headers it carries, is stored in network (big-endian) order.

use std::io::Read;

use thiserror::Error;
/// Represents a trait for byte order operations
pub trait ByteOrder: Clone + Copy {
    /// Converts a byte array to a u16
    fn u16_from_bytes(self, bytes: [u8; 2]) -> u16;
    fn u16_to_bytes(self, value: u16) -> [u8; 2];
    /// Converts a byte array to a u32
    fn u32_from_bytes(self, bytes: [u8; 4]) -> u32;
    fn u32_to_bytes(self, value: u32) -> [u8; 4];
}

/// Network byte order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BigEndian;
impl ByteOrder for BigEndian {
    fn u16_from_bytes(self, bytes: [u8; 2]) -> u16 {
        u16::from_be_bytes(bytes)
    }
    fn u16_to_bytes(self, value: u16) -> [u8; 2] {
        value.to_be_bytes()
    }
    fn u32_from_bytes(self, bytes: [u8; 4]) -> u32 {
        u32::from_be_bytes(bytes)
    }
    fn u32_to_bytes(self, value: u32) -> [u8; 4] {
        value.to_be_bytes()
    }
}
/// Alias used by the header decoders
pub type NetworkOrder = BigEndian;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unexpected Size for {name}: expected {expected}, got {got}")]
pub struct UnexpectedSize {
    pub name: &'static str,
    pub expected: usize,
    pub got: usize,
}
/// Bounds checked reads at fixed offsets of a byte slice
///
/// Each accessor fails with [UnexpectedSize] instead of panicking when the
/// requested field runs past the end of the slice.
pub trait SliceExt {
    fn u8_at(&self, offset: usize) -> Result<u8, UnexpectedSize>;

    fn u16_at<B: ByteOrder>(&self, offset: usize, byte_order: B) -> Result<u16, UnexpectedSize>;

    fn u32_at<B: ByteOrder>(&self, offset: usize, byte_order: B) -> Result<u32, UnexpectedSize>;
    /// Returns `len` bytes starting at `offset`
    fn bytes_at(&self, offset: usize, len: usize) -> Result<&[u8], UnexpectedSize>;
}
impl SliceExt for [u8] {
    fn u8_at(&self, offset: usize) -> Result<u8, UnexpectedSize> {
        self.get(offset).copied().ok_or(UnexpectedSize {
            name: "u8",
            expected: offset + 1,
            got: self.len(),
        })
    }
    fn u16_at<B: ByteOrder>(&self, offset: usize, byte_order: B) -> Result<u16, UnexpectedSize> {
        let bytes = self.bytes_at(offset, 2).map_err(|err| UnexpectedSize {
            name: "u16",
            ..err
        })?;
        Ok(byte_order.u16_from_bytes([bytes[0], bytes[1]]))
    }
    fn u32_at<B: ByteOrder>(&self, offset: usize, byte_order: B) -> Result<u32, UnexpectedSize> {
        let bytes = self.bytes_at(offset, 4).map_err(|err| UnexpectedSize {
            name: "u32",
            ..err
        })?;
        Ok(byte_order.u32_from_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
    fn bytes_at(&self, offset: usize, len: usize) -> Result<&[u8], UnexpectedSize> {
        offset
            .checked_add(len)
            .and_then(|end| self.get(offset..end))
            .ok_or(UnexpectedSize {
                name: "bytes",
                expected: offset.saturating_add(len),
                got: self.len(),
            })
    }
}
pub trait ReadExt {
    /// Reads a u16 from the reader
    fn read_u16<B: ByteOrder>(&mut self, byte_order: B) -> Result<u16, std::io::Error>;

    /// Reads a u32 from the reader
    fn read_u32<B: ByteOrder>(&mut self, byte_order: B) -> Result<u32, std::io::Error>;
}
impl<R: Read> ReadExt for R {
    fn read_u16<B: ByteOrder>(&mut self, byte_order: B) -> Result<u16, std::io::Error> {
        let mut buffer = [0u8; 2];
        self.read_exact(&mut buffer)?;
        Ok(byte_order.u16_from_bytes(buffer))
    }
    fn read_u32<B: ByteOrder>(&mut self, byte_order: B) -> Result<u32, std::io::Error> {
        let mut buffer = [0u8; 4];
        self.read_exact(&mut buffer)?;
        Ok(byte_order.u32_from_bytes(buffer))
    }
}
