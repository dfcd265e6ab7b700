use crate::byte_order::{NetworkOrder, SliceExt, UnexpectedSize};

/// TCP flag bits, after the reserved bits are masked off
pub mod flags {
    pub const FIN: u8 = 0x01;
    pub const SYN: u8 = 0x02;
    pub const RST: u8 = 0x04;
    pub const PSH: u8 = 0x08;
    pub const ACK: u8 = 0x10;
    pub const URG: u8 = 0x20;
    /// Everything above URG is reserved or ECN and is stripped
    pub const MASK: u8 = 0x3f;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TcpHeader {
    pub src_port: u16,
    pub dst_port: u16,
    pub seq: u32,
    pub ack: u32,
    /// Raw data offset field, in 4 byte words
    pub data_offset: u8,
    /// Header length in bytes
    pub header_length: u16,
    pub flags: u8,
    pub window: u16,
}
impl TcpHeader {
    pub const MIN_SIZE: usize = 20;

    /// Decodes the header at the start of `data`
    ///
    /// Returns the header and the header length it declares.
    pub fn parse(data: &[u8]) -> Result<(Self, usize), UnexpectedSize> {
        let header = data.bytes_at(0, Self::MIN_SIZE).map_err(|err| UnexpectedSize {
            name: "tcp header",
            ..err
        })?;
        let order = NetworkOrder::default();
        let data_offset = header.u8_at(12)? >> 4;
        let header_length = u16::from(data_offset) * 4;
        let parsed = Self {
            src_port: header.u16_at(0, order)?,
            dst_port: header.u16_at(2, order)?,
            seq: header.u32_at(4, order)?,
            ack: header.u32_at(8, order)?,
            data_offset,
            header_length,
            flags: header.u8_at(13)? & flags::MASK,
            window: header.u16_at(14, order)?,
        };
        Ok((parsed, header_length as usize))
    }
    pub fn is_ack(&self) -> bool {
        self.flags & flags::ACK != 0
    }
}
