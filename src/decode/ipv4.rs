use std::net::Ipv4Addr;

use crate::byte_order::{NetworkOrder, SliceExt, UnexpectedSize};

/// IP protocol numbers
pub mod protocol {
    pub const ICMP: u8 = 1;
    pub const TCP: u8 = 6;
    pub const UDP: u8 = 17;
}

/// Fixed part of an IPv4 header
///
/// Options are not decoded. Checksums are not verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv4Header {
    /// Header length in bytes (the IHL field times the 4 byte word size)
    pub header_length: u16,
    /// Host order
    pub total_length: u16,
    pub ttl: u8,
    pub protocol: u8,
    pub src_addr: u32,
    pub dst_addr: u32,
}
impl Ipv4Header {
    pub const MIN_SIZE: usize = 20;
    pub const WORD_SIZE: u16 = 4;

    /// Decodes the header at the start of `data`
    ///
    /// Requires the 20 byte fixed header to be present. Returns the header and
    /// the header length it declares, which may run past the end of `data`.
    pub fn parse(data: &[u8]) -> Result<(Self, usize), UnexpectedSize> {
        let header = data.bytes_at(0, Self::MIN_SIZE).map_err(|err| UnexpectedSize {
            name: "ipv4 header",
            ..err
        })?;
        let order = NetworkOrder::default();
        let header_length = u16::from(header.u8_at(0)? & 0x0f) * Self::WORD_SIZE;
        let parsed = Self {
            header_length,
            total_length: header.u16_at(2, order)?,
            ttl: header.u8_at(8)?,
            protocol: header.u8_at(9)?,
            src_addr: header.u32_at(12, order)?,
            dst_addr: header.u32_at(16, order)?,
        };
        Ok((parsed, header_length as usize))
    }
    pub fn src(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.src_addr)
    }
    pub fn dst(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.dst_addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ipv4_header() {
        let bytes = [
            0x45, 0x00, 0x00, 0x3c, // version, ihl, tos, total length 60
            0x1c, 0x46, 0x40, 0x00, // id, flags, fragment offset
            0x40, 0x06, 0xb1, 0xe6, // ttl 64, tcp, checksum
            0xc0, 0xa8, 0x00, 0x68, // 192.168.0.104
            0xc0, 0xa8, 0x00, 0x01, // 192.168.0.1
        ];
        let (header, consumed) = Ipv4Header::parse(&bytes).unwrap();
        assert_eq!(consumed, 20);
        assert_eq!(header.header_length, 20);
        assert_eq!(header.total_length, 60);
        assert_eq!(header.ttl, 64);
        assert_eq!(header.protocol, protocol::TCP);
        assert_eq!(header.src().to_string(), "192.168.0.104");
        assert_eq!(header.dst(), Ipv4Addr::new(192, 168, 0, 1));
    }

    #[test]
    fn header_length_counts_options() {
        let mut bytes = [0u8; 20];
        bytes[0] = 0x46;
        let (header, consumed) = Ipv4Header::parse(&bytes).unwrap();
        assert_eq!(header.header_length, 24);
        assert_eq!(consumed, 24);
    }

    #[test]
    fn short_ipv4_header() {
        let err = Ipv4Header::parse(&[0x45, 0x00, 0x00]).unwrap_err();
        assert_eq!(err.expected, 20);
        assert_eq!(err.got, 3);
    }
}
