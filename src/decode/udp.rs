use crate::byte_order::{NetworkOrder, SliceExt, UnexpectedSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UdpHeader {
    pub src_port: u16,
    pub dst_port: u16,
    /// Length of header and payload. Zero marks the header as unusable.
    pub length: u16,
    pub checksum: u16,
}
impl UdpHeader {
    pub const SIZE: usize = 8;

    pub fn parse(data: &[u8]) -> Result<(Self, usize), UnexpectedSize> {
        let header = data.bytes_at(0, Self::SIZE).map_err(|err| UnexpectedSize {
            name: "udp header",
            ..err
        })?;
        let order = NetworkOrder::default();
        Ok((
            Self {
                src_port: header.u16_at(0, order)?,
                dst_port: header.u16_at(2, order)?,
                length: header.u16_at(4, order)?,
                checksum: header.u16_at(6, order)?,
            },
            Self::SIZE,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_udp_header() {
        let bytes = [0x00, 0x35, 0xc3, 0x50, 0x00, 0x1c, 0xab, 0xcd];
        let (header, consumed) = UdpHeader::parse(&bytes).unwrap();
        assert_eq!(consumed, 8);
        assert_eq!(header.src_port, 53);
        assert_eq!(header.dst_port, 50000);
        assert_eq!(header.length, 28);
        assert_eq!(header.checksum, 0xabcd);
        assert!(UdpHeader::parse(&bytes[..6]).is_err());
    }
}
