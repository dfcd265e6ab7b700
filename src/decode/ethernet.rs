use crate::byte_order::{NetworkOrder, SliceExt, UnexpectedSize};

/// EtherType values the decoder cares about
pub mod ether_type {
    pub const IPV4: u16 = 0x0800;
    pub const ARP: u16 = 0x0806;
}

/// Ethernet II header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EthernetHeader {
    pub destination: [u8; 6],
    pub source: [u8; 6],
    /// Host order
    pub ether_type: u16,
}
impl EthernetHeader {
    pub const SIZE: usize = 14;
    /// Decodes the header at the start of `data`
    ///
    /// Returns the header and the number of bytes it occupies.
    pub fn parse(data: &[u8]) -> Result<(Self, usize), UnexpectedSize> {
        let header = data.bytes_at(0, Self::SIZE).map_err(|err| UnexpectedSize {
            name: "ethernet header",
            ..err
        })?;
        let mut destination = [0u8; 6];
        destination.copy_from_slice(&header[0..6]);
        let mut source = [0u8; 6];
        source.copy_from_slice(&header[6..12]);
        let ether_type = header.u16_at(12, NetworkOrder::default())?;
        Ok((
            Self {
                destination,
                source,
                ether_type,
            },
            Self::SIZE,
        ))
    }
    pub fn is_ipv4(&self) -> bool {
        self.ether_type == ether_type::IPV4
    }
}
