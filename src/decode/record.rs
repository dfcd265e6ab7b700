use crate::decode::{
    ethernet::EthernetHeader, ipv4::Ipv4Header, tcp::TcpHeader, udp::UdpHeader,
};

/// Transport layer of a decoded frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transport {
    Tcp(TcpHeader),
    Udp(UdpHeader),
    /// The IP protocol is TCP or UDP but its fixed header was not captured
    Truncated { protocol: u8 },
    /// Not TCP or UDP, or no IP layer at all
    #[default]
    None,
}

/// A frame decoded as far down the Ethernet/IPv4/TCP/UDP stack as its
/// captured bytes allow
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PacketRecord {
    pub capture_length: u16,
    pub timestamp: f64,
    pub ethernet: Option<EthernetHeader>,
    pub ip: Option<Ipv4Header>,
    pub transport: Transport,
}
impl PacketRecord {
    /// A record with no decoded layers
    pub fn bare(capture_length: u16, timestamp: f64) -> Self {
        Self {
            capture_length,
            timestamp,
            ..Default::default()
        }
    }
    /// True when the Ethernet header announces IPv4, whether or not the IP
    /// header itself could be decoded
    pub fn is_ipv4(&self) -> bool {
        self.ethernet.is_some_and(|ethernet| ethernet.is_ipv4())
    }
    pub fn tcp(&self) -> Option<&TcpHeader> {
        match &self.transport {
            Transport::Tcp(tcp) => Some(tcp),
            _ => None,
        }
    }
    pub fn udp(&self) -> Option<&UdpHeader> {
        match &self.transport {
            Transport::Udp(udp) => Some(udp),
            _ => None,
        }
    }
}

/// Bytes carried above the transport header, as claimed by the IP header
///
/// Inconsistent headers can make this negative.
pub fn payload_length(ip: &Ipv4Header, transport_header_length: u16) -> i32 {
    i32::from(ip.total_length) - i32::from(ip.header_length) - i32::from(transport_header_length)
}
