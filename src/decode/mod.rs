//! Decoding of captured frames into [PacketRecord]s
//!
//! Headers are read through bounds checked accessors. A layer is only
//! decoded when its fixed header was captured in full:
//!
//! | Layer    | Offset                 | Required bytes |
//! |----------|------------------------|----------------|
//! | Ethernet | 0                      | 14             |
//! | IPv4     | 14                     | 20             |
//! | TCP      | 14 + IP header length  | 20             |
//! | UDP      | 14 + IP header length  | 8              |
//!
//! Header fields that claim more bytes than were captured (an IP header
//! length or TCP data offset past the end of the frame) are kept as read.
pub mod ethernet;
pub mod ipv4;
mod record;
pub mod tcp;
pub mod udp;
pub use record::*;
use tracing::{debug, warn};

use crate::{
    decode::{
        ethernet::EthernetHeader,
        ipv4::{Ipv4Header, protocol},
        tcp::TcpHeader,
        udp::UdpHeader,
    },
    trace::frame::Frame,
};

/// Decodes one frame
pub fn decode_frame(frame: &Frame<'_>) -> PacketRecord {
    decode(frame.capture_length(), frame.timestamp(), frame.data)
}

/// Decodes the captured bytes of a frame
pub fn decode(capture_length: u16, timestamp: f64, data: &[u8]) -> PacketRecord {
    let mut record = PacketRecord::bare(capture_length, timestamp);
    let Ok((ethernet, offset)) = EthernetHeader::parse(data) else {
        debug!(capture_length, "Frame shorter than an ethernet header");
        return record;
    };
    record.ethernet = Some(ethernet);
    if !ethernet.is_ipv4() {
        debug!(ether_type = ethernet.ether_type, "Non-IP frame");
        return record;
    }
    let network = &data[offset..];
    if network.is_empty() {
        return record;
    }
    let ip = match Ipv4Header::parse(network) {
        Ok((ip, _)) => ip,
        Err(err) => {
            warn!(timestamp, "IPv4 header not fully captured: {err}");
            return record;
        }
    };
    record.ip = Some(ip);
    if network.len() < ip.header_length as usize {
        warn!(
            timestamp,
            header_length = ip.header_length,
            captured = network.len(),
            "IPv4 header length exceeds captured bytes"
        );
    }
    let segment = network
        .get(ip.header_length as usize..)
        .unwrap_or_default();
    record.transport = match ip.protocol {
        protocol::TCP => match TcpHeader::parse(segment) {
            Ok((tcp, header_length)) => {
                if segment.len() < header_length {
                    warn!(
                        timestamp,
                        header_length,
                        captured = segment.len(),
                        "TCP data offset exceeds captured bytes"
                    );
                }
                Transport::Tcp(tcp)
            }
            Err(err) => {
                warn!(timestamp, "TCP header not fully captured: {err}");
                Transport::Truncated {
                    protocol: ip.protocol,
                }
            }
        },
        protocol::UDP => match UdpHeader::parse(segment) {
            Ok((udp, _)) => Transport::Udp(udp),
            Err(err) => {
                warn!(timestamp, "UDP header not fully captured: {err}");
                Transport::Truncated {
                    protocol: ip.protocol,
                }
            }
        },
        other => {
            debug!(protocol = other, "Unknown transport protocol");
            Transport::None
        }
    };
    record
}
