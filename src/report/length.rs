use std::io::{self, Write};

use crate::{
    decode::{
        PacketRecord, Transport,
        ipv4::protocol,
        payload_length,
        udp::UdpHeader,
    },
    report::{MISSING, Report, UNKNOWN},
};

/// Per IPv4 frame length breakdown
///
/// `ts caplen ip_len ip_hl transport trans_hl payload_len`
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthReport;

/// Transport columns of a length line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransportLengths {
    Known { marker: char, header_length: u16 },
    Unavailable { marker: char },
    Unknown,
}
impl TransportLengths {
    fn of(transport: &Transport) -> Self {
        match transport {
            Transport::Tcp(tcp) if tcp.data_offset == 0 => Self::Unavailable { marker: 'T' },
            Transport::Tcp(tcp) => Self::Known {
                marker: 'T',
                header_length: tcp.header_length,
            },
            Transport::Udp(udp) if udp.length == 0 => Self::Unavailable { marker: 'U' },
            Transport::Udp(_) => Self::Known {
                marker: 'U',
                header_length: UdpHeader::SIZE as u16,
            },
            Transport::Truncated { protocol } => Self::Unavailable {
                marker: transport_marker(*protocol),
            },
            Transport::None => Self::Unknown,
        }
    }
}
fn transport_marker(ip_protocol: u8) -> char {
    match ip_protocol {
        protocol::TCP => 'T',
        protocol::UDP => 'U',
        _ => UNKNOWN,
    }
}

impl Report for LengthReport {
    fn observe<W: Write>(&mut self, record: &PacketRecord, out: &mut W) -> io::Result<()> {
        if !record.is_ipv4() {
            return Ok(());
        }
        write!(out, "{:.6} {}", record.timestamp, record.capture_length)?;
        let Some(ip) = &record.ip else {
            return writeln!(out, " {MISSING} {MISSING} {MISSING} {MISSING} {MISSING}");
        };
        write!(out, " {} {}", ip.total_length, ip.header_length)?;
        match TransportLengths::of(&record.transport) {
            TransportLengths::Known {
                marker,
                header_length,
            } => writeln!(
                out,
                " {marker} {header_length} {}",
                payload_length(ip, header_length)
            ),
            TransportLengths::Unavailable { marker } => {
                writeln!(out, " {marker} {MISSING} {MISSING}")
            }
            TransportLengths::Unknown => writeln!(out, " {UNKNOWN} {UNKNOWN} {UNKNOWN}"),
        }
    }
    fn finish<W: Write>(self, _out: &mut W) -> io::Result<()> {
        Ok(())
    }
}
