//! In memory trace fixtures
//!
//! Frames are built with etherparse so the decoder is checked against an
//! independent encoder.
#![allow(clippy::unwrap_used)]
use etherparse::PacketBuilder;

use crate::trace::meta_header::MetaHeader;

const SRC_MAC: [u8; 6] = [0x02, 0x00, 0x00, 0x00, 0x00, 0x01];
const DST_MAC: [u8; 6] = [0x02, 0x00, 0x00, 0x00, 0x00, 0x02];

/// Builds the bytes of a trace file one frame at a time
#[derive(Debug, Default)]
pub struct TraceBuilder {
    bytes: Vec<u8>,
}
impl TraceBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn frame(mut self, ts_sec: u32, ts_usec: u32, data: &[u8]) -> Self {
        let header = MetaHeader::new(data.len() as u16, ts_sec, ts_usec);
        self.bytes.extend_from_slice(&header.to_bytes());
        self.bytes.extend_from_slice(data);
        self
    }
    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

/// Parameters of a synthetic Ethernet/IPv4/TCP frame
#[derive(Debug, Clone)]
pub struct TcpFrame {
    pub src: [u8; 4],
    pub dst: [u8; 4],
    pub ttl: u8,
    pub src_port: u16,
    pub dst_port: u16,
    pub seq: u32,
    pub ack: Option<u32>,
    pub window: u16,
    pub payload_len: usize,
}
impl Default for TcpFrame {
    fn default() -> Self {
        Self {
            src: [10, 0, 0, 1],
            dst: [10, 0, 0, 2],
            ttl: 64,
            src_port: 40000,
            dst_port: 80,
            seq: 100,
            ack: Some(500),
            window: 8192,
            payload_len: 0,
        }
    }
}
impl TcpFrame {
    pub fn build(&self) -> Vec<u8> {
        let builder = PacketBuilder::ethernet2(SRC_MAC, DST_MAC)
            .ipv4(self.src, self.dst, self.ttl)
            .tcp(self.src_port, self.dst_port, self.seq, self.window);
        let builder = match self.ack {
            Some(ack) => builder.ack(ack),
            None => builder,
        };
        let payload = vec![0x61u8; self.payload_len];
        let mut out = Vec::with_capacity(builder.size(payload.len()));
        builder.write(&mut out, &payload).unwrap();
        out
    }
}

pub fn tcp_frame(src: [u8; 4], dst: [u8; 4], payload_len: usize) -> Vec<u8> {
    TcpFrame {
        src,
        dst,
        payload_len,
        ..Default::default()
    }
    .build()
}

pub fn udp_frame(src: [u8; 4], dst: [u8; 4], payload_len: usize) -> Vec<u8> {
    let builder = PacketBuilder::ethernet2(SRC_MAC, DST_MAC)
        .ipv4(src, dst, 64)
        .udp(5353, 53);
    let payload = vec![0x62u8; payload_len];
    let mut out = Vec::with_capacity(builder.size(payload.len()));
    builder.write(&mut out, &payload).unwrap();
    out
}

/// An ARP request, which carries no IP layer
pub fn non_ip_frame() -> Vec<u8> {
    let mut out = Vec::with_capacity(42);
    out.extend_from_slice(&[0xff; 6]);
    out.extend_from_slice(&SRC_MAC);
    out.extend_from_slice(&[0x08, 0x06]);
    out.extend_from_slice(&[0x00, 0x01, 0x08, 0x00, 0x06, 0x04, 0x00, 0x01]);
    out.extend_from_slice(&SRC_MAC);
    out.extend_from_slice(&[10, 0, 0, 1]);
    out.extend_from_slice(&[0x00; 6]);
    out.extend_from_slice(&[10, 0, 0, 2]);
    out
}
