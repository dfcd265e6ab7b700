use std::io::{self, Write};

use crate::{decode::PacketRecord, report::Report};

/// Trace wide totals
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    first_timestamp: Option<f64>,
    last_timestamp: f64,
    total_packets: u64,
    ip_packets: u64,
}
impl Summary {
    pub fn first_timestamp(&self) -> f64 {
        self.first_timestamp.unwrap_or_default()
    }
    pub fn last_timestamp(&self) -> f64 {
        self.last_timestamp
    }
    pub fn total_packets(&self) -> u64 {
        self.total_packets
    }
    pub fn ip_packets(&self) -> u64 {
        self.ip_packets
    }
}
impl Report for Summary {
    fn observe<W: Write>(&mut self, record: &PacketRecord, _out: &mut W) -> io::Result<()> {
        self.first_timestamp.get_or_insert(record.timestamp);
        self.last_timestamp = record.timestamp;
        self.total_packets += 1;
        if record.is_ipv4() {
            self.ip_packets += 1;
        }
        Ok(())
    }
    fn finish<W: Write>(self, out: &mut W) -> io::Result<()> {
        writeln!(out, "FIRST PKT: {:.6}", self.first_timestamp())?;
        writeln!(out, "LAST PKT: {:.6}", self.last_timestamp)?;
        writeln!(out, "TOTAL PACKETS: {}", self.total_packets)?;
        writeln!(out, "IP PACKETS: {}", self.ip_packets)?;
        Ok(())
    }
}
