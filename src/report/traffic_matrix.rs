use std::{
    collections::HashMap,
    io::{self, Write},
};

use tracing::debug;

use crate::{
    decode::{PacketRecord, payload_length},
    report::Report,
};

/// Direction sensitive (source, destination) address pair
pub type HostPair = (String, String);

/// TCP payload bytes per host pair
///
/// Rows are written once the whole trace has been read, ordered by the pair.
#[derive(Debug, Clone, Default)]
pub struct TrafficMatrix {
    totals: HashMap<HostPair, i64>,
}
impl TrafficMatrix {
    pub fn add(&mut self, src: String, dst: String, bytes: i64) {
        *self.totals.entry((src, dst)).or_default() += bytes;
    }
    pub fn total(&self, src: &str, dst: &str) -> Option<i64> {
        self.totals
            .get(&(src.to_owned(), dst.to_owned()))
            .copied()
    }
    pub fn len(&self) -> usize {
        self.totals.len()
    }
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
    /// All rows, sorted by source then destination
    pub fn into_rows(self) -> Vec<(HostPair, i64)> {
        let mut rows: Vec<_> = self.totals.into_iter().collect();
        rows.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        rows
    }
}
impl Report for TrafficMatrix {
    fn observe<W: Write>(&mut self, record: &PacketRecord, _out: &mut W) -> io::Result<()> {
        let (Some(ip), Some(tcp)) = (&record.ip, record.tcp()) else {
            return Ok(());
        };
        if tcp.data_offset == 0 {
            debug!(timestamp = record.timestamp, "Skipping segment with zero data offset");
            return Ok(());
        }
        let bytes = payload_length(ip, tcp.header_length);
        self.add(ip.src().to_string(), ip.dst().to_string(), i64::from(bytes));
        Ok(())
    }
    fn finish<W: Write>(self, out: &mut W) -> io::Result<()> {
        for ((src, dst), total) in self.into_rows() {
            writeln!(out, "{src} {dst} {total}")?;
        }
        Ok(())
    }
}
