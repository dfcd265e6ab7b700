use std::io::{self, Write};

use crate::{
    decode::PacketRecord,
    report::{MISSING, Report},
};

/// One line per TCP segment
///
/// `ts src_ip dst_ip ttl src_port dst_port window seq ack`. The ack column
/// holds a placeholder unless the ACK flag is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct PacketPrinter;

impl Report for PacketPrinter {
    fn observe<W: Write>(&mut self, record: &PacketRecord, out: &mut W) -> io::Result<()> {
        let (Some(ip), Some(tcp)) = (&record.ip, record.tcp()) else {
            return Ok(());
        };
        write!(
            out,
            "{:.6} {} {} {} {} {} {} {}",
            record.timestamp,
            ip.src(),
            ip.dst(),
            ip.ttl,
            tcp.src_port,
            tcp.dst_port,
            tcp.window,
            tcp.seq
        )?;
        if tcp.is_ack() {
            writeln!(out, " {}", tcp.ack)
        } else {
            writeln!(out, " {MISSING}")
        }
    }
    fn finish<W: Write>(self, _out: &mut W) -> io::Result<()> {
        Ok(())
    }
}
