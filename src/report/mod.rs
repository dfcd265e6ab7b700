//! Reports folded over the decoded records of a trace
//!
//! Each run drives exactly one [Report] over the whole trace. Per-record lines
//! are written as records arrive, aggregate lines once the trace ends.
mod length;
mod packet_print;
mod summary;
mod traffic_matrix;
use std::io::{self, Read, Write};

pub use length::LengthReport;
pub use packet_print::PacketPrinter;
pub use summary::Summary;
use thiserror::Error;
use tracing::info;
pub use traffic_matrix::{HostPair, TrafficMatrix};

use crate::{
    config::{AnalysisConfig, Mode},
    decode::PacketRecord,
    trace::{SyncTraceReader, TraceParseError},
};

/// Printed where a value cannot be computed
pub const MISSING: char = '-';
/// Printed for transport protocols other than TCP and UDP
pub const UNKNOWN: char = '?';

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Trace(#[from] TraceParseError),
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

/// A fold over the records of one trace
pub trait Report {
    /// Consumes one record, writing any line it produces
    fn observe<W: Write>(&mut self, record: &PacketRecord, out: &mut W) -> io::Result<()>;
    /// Writes whatever needs the whole trace
    fn finish<W: Write>(self, out: &mut W) -> io::Result<()>;
}

/// Reads the whole trace and writes the report selected by `config`
///
/// Returns the number of frames read. A trace error stops the run; lines
/// already written for earlier records stay written.
pub fn run_report<R: Read, W: Write>(
    config: &AnalysisConfig,
    reader: SyncTraceReader<R>,
    out: &mut W,
) -> Result<u64, ReportError> {
    let frames = match config.mode {
        Mode::Summary => drive(reader, Summary::default(), out)?,
        Mode::Length => drive(reader, LengthReport, out)?,
        Mode::PacketPrint => drive(reader, PacketPrinter, out)?,
        Mode::TrafficMatrix => drive(reader, TrafficMatrix::default(), out)?,
    };
    info!(mode = ?config.mode, frames, "Report complete");
    Ok(frames)
}

fn drive<R: Read, W: Write, P: Report>(
    reader: SyncTraceReader<R>,
    mut report: P,
    out: &mut W,
) -> Result<u64, ReportError> {
    let mut records = reader.records();
    for record in records.by_ref() {
        report.observe(&record?, out)?;
    }
    report.finish(out)?;
    out.flush()?;
    Ok(records.frames_read())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::{
        test_helpers::{TcpFrame, TraceBuilder, non_ip_frame, tcp_frame, udp_frame},
        trace::meta_header::MetaHeader,
    };

    fn run(mode: Mode, trace: Vec<u8>) -> Result<String, ReportError> {
        let mut out = Vec::new();
        run_report(
            &AnalysisConfig::new(mode),
            SyncTraceReader::new(Cursor::new(trace)),
            &mut out,
        )?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    fn mixed_trace() -> Vec<u8> {
        TraceBuilder::new()
            .frame(100, 0, &tcp_frame([10, 0, 0, 1], [10, 0, 0, 2], 40))
            .frame(100, 500_000, &udp_frame([10, 0, 0, 2], [10, 0, 0, 3], 5))
            .frame(101, 0, &non_ip_frame())
            .frame(101, 1, &[])
            .frame(102, 250_000, &tcp_frame([10, 0, 0, 2], [10, 0, 0, 1], 0))
            .build()
    }

    #[test]
    fn ack_segment_is_printed_with_seq_and_ack() -> anyhow::Result<()> {
        let frame = TcpFrame {
            seq: 100,
            ack: Some(500),
            ..Default::default()
        }
        .build();
        let output = run(Mode::PacketPrint, TraceBuilder::new().frame(1, 0, &frame).build())?;
        let fields: Vec<&str> = output.trim_end().split(' ').collect();
        assert_eq!(fields.len(), 9);
        assert_eq!(&fields[7..], ["100", "500"]);
        Ok(())
    }

    #[test]
    fn traffic_matrix_sums_payloads() -> anyhow::Result<()> {
        let trace = TraceBuilder::new()
            .frame(1, 0, &tcp_frame([1, 1, 1, 1], [2, 2, 2, 2], 40))
            .frame(2, 0, &tcp_frame([1, 1, 1, 1], [2, 2, 2, 2], 60))
            .build();
        assert_eq!(run(Mode::TrafficMatrix, trace)?, "1.1.1.1 2.2.2.2 100\n");
        Ok(())
    }

    #[test]
    fn summary_of_single_non_ip_frame() -> anyhow::Result<()> {
        let trace = TraceBuilder::new().frame(5, 0, &non_ip_frame()).build();
        let output = run(Mode::Summary, trace)?;
        assert!(output.contains("TOTAL PACKETS: 1\n"));
        assert!(output.contains("IP PACKETS: 0\n"));
        Ok(())
    }

    #[test]
    fn summary_is_repeatable() -> anyhow::Result<()> {
        let first = run(Mode::Summary, mixed_trace())?;
        let second = run(Mode::Summary, mixed_trace())?;
        assert_eq!(first, second);
        assert_eq!(
            first,
            "FIRST PKT: 100.000000\nLAST PKT: 102.250000\nTOTAL PACKETS: 5\nIP PACKETS: 3\n"
        );
        Ok(())
    }

    #[test]
    fn every_mode_over_mixed_trace() -> anyhow::Result<()> {
        assert_eq!(
            run(Mode::Length, mixed_trace())?,
            "100.000000 94 80 20 T 20 40\n\
             100.500000 47 33 20 U 8 5\n\
             102.250000 54 40 20 T 20 0\n"
        );
        assert_eq!(
            run(Mode::PacketPrint, mixed_trace())?,
            "100.000000 10.0.0.1 10.0.0.2 64 40000 80 8192 100 500\n\
             102.250000 10.0.0.2 10.0.0.1 64 40000 80 8192 100 500\n"
        );
        assert_eq!(
            run(Mode::TrafficMatrix, mixed_trace())?,
            "10.0.0.1 10.0.0.2 40\n10.0.0.2 10.0.0.1 0\n"
        );
        Ok(())
    }

    #[test]
    fn oversized_frame_is_fatal_in_every_mode() {
        let mut trace = TraceBuilder::new().frame(1, 0, &non_ip_frame()).build();
        trace.extend_from_slice(&MetaHeader::new(1601, 0, 0).to_bytes());
        trace.extend_from_slice(&[0u8; 1601]);
        for mode in [
            Mode::Summary,
            Mode::Length,
            Mode::PacketPrint,
            Mode::TrafficMatrix,
        ] {
            let err = run(mode, trace.clone()).unwrap_err();
            assert!(
                matches!(
                    err,
                    ReportError::Trace(TraceParseError::OversizedFrame { .. })
                ),
                "{mode:?}: {err}"
            );
        }
    }

    #[test]
    fn run_reports_frame_count() -> anyhow::Result<()> {
        let mut out = Vec::new();
        let frames = run_report(
            &AnalysisConfig::new(Mode::Length),
            SyncTraceReader::new(Cursor::new(mixed_trace())),
            &mut out,
        )?;
        assert_eq!(frames, 5);
        Ok(())
    }
}
