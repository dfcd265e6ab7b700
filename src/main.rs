//! trace-scope CLI entry point.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use trace_scope::{AnalysisConfig, Mode, SyncTraceReader, run_report};

/// Analyze a packet trace file.
#[derive(Parser, Debug)]
#[command(name = "trace-scope")]
#[command(version, about, long_about = None)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .multiple(false)
        .args(["summary", "length", "packet_print", "traffic_matrix"])
))]
struct Args {
    /// Trace file to read
    #[arg(short = 't', value_name = "TRACE_FILE")]
    trace_file: PathBuf,

    /// Summary mode: first/last timestamps and packet counts
    #[arg(short = 's')]
    summary: bool,

    /// Length analysis mode: one line per IPv4 packet
    #[arg(short = 'l')]
    length: bool,

    /// Packet printing mode: one line per TCP packet
    #[arg(short = 'p')]
    packet_print: bool,

    /// Traffic matrix mode: payload bytes per source/destination pair
    #[arg(short = 'm')]
    traffic_matrix: bool,

    /// Log diagnostics to stderr (repeat for more)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> AnalysisConfig {
        let mode = if self.summary {
            Mode::Summary
        } else if self.length {
            Mode::Length
        } else if self.packet_print {
            Mode::PacketPrint
        } else {
            Mode::TrafficMatrix
        };
        AnalysisConfig::new(mode).with_verbosity(self.verbose)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.config();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_filter().into()),
        )
        .init();
    debug!(?config, trace_file = %args.trace_file.display(), "Starting");

    let file = File::open(&args.trace_file)
        .with_context(|| format!("cannot open trace file {}", args.trace_file.display()))?;
    let reader = SyncTraceReader::new(BufReader::new(file));
    let mut out = BufWriter::new(io::stdout().lock());
    run_report(&config, reader, &mut out)
        .with_context(|| format!("failed to analyze {}", args.trace_file.display()))?;
    Ok(())
}
