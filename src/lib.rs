//! Reads length-prefixed packet trace files, decodes each frame through
//! Ethernet, IPv4 and TCP/UDP, and folds the result into one of four reports.
//!
//! ```no_run
//! use std::{fs::File, io::BufReader};
//!
//! use trace_scope::{AnalysisConfig, Mode, SyncTraceReader, run_report};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = SyncTraceReader::new(BufReader::new(File::open("capture.trace")?));
//! run_report(&AnalysisConfig::new(Mode::Summary), reader, &mut std::io::stdout())?;
//! # Ok(())
//! # }
//! ```
pub mod byte_order;
pub mod config;
pub mod decode;
pub mod report;
#[cfg(test)]
pub(crate) mod test_helpers;
pub mod trace;
pub mod utils;

pub use config::{AnalysisConfig, Mode};
pub use decode::{PacketRecord, Transport, decode_frame};
pub use report::{Report, ReportError, run_report};
#[cfg(feature = "tokio-async")]
pub use trace::AsyncTraceReader;
pub use trace::{SyncTraceReader, TraceParseError};
