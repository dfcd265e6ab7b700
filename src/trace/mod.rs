//! Reading of length-prefixed trace files
//!
//! A trace is a plain sequence of frames with no file header. Each frame is a
//! 12 byte [MetaHeader](meta_header::MetaHeader) followed by `capture_length`
//! bytes of the captured link-layer frame. All integers are big-endian.
//!
//! ```text
//! 0      2      4             8             12
//! +------+------+-------------+-------------+----------------
//! |caplen| pad  |   seconds   | microseconds| caplen bytes...
//! +------+------+-------------+-------------+----------------
//! ```
pub mod frame;
pub mod meta_header;
mod sync;
pub use sync::*;
#[cfg(feature = "tokio-async")]
mod tokio_impl;
use thiserror::Error;
#[cfg(feature = "tokio-async")]
pub use tokio_impl::AsyncTraceReader;

/// The largest frame a trace may carry
pub const MAX_FRAME_SIZE: u16 = 1600;

/// Errors that can occur when reading a trace file
///
/// All of them are fatal. A reader that returned one of these should not be
/// polled again.
#[derive(Debug, Error)]
pub enum TraceParseError {
    #[error("cannot read meta information: {0}")]
    MetaRead(#[source] std::io::Error),
    #[error("cannot read meta information: expected 12 bytes, got {got}")]
    TruncatedMeta { got: usize },
    #[error("packet too big: capture length {capture_length} exceeds {}", MAX_FRAME_SIZE)]
    OversizedFrame { capture_length: u16 },
    #[error("error reading packet: {0}")]
    PacketRead(#[source] std::io::Error),
    #[error("unexpected end of file encountered: expected {expected} packet bytes, got {got}")]
    TruncatedPacket { expected: u16, got: usize },
}
