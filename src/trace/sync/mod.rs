//! Synchronous trace reader
use std::io::Read;

use tracing::trace;

use crate::{
    decode::{PacketRecord, decode_frame},
    trace::{MAX_FRAME_SIZE, TraceParseError, frame::Frame, meta_header::MetaHeader},
    utils::read_full,
};
/// A synchronous reader for trace files
#[derive(Debug)]
pub struct SyncTraceReader<R: Read> {
    reader: R,
    /// Buffer for frame data
    ///
    /// Allocated once at the largest frame size a trace may hold
    buffer: Box<[u8]>,
    header_buffer: [u8; MetaHeader::SIZE],
    frames_read: u64,
}
impl<R: Read> SyncTraceReader<R> {
    /// Creates a new `SyncTraceReader` positioned at the first meta record
    ///
    /// Nothing is read until [SyncTraceReader::next_frame] is called
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: vec![0u8; MAX_FRAME_SIZE as usize].into_boxed_slice(),
            header_buffer: [0; MetaHeader::SIZE],
            frames_read: 0,
        }
    }
    /// Number of frames returned so far
    pub fn frames_read(&self) -> u64 {
        self.frames_read
    }
    /// Reads the next frame from the trace
    ///
    /// Returns `Ok(None)` when the stream ends exactly on a meta record
    /// boundary. Any other short read is an error.
    pub fn next_frame(&mut self) -> Result<Option<Frame<'_>>, TraceParseError> {
        let got = read_full(&mut self.reader, &mut self.header_buffer)
            .map_err(TraceParseError::MetaRead)?;
        if got == 0 {
            return Ok(None);
        }
        if got < MetaHeader::SIZE {
            return Err(TraceParseError::TruncatedMeta { got });
        }
        let header = MetaHeader::parse_bytes(&self.header_buffer);
        let capture_length = header.capture_length;
        if capture_length > MAX_FRAME_SIZE {
            return Err(TraceParseError::OversizedFrame { capture_length });
        }
        let target = &mut self.buffer[..capture_length as usize];
        if capture_length > 0 {
            let got = read_full(&mut self.reader, target).map_err(TraceParseError::PacketRead)?;
            if got < capture_length as usize {
                return Err(TraceParseError::TruncatedPacket {
                    expected: capture_length,
                    got,
                });
            }
        }
        self.frames_read += 1;
        trace!(
            frame = self.frames_read,
            capture_length,
            timestamp = header.timestamp(),
            "Read frame"
        );
        Ok(Some(Frame::new(
            header,
            &self.buffer[..capture_length as usize],
        )))
    }
    /// Reads and decodes the next frame
    pub fn next_record(&mut self) -> Result<Option<PacketRecord>, TraceParseError> {
        Ok(self.next_frame()?.map(|frame| decode_frame(&frame)))
    }
    /// Turns the reader into an iterator of decoded records
    pub fn records(self) -> Records<R> {
        Records {
            reader: self,
            finished: false,
        }
    }
}

/// Iterator over the decoded records of a trace
///
/// Yields at most one error, after which it is exhausted.
#[derive(Debug)]
pub struct Records<R: Read> {
    reader: SyncTraceReader<R>,
    finished: bool,
}
impl<R: Read> Records<R> {
    pub fn frames_read(&self) -> u64 {
        self.reader.frames_read()
    }
}
impl<R: Read> Iterator for Records<R> {
    type Item = Result<PacketRecord, TraceParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.reader.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}
