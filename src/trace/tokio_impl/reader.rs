//! Asynchronous reader for trace files
use futures::Stream;
use tokio::io::AsyncRead;
use tracing::trace;

use crate::{
    decode::{PacketRecord, decode_frame},
    trace::{MAX_FRAME_SIZE, TraceParseError, frame::Frame, meta_header::MetaHeader},
    utils::read_full_async,
};
#[derive(Debug)]
pub struct AsyncTraceReader<R: AsyncRead + Unpin> {
    reader: R,
    /// Buffer for frame data
    buffer: Box<[u8]>,
    /// Buffer for the meta record
    header_buffer: [u8; MetaHeader::SIZE],
    frames_read: u64,
}
impl<R: AsyncRead + Unpin> AsyncTraceReader<R> {
    /// Creates a new `AsyncTraceReader` positioned at the first meta record
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: vec![0u8; MAX_FRAME_SIZE as usize].into_boxed_slice(),
            header_buffer: [0; MetaHeader::SIZE],
            frames_read: 0,
        }
    }
    pub fn frames_read(&self) -> u64 {
        self.frames_read
    }
    /// Reads the next frame from the trace
    /// Returns `Ok(None)` at a clean end of file
    /// Returns `Err` if a record was cut short or is too large
    pub async fn next_frame(&mut self) -> Result<Option<Frame<'_>>, TraceParseError> {
        let got = read_full_async(&mut self.reader, &mut self.header_buffer)
            .await
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
        let len = capture_length as usize;
        let got = read_full_async(&mut self.reader, &mut self.buffer[..len])
            .await
            .map_err(TraceParseError::PacketRead)?;
        if got < len {
            return Err(TraceParseError::TruncatedPacket {
                expected: capture_length,
                got,
            });
        }
        self.frames_read += 1;
        trace!(frame = self.frames_read, capture_length, "Read frame");
        Ok(Some(Frame::new(header, &self.buffer[..len])))
    }
    pub async fn next_record(&mut self) -> Result<Option<PacketRecord>, TraceParseError> {
        Ok(self.next_frame().await?.map(|frame| decode_frame(&frame)))
    }
    /// Turns the reader into a stream of decoded records
    ///
    /// The stream ends after the first error.
    pub fn into_stream(self) -> impl Stream<Item = Result<PacketRecord, TraceParseError>> {
        futures::stream::try_unfold(self, |mut reader| async move {
            let next = reader.next_record().await?;
            Ok::<_, TraceParseError>(next.map(|record| (record, reader)))
        })
    }
}
