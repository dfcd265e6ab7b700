use crate::trace::meta_header::MetaHeader;

/// One captured frame, borrowed from the reader's buffer
///
/// Only valid until the next call to `next_frame`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<'a> {
    pub header: MetaHeader,
    pub data: &'a [u8],
}
impl<'a> Frame<'a> {
    pub fn new(header: MetaHeader, data: &'a [u8]) -> Self {
        Self { header, data }
    }
    pub fn capture_length(&self) -> u16 {
        self.header.capture_length
    }
    pub fn timestamp(&self) -> f64 {
        self.header.timestamp()
    }
}
