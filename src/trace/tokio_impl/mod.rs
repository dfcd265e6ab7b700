mod reader;
pub use reader::AsyncTraceReader;
