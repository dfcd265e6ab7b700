/// The analysis a run performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// First and last timestamps, frame and IPv4 counts
    Summary,
    /// One length breakdown line per IPv4 frame
    Length,
    /// One field dump line per TCP segment
    PacketPrint,
    /// Payload bytes per (source, destination) pair
    TrafficMatrix,
}

/// Settings for one run, built once and passed down by reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub mode: Mode,
    /// 0 is quiet. Each step adds more diagnostic logging.
    pub verbosity: u8,
}
impl AnalysisConfig {
    pub fn new(mode: Mode) -> Self {
        Self { mode, verbosity: 0 }
    }
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }
    /// Default log filter for the configured verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
