//! In-memory buffer sink
//!
//! Records frames instead of driving hardware. Useful as a host-side
//! simulation backend and for integration tests that exercise the full
//! controller -> serializer -> sink path.

use heapless::Vec;

use punctum_core::config::MAX_OUTPUT_GROUPS;
use punctum_core::traits::OutputSink;

/// Sink that keeps the last latched frame in memory
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    frame: Vec<u8, MAX_OUTPUT_GROUPS>,
    output_enabled: bool,
    writes: u32,
}

impl BufferSink {
    /// Create an empty sink with outputs disabled
    pub fn new() -> Self {
        Self::default()
    }

    /// The last frame latched, in transmission order
    pub fn frame(&self) -> &[u8] {
        &self.frame
    }

    /// Whether the output-enable line is currently driven
    pub fn is_output_enabled(&self) -> bool {
        self.output_enabled
    }

    /// Number of frames latched so far
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl OutputSink for BufferSink {
    type Error = core::convert::Infallible;

    fn write_frame(&mut self, frame: &[u8]) -> Result<(), Self::Error> {
        self.frame.clear();
        let _ = self.frame.extend_from_slice(frame);
        self.writes += 1;
        Ok(())
    }

    fn set_output_enabled(&mut self, enabled: bool) -> Result<(), Self::Error> {
        self.output_enabled = enabled;
        Ok(())
    }
}
