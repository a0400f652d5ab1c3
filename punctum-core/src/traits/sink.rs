//! Output sink trait
//!
//! Abstracts the serial-to-parallel shift-out mechanism the controller
//! delivers its output buffer to. Implementations live in the drivers
//! crate; the controller never touches pins directly.

/// Sink for the serialized actuator drive bits
pub trait OutputSink {
    /// Transport-specific error
    type Error;

    /// Latch a complete frame into the register chain
    ///
    /// `frame` holds 8-bit groups in transmission order: the
    /// most-significant group (the register farthest down the chain)
    /// first. The call blocks until the frame is latched.
    fn write_frame(&mut self, frame: &[u8]) -> Result<(), Self::Error>;

    /// Drive the output-enable line
    ///
    /// While disabled the registers keep their contents but the actuator
    /// coils are not driven.
    fn set_output_enabled(&mut self, enabled: bool) -> Result<(), Self::Error>;
}
