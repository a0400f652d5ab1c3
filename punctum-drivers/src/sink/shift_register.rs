//! Bit-banged shift-register chain sink
//!
//! Drives a chain of 74HC595-style serial-to-parallel registers through
//! four GPIO lines:
//!
//! - SER (data): serial data input
//! - SRCLK (clock): bits shift in on the rising edge
//! - RCLK (latch): register contents appear on the outputs on the rising edge
//! - OE (enable): output enable, active-low on the 74HC595
//!
//! A frame is shifted out under a low latch, one byte per register,
//! most-significant byte and most-significant bit first, then committed
//! with a single latch rise so the actuator coils never see a partially
//! shifted frame.

use embedded_hal::digital::OutputPin;

use punctum_core::traits::OutputSink;

/// Errors raised by the shift-register sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SinkError {
    /// A GPIO write failed
    Pin,
}

/// Shift-register chain driver
///
/// Generic over the four `embedded-hal` output pins.
pub struct ShiftRegisterChain<D, C, L, E> {
    data: D,
    clock: C,
    latch: L,
    enable: E,
    /// If true, outputs are enabled when the OE pin is LOW
    enable_inverted: bool,
}

impl<D, C, L, E> ShiftRegisterChain<D, C, L, E>
where
    D: OutputPin,
    C: OutputPin,
    L: OutputPin,
    E: OutputPin,
{
    /// Create a chain driver and put every line into its safe state
    ///
    /// Data, clock and latch start low; outputs start disabled.
    ///
    /// # Arguments
    /// - `enable_inverted`: if true, outputs are enabled when OE is LOW
    ///   (the 74HC595 wiring)
    pub fn new(
        data: D,
        clock: C,
        latch: L,
        enable: E,
        enable_inverted: bool,
    ) -> Result<Self, SinkError> {
        let mut chain = Self {
            data,
            clock,
            latch,
            enable,
            enable_inverted,
        };
        chain.data.set_low().map_err(|_| SinkError::Pin)?;
        chain.clock.set_low().map_err(|_| SinkError::Pin)?;
        chain.latch.set_low().map_err(|_| SinkError::Pin)?;
        chain.apply_enable(false)?;
        Ok(chain)
    }

    /// Create a driver for an active-low-OE chain (74HC595)
    pub fn hc595(data: D, clock: C, latch: L, enable: E) -> Result<Self, SinkError> {
        Self::new(data, clock, latch, enable, true)
    }

    /// Consume the driver and reclaim the pins
    pub fn release(self) -> (D, C, L, E) {
        (self.data, self.clock, self.latch, self.enable)
    }

    fn apply_enable(&mut self, enabled: bool) -> Result<(), SinkError> {
        if enabled != self.enable_inverted {
            self.enable.set_high().map_err(|_| SinkError::Pin)
        } else {
            self.enable.set_low().map_err(|_| SinkError::Pin)
        }
    }

    /// Clock one byte into the chain, most-significant bit first
    fn shift_byte(&mut self, byte: u8) -> Result<(), SinkError> {
        for bit in (0..8).rev() {
            if byte & (1 << bit) != 0 {
                self.data.set_high().map_err(|_| SinkError::Pin)?;
            } else {
                self.data.set_low().map_err(|_| SinkError::Pin)?;
            }
            self.clock.set_high().map_err(|_| SinkError::Pin)?;
            self.clock.set_low().map_err(|_| SinkError::Pin)?;
        }
        Ok(())
    }
}

impl<D, C, L, E> OutputSink for ShiftRegisterChain<D, C, L, E>
where
    D: OutputPin,
    C: OutputPin,
    L: OutputPin,
    E: OutputPin,
{
    type Error = SinkError;

    fn write_frame(&mut self, frame: &[u8]) -> Result<(), SinkError> {
        self.latch.set_low().map_err(|_| SinkError::Pin)?;
        for &group in frame {
            self.shift_byte(group)?;
        }
        self.latch.set_high().map_err(|_| SinkError::Pin)
    }

    fn set_output_enabled(&mut self, enabled: bool) -> Result<(), SinkError> {
        self.apply_enable(enabled)
    }
}
