//! Hardware configuration types
//!
//! These types define the wiring of the shift-register chain that drives
//! the dot actuators.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO pin number
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
        }
    }
}

/// Shift-register chain wiring
///
/// A chain of 74HC595-style serial-to-parallel registers drives the
/// actuator coils. The output-enable line is active-low on the 74HC595.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShiftRegisterHwConfig {
    /// Serial data input (SER)
    pub data_pin: PinConfig,
    /// Shift clock (SRCLK)
    pub clock_pin: PinConfig,
    /// Latch / register clock (RCLK)
    pub latch_pin: PinConfig,
    /// Output enable (OE)
    pub enable_pin: PinConfig,
}

impl Default for ShiftRegisterHwConfig {
    fn default() -> Self {
        Self {
            data_pin: PinConfig::new(2),
            clock_pin: PinConfig::new(3),
            latch_pin: PinConfig::new(4),
            enable_pin: PinConfig::inverted(5),
        }
    }
}
