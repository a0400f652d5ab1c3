//! Configuration type definitions
//!
//! These types describe the display geometry and actuator timing.
//! Configuration is stored in flash as postcard-serialized binary data.

use super::hardware::ShiftRegisterHwConfig;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dots per braille cell (standard 6-dot braille)
pub const DOTS_PER_CELL: usize = 6;

/// Drive outputs per dot (raise coil + retract coil)
pub const OUTPUTS_PER_DOT: usize = 2;

/// Maximum cells per display
pub const MAX_CELLS: usize = 20;

/// Maximum dots per display
pub const MAX_DOTS: usize = MAX_CELLS * DOTS_PER_CELL;

/// Maximum 8-bit output groups (one group per shift register)
pub const MAX_OUTPUT_GROUPS: usize = (MAX_DOTS * OUTPUTS_PER_DOT + 7) / 8;

/// Default cell count (the reference hardware carries 10 cells)
pub const DEFAULT_CELLS: u8 = 10;

/// Default minimum dwell between actuator drive reversals in milliseconds
pub const DEFAULT_SETTLE_MS: u32 = 50;

/// Buffer size for postcard-encoded configuration
pub const CONFIG_BUF_LEN: usize = 64;

/// Errors raised when validating a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Cell count is zero
    NoCells,
    /// Cell count exceeds `MAX_CELLS`
    TooManyCells,
}

/// Actuator timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimingConfig {
    /// Minimum dwell between drive reversals of one dot (ms)
    pub settle_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            settle_ms: DEFAULT_SETTLE_MS,
        }
    }
}

/// Complete display configuration
///
/// This is the top-level configuration structure covering geometry,
/// actuator timing and the shift-register wiring.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Configuration version for compatibility checks
    pub version: u8,
    /// Number of braille cells (1..=MAX_CELLS)
    pub cells: u8,
    /// Actuator timing
    pub timing: TimingConfig,
    /// Shift-register wiring
    pub shift_register: ShiftRegisterHwConfig,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            cells: DEFAULT_CELLS,
            timing: TimingConfig::default(),
            shift_register: ShiftRegisterHwConfig::default(),
        }
    }
}

impl DisplayConfig {
    /// Create a configuration for the given cell count
    pub fn with_cells(cells: u8) -> Result<Self, ConfigError> {
        let config = Self {
            cells,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for out-of-range values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cells == 0 {
            return Err(ConfigError::NoCells);
        }
        if self.cells as usize > MAX_CELLS {
            return Err(ConfigError::TooManyCells);
        }
        Ok(())
    }

    /// Total dot count
    pub fn dot_count(&self) -> usize {
        self.cells as usize * DOTS_PER_CELL
    }

    /// Total drive output count (two per dot)
    pub fn output_count(&self) -> usize {
        self.dot_count() * OUTPUTS_PER_DOT
    }

    /// Number of 8-bit output groups (one per chained shift register)
    pub fn group_count(&self) -> usize {
        (self.output_count() + 7) / 8
    }

    /// Serialize to postcard binary into `buf`
    ///
    /// Returns the written prefix of `buf`. A `CONFIG_BUF_LEN`-sized
    /// buffer is always large enough.
    #[cfg(feature = "serde")]
    pub fn to_postcard<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], postcard::Error> {
        postcard::to_slice(self, buf)
    }

    /// Deserialize from postcard binary
    #[cfg(feature = "serde")]
    pub fn from_postcard(bytes: &[u8]) -> Result<Self, postcard::Error> {
        postcard::from_bytes(bytes)
    }
}
