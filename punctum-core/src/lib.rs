//! Board-agnostic core logic for the Punctum braille display
//!
//! This crate contains all driver logic that does not depend on
//! specific hardware implementations:
//!
//! - Configuration type definitions
//! - Braille text encoder (letters, digits, prefix signs, mirroring)
//! - Per-dot actuator state and settle-time scheduler
//! - Shift-register output serializer
//! - Display controller orchestrating the above
//! - Output sink trait for the shift-out/latch hardware

#![no_std]
#![deny(unsafe_code)]

pub mod actuator;
pub mod braille;
pub mod config;
pub mod display;
pub mod output;
pub mod traits;
