//! Hardware abstraction traits
//!
//! The seam between the display controller and the shift-out hardware.

pub mod sink;

pub use sink::OutputSink;
