//! Actuator state and settle-time scheduling
//!
//! Each dot is a bidirectional actuator that must dwell a minimum settle
//! time between drive reversals. The scheduler tracks target vs. current
//! state per dot and commits deferred changes when their settle window
//! has elapsed.

pub mod dot;
pub mod scheduler;

pub use dot::{DotPosition, DotState};
pub use scheduler::DotScheduler;
