//! Display controller
//!
//! Orchestrates encoder, cell/dot state, scheduler and serializer behind
//! the public text/pattern/dot APIs.

pub mod cell;
pub mod controller;

pub use cell::Cell;
pub use controller::{BrailleDisplay, DisplayError};
