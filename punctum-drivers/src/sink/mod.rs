//! Output sink implementations

pub mod buffer;
pub mod shift_register;

pub use buffer::BufferSink;
pub use shift_register::{ShiftRegisterChain, SinkError};
