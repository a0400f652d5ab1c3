//! Output sink implementations for the Punctum braille display
//!
//! This crate provides concrete implementations of the
//! [`OutputSink`](punctum_core::traits::OutputSink) trait:
//!
//! - Bit-banged 74HC595 shift-register chain over `embedded-hal` pins
//! - In-memory buffer sink for host-side simulation and testing

#![no_std]
#![deny(unsafe_code)]

pub mod sink;
