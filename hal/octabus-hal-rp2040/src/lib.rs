//! RP2040-specific HAL for the Octabus firmware
//!
//! This crate provides RP2040 implementations of the `octabus-hal` traits:
//!
//! - [`gpio::FlexLine`] - bidirectional data bus line
//! - [`gpio::EnableInput`] - enable signal input
//! - [`gpio::ClockInput`] - latched rising-edge clock input
//! - [`uart::TraceUart`] - buffered UART used as the trace sink
//! - [`pins::PinBank`] - GPIO allocation by pin number

#![no_std]

pub mod gpio;
pub mod pins;
pub mod uart;

// Re-export shared traits from octabus-hal for convenience
pub use octabus_hal::{EdgeLatch, FlexPin, InputPin, OutputPin, UartTx};
