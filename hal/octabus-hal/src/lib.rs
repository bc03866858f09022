//! Octabus Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits that the bus logic in
//! `octabus-core` is written against. Chip-specific HALs implement them, and
//! host tests implement them with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  octabus-firmware (executors, tasks)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  octabus-core (mode/edge state machine) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  octabus-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  octabus-hal-rp2040                     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`], [`gpio::OutputPin`] - Digital I/O
//! - [`gpio::FlexPin`] - Line whose direction can be switched at runtime
//! - [`gpio::EdgeLatch`] - Latched rising-edge input for the bus clock
//! - [`uart::UartTx`] - Serial transmit, used as the trace sink

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::{EdgeLatch, FlexPin, InputPin, OutputPin};
pub use uart::UartTx;
