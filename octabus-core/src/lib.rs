//! Board-agnostic core logic for the Octabus data bus firmware
//!
//! This crate contains everything that does not depend on a specific chip:
//!
//! - The 8-line data bus and its direction
//! - Shared direction flag and counter
//! - Mode controller (enable input to bus direction)
//! - Rising edge handler (drive counter or sample bus)
//! - Serial trace encoding
//! - Board configuration and validation

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod config;
pub mod control;
pub mod state;
pub mod trace;

#[cfg(test)]
mod mock;
