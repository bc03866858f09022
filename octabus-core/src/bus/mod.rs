//! The 8-line parallel data bus
//!
//! All lines switch direction together; values are transferred MSB first
//! onto the first listed line.

pub mod data;
pub mod direction;

pub use data::{DataBus, BUS_WIDTH};
pub use direction::Direction;
