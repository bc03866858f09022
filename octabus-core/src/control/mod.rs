//! Bus direction state machine
//!
//! - [`ModeController`] is polled from the main loop and is the only writer
//!   of the bus direction and the direction flag.
//! - [`on_rising_edge`] runs once per clock edge and is the only writer of
//!   bus values and the counter. [`next_rising_edge`] paces it without
//!   losing an edge that arrives mid-handling.

pub mod edge;
pub mod mode;

pub use edge::{next_rising_edge, on_rising_edge};
pub use mode::ModeController;
