//! Shared bus state
//!
//! The direction flag and the counter are the only state shared between the
//! polled mode controller and the edge handler. Both live in one
//! [`BusContext`] that is handed to each side explicitly.

pub mod context;
pub mod events;

pub use context::BusContext;
pub use events::{Access, EdgeEvent};
