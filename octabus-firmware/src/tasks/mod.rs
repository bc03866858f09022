//! Embassy async tasks
//!
//! - `edge_task` runs on the high-priority interrupt executor.
//! - `mode_task` and `trace_task` run on the thread-mode executor.

pub mod edge;
pub mod mode;
pub mod trace;

pub use edge::edge_task;
pub use mode::mode_task;
pub use trace::trace_task;
