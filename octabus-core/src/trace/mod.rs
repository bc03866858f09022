//! Serial bus trace
//!
//! One line per handled edge: the eight bus bits MSB first, a space and a
//! one-character tag (`w` or `r`). The literal line `RUNNING` is written
//! once at startup before any edge is traced.

pub mod line;
pub mod queue;
pub mod writer;

pub use line::{TraceLine, BANNER, LINE_ENDING, TRACE_LINE_LEN};
pub use queue::TraceQueue;
pub use writer::{Forwarded, TraceWriter};
