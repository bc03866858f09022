//! Hand-off of trace lines from the edge handler to the trace writer

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Channel;
use portable_atomic::{AtomicU32, Ordering};

use super::line::TraceLine;

/// Bounded trace line queue with a drop counter
///
/// The edge side never waits: a line that does not fit is dropped and
/// counted, and the writer side collects the count.
pub struct TraceQueue<M: RawMutex, const N: usize> {
    lines: Channel<M, TraceLine, N>,
    dropped: AtomicU32,
}

impl<M: RawMutex, const N: usize> TraceQueue<M, N> {
    pub const fn new() -> Self {
        Self {
            lines: Channel::new(),
            dropped: AtomicU32::new(0),
        }
    }

    /// Queue a line without waiting
    ///
    /// Returns `false` if the queue was full and the line was dropped.
    pub fn push(&self, line: TraceLine) -> bool {
        if self.lines.try_send(line).is_ok() {
            return true;
        }
        self.dropped.fetch_add(1, Ordering::Relaxed);
        false
    }

    /// Wait for the next queued line
    pub async fn next(&self) -> TraceLine {
        self.lines.receive().await
    }

    /// Lines dropped since the last call
    pub fn take_dropped(&self) -> u32 {
        self.dropped.swap(0, Ordering::Relaxed)
    }
}

impl<M: RawMutex, const N: usize> Default for TraceQueue<M, N> {
    fn default() -> Self {
        Self::new()
    }
}
