//! Trace output over a UART

use embassy_futures::yield_now;
use embassy_sync::blocking_mutex::raw::RawMutex;
use octabus_hal::UartTx;

use super::line::{TraceLine, BANNER, LINE_ENDING};
use super::queue::TraceQueue;

/// Outcome of forwarding one queued line
pub struct Forwarded<E> {
    /// The line taken from the queue
    pub line: TraceLine,
    /// Result of writing it to the UART
    pub result: Result<(), E>,
    /// Lines dropped by the queue since the previous forward
    pub dropped: u32,
}

/// Writes the banner and trace lines to a serial transmitter
pub struct TraceWriter<T> {
    tx: T,
}

impl<T: UartTx> TraceWriter<T> {
    pub fn new(tx: T) -> Self {
        Self { tx }
    }

    /// Write the startup banner and wait for it to leave the buffer
    pub async fn banner(&mut self) -> Result<(), T::Error> {
        self.tx.write(BANNER).await?;
        self.tx.write(LINE_ENDING).await?;
        self.tx.flush().await
    }

    /// Write one trace line
    pub async fn emit(&mut self, line: &TraceLine) -> Result<(), T::Error> {
        self.tx.write(line.as_bytes()).await
    }

    /// Wait for the next queued line and write it out
    ///
    /// Always yields once after writing, so a queue that never runs dry
    /// cannot starve other tasks on the same executor.
    pub async fn forward<M: RawMutex, const N: usize>(
        &mut self,
        queue: &TraceQueue<M, N>,
    ) -> Forwarded<T::Error> {
        let line = queue.next().await;
        let result = self.emit(&line).await;
        let dropped = queue.take_dropped();

        yield_now().await;

        Forwarded {
            line,
            result,
            dropped,
        }
    }
}
