//! UART serial transmit abstraction
//!
//! The bus trace is a plain byte stream, so only the transmit half is
//! modeled here.

use core::future::Future;

/// UART transmitter
///
/// Async trait for sending data over a UART interface. Writes suspend
/// while the transmit buffer is full instead of spinning, so other tasks
/// on the same executor keep running.
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the UART
    ///
    /// Completes once all data has been queued or an error occurs.
    fn write(&mut self, data: &[u8]) -> impl Future<Output = Result<(), Self::Error>>;

    /// Wait until buffered data has left the transmitter
    fn flush(&mut self) -> impl Future<Output = Result<(), Self::Error>>;
}
