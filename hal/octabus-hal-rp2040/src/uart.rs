//! Trace UART
//!
//! Wraps the buffered UART0 transmitter. Writes wait on the ring buffer
//! interrupt when it is full, yielding to the executor.

use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedUartTx, Error};
use embedded_io_async::Write;
use octabus_hal::UartTx;

/// Buffered UART0 transmitter used as the trace sink
pub struct TraceUart {
    tx: BufferedUartTx<'static, UART0>,
}

impl TraceUart {
    pub fn new(tx: BufferedUartTx<'static, UART0>) -> Self {
        Self { tx }
    }
}

impl UartTx for TraceUart {
    type Error = Error;

    async fn write(&mut self, data: &[u8]) -> Result<(), Error> {
        self.tx.write_all(data).await
    }

    async fn flush(&mut self) -> Result<(), Error> {
        Write::flush(&mut self.tx).await
    }
}
