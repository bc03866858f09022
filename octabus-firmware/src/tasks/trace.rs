//! Serial trace task
//!
//! Drains trace lines from the edge task onto the trace UART. Shares the
//! thread executor with the mode task; `forward` yields after every line
//! so the enable line keeps being polled under a trace backlog.

use defmt::*;

use octabus_core::trace::TraceWriter;
use octabus_hal_rp2040::uart::TraceUart;

use crate::channels::TRACE_QUEUE;

/// Trace task - writes one serial line per handled edge
#[embassy_executor::task]
pub async fn trace_task(mut writer: TraceWriter<TraceUart>) {
    info!("Trace task started");

    loop {
        let forwarded = writer.forward(&TRACE_QUEUE).await;

        if let Err(e) = forwarded.result {
            warn!("Failed to write trace line {}: {:?}", forwarded.line, e);
        }
        if forwarded.dropped > 0 {
            warn!("{} trace lines dropped (queue full)", forwarded.dropped);
        }
    }
}
