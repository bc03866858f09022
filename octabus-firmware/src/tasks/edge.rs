//! Clock edge task
//!
//! Waits for rising edges on the clock input and runs the edge handler.
//! Runs on the interrupt executor, so it preempts the mode and trace tasks
//! the same way a GPIO interrupt would. It never blocks: the trace line is
//! queued without waiting and dropped if the queue is full.
//!
//! An edge that arrives while the previous one is handled stays in the
//! clock's hardware latch and is handled next, without re-arming the wait.

use defmt::*;

use octabus_core::control::{next_rising_edge, on_rising_edge};
use octabus_core::trace::TraceLine;
use octabus_hal_rp2040::gpio::ClockInput;

use crate::channels::{SharedBus, CONTEXT, TRACE_QUEUE};

/// Edge task - one bus transfer per rising clock edge
#[embassy_executor::task]
pub async fn edge_task(mut clock: ClockInput, bus: &'static SharedBus) {
    info!("Edge task started");

    loop {
        next_rising_edge(&mut clock).await;

        let event = bus.lock(|bus| on_rising_edge(&CONTEXT, &mut bus.borrow_mut()));
        trace!("Edge: {}", event);

        if !TRACE_QUEUE.push(TraceLine::new(event)) {
            trace!("Trace queue full, line dropped");
        }
    }
}
