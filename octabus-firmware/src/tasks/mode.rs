//! Mode controller task
//!
//! Polls the enable input and switches the bus direction on change. The
//! poll interval is far below anything a person toggling the enable line
//! could notice.

use defmt::*;
use embassy_time::{Duration, Ticker};

use octabus_core::control::ModeController;
use octabus_hal_rp2040::gpio::EnableInput;

use crate::channels::{SharedBus, CONTEXT};

/// Enable poll interval in milliseconds
pub const POLL_INTERVAL_MS: u64 = 1;

/// Mode task - keeps the bus direction in line with the enable input
#[embassy_executor::task]
pub async fn mode_task(mut controller: ModeController<EnableInput>, bus: &'static SharedBus) {
    info!("Mode task started");

    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));

    loop {
        let changed = bus.lock(|bus| controller.update(&CONTEXT, &mut bus.borrow_mut()));
        if let Some(direction) = changed {
            info!("Bus direction: {}", direction);
        }

        ticker.next().await;
    }
}
