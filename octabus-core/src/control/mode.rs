//! Polled mode controller
//!
//! Follows the enable input and switches the bus direction only when the
//! requested direction differs from the committed one, so already stable
//! lines are never glitched by a redundant reconfiguration.

use octabus_hal::{FlexPin, InputPin};

use crate::bus::{DataBus, Direction};
use crate::state::BusContext;

/// Mode controller bound to the enable input
pub struct ModeController<E> {
    enable: E,
    /// If true, drive is requested when the pin is LOW
    active_low: bool,
}

impl<E: InputPin> ModeController<E> {
    /// Create a mode controller
    ///
    /// # Arguments
    /// - `enable`: The enable input pin
    /// - `active_low`: If true, the bus is driven while the pin reads LOW
    pub fn new(enable: E, active_low: bool) -> Self {
        Self { enable, active_low }
    }

    /// Logical enable state (true = drive requested)
    pub fn enabled(&self) -> bool {
        self.enable.is_high() != self.active_low
    }

    /// Direction requested by the enable input right now
    pub fn requested(&self) -> Direction {
        Direction::from_enabled(self.enabled())
    }

    /// Bring the bus direction in line with the enable input
    ///
    /// Reconfigures the lines before committing the flag. Returns the new
    /// direction if anything changed, `None` otherwise.
    pub fn update<L: FlexPin>(
        &mut self,
        ctx: &BusContext,
        bus: &mut DataBus<L>,
    ) -> Option<Direction> {
        let requested = self.requested();
        if requested == ctx.direction() {
            return None;
        }

        bus.set_direction(requested);
        ctx.commit_direction(requested);
        Some(requested)
    }
}
