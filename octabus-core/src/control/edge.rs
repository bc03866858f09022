//! Rising clock edge handler
//!
//! Must run to completion quickly: no blocking, no waiting, no I/O beyond
//! one pass over the eight lines. The trace line is returned as an event
//! and written out by someone else.

use octabus_hal::{EdgeLatch, FlexPin};

use crate::bus::{DataBus, Direction};
use crate::state::{BusContext, EdgeEvent};

/// Handle one rising clock edge
///
/// The action is chosen by the direction last committed to `ctx`:
/// - Drive: advance the counter and put the new value on the bus.
/// - Sense: sample the bus. The counter is left alone.
pub fn on_rising_edge<L: FlexPin>(ctx: &BusContext, bus: &mut DataBus<L>) -> EdgeEvent {
    match ctx.direction() {
        Direction::Drive => {
            let value = ctx.advance_counter();
            bus.write_byte(value);
            EdgeEvent::write(value)
        }
        Direction::Sense => EdgeEvent::read(bus.read_byte()),
    }
}

/// Wait for the next rising clock edge to handle
///
/// An edge latched while the previous one was being handled is returned
/// straight away. Otherwise this waits for a fresh edge and clears its
/// latch, so the next call sees only edges that arrive after this one.
pub async fn next_rising_edge<C: EdgeLatch>(clock: &mut C) {
    if clock.take_edge() {
        return;
    }
    clock.wait_for_rising_edge().await;
    clock.take_edge();
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use embassy_futures::block_on;

    use super::*;
    use crate::control::ModeController;
    use crate::mock::{mock_lines, set_external, MockClock, MockEnable};
    use crate::state::Access;

    #[test]
    fn test_sense_edge_samples_bus() {
        let ctx = BusContext::new();
        let mut bus = DataBus::new(mock_lines());
        set_external(&mut bus, [true, false, true, false, true, false, true, false]);

        let event = on_rising_edge(&ctx, &mut bus);
        assert_eq!(event, EdgeEvent::read(0b1010_1010));
        assert_eq!(ctx.counter(), 0);
    }

    #[test]
    fn test_sense_edges_leave_counter() {
        let ctx = BusContext::new();
        let mut bus = DataBus::new(mock_lines());

        for _ in 0..300 {
            let event = on_rising_edge(&ctx, &mut bus);
            assert_eq!(event.access, Access::Read);
        }
        assert_eq!(ctx.counter(), 0);
    }

    #[test]
    fn test_drive_edge_writes_incremented_counter() {
        let ctx = BusContext::new();
        let mut bus = DataBus::new(mock_lines());
        let enable = Cell::new(false);
        let mut controller = ModeController::new(MockEnable(&enable), true);
        controller.update(&ctx, &mut bus);

        assert_eq!(on_rising_edge(&ctx, &mut bus), EdgeEvent::write(1));
        assert_eq!(on_rising_edge(&ctx, &mut bus), EdgeEvent::write(2));
        assert_eq!(bus.read_byte(), 2);
        assert_eq!(ctx.counter(), 2);
    }

    #[test]
    fn test_drive_counter_wraps() {
        let ctx = BusContext::new();
        let mut bus = DataBus::new(mock_lines());
        ctx.commit_direction(Direction::Drive);
        bus.set_direction(Direction::Drive);

        let last = (0..256).map(|_| on_rising_edge(&ctx, &mut bus).value).last();
        assert_eq!(last, Some(0));
        assert_eq!(ctx.counter(), 0);
    }

    #[test]
    fn test_counter_survives_direction_changes() {
        let ctx = BusContext::new();
        let mut bus = DataBus::new(mock_lines());
        let enable = Cell::new(false);
        let mut controller = ModeController::new(MockEnable(&enable), true);

        controller.update(&ctx, &mut bus);
        on_rising_edge(&ctx, &mut bus);
        on_rising_edge(&ctx, &mut bus);

        enable.set(true);
        controller.update(&ctx, &mut bus);
        on_rising_edge(&ctx, &mut bus);

        enable.set(false);
        controller.update(&ctx, &mut bus);
        assert_eq!(on_rising_edge(&ctx, &mut bus), EdgeEvent::write(3));
    }

    #[test]
    fn test_enable_toggle_between_edges() {
        let ctx = BusContext::new();
        let mut bus = DataBus::new(mock_lines());
        let enable = Cell::new(true);
        let mut controller = ModeController::new(MockEnable(&enable), true);

        controller.update(&ctx, &mut bus);
        assert_eq!(on_rising_edge(&ctx, &mut bus).access, Access::Read);

        enable.set(false);
        controller.update(&ctx, &mut bus);
        assert_eq!(on_rising_edge(&ctx, &mut bus), EdgeEvent::write(1));
    }

    #[test]
    fn test_next_edge_waits_when_idle() {
        let mut clock = MockClock::default();

        block_on(next_rising_edge(&mut clock));
        assert_eq!(clock.waits, 1);
        assert!(!clock.latched);
    }

    #[test]
    fn test_edge_during_handling_is_not_lost() {
        let ctx = BusContext::new();
        let mut bus = DataBus::new(mock_lines());
        ctx.commit_direction(Direction::Drive);
        bus.set_direction(Direction::Drive);
        let mut clock = MockClock::default();

        block_on(next_rising_edge(&mut clock));
        // Second edge arrives while the first is handled
        clock.latched = true;
        assert_eq!(on_rising_edge(&ctx, &mut bus), EdgeEvent::write(1));

        block_on(next_rising_edge(&mut clock));
        assert_eq!(on_rising_edge(&ctx, &mut bus), EdgeEvent::write(2));
        assert_eq!(clock.waits, 1);

        // Latch was consumed, the third edge needs a real wait
        block_on(next_rising_edge(&mut clock));
        assert_eq!(clock.waits, 2);
    }
}
