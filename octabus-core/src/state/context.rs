//! Direction flag and counter shared between mode controller and edge handler

use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::bus::Direction;

/// Process-wide bus state
///
/// Each field is a single-word atomic accessed with plain loads and stores
/// (no read-modify-write), so it works on cores without atomic RMW support
/// and an edge preempting the main loop can never observe a torn value.
///
/// - `drive` is written only by the mode controller.
/// - `counter` is written only by the edge handler.
pub struct BusContext {
    drive: AtomicBool,
    counter: AtomicU8,
}

impl BusContext {
    /// Fresh context: sensing, counter at zero
    pub const fn new() -> Self {
        Self {
            drive: AtomicBool::new(false),
            counter: AtomicU8::new(0),
        }
    }

    /// Last committed bus direction
    pub fn direction(&self) -> Direction {
        Direction::from_enabled(self.drive.load(Ordering::Acquire))
    }

    /// Current counter value (last value driven, or 0 before any drive edge)
    pub fn counter(&self) -> u8 {
        self.counter.load(Ordering::Relaxed)
    }

    pub(crate) fn commit_direction(&self, direction: Direction) {
        self.drive.store(direction.is_drive(), Ordering::Release);
    }

    /// Increment the counter modulo 256 and return the new value
    pub(crate) fn advance_counter(&self) -> u8 {
        let next = self.counter.load(Ordering::Relaxed).wrapping_add(1);
        self.counter.store(next, Ordering::Relaxed);
        next
    }
}

impl Default for BusContext {
    fn default() -> Self {
        Self::new()
    }
}
