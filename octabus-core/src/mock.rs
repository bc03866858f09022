//! Mock hardware shared by the unit tests

use core::cell::Cell;

use octabus_hal::{EdgeLatch, FlexPin, InputPin, OutputPin};

use crate::bus::{DataBus, BUS_WIDTH};

/// Bus line that records reconfigurations
///
/// Reads return the output latch while driving and the externally applied
/// level while sensing.
#[derive(Debug, Default)]
pub struct MockLine {
    pub output: bool,
    pub latch: bool,
    pub external: bool,
    pub reconfigurations: u32,
}

impl OutputPin for MockLine {
    fn set_high(&mut self) {
        self.latch = true;
    }

    fn set_low(&mut self) {
        self.latch = false;
    }

    fn is_set_high(&self) -> bool {
        self.latch
    }
}

impl InputPin for MockLine {
    fn is_high(&self) -> bool {
        if self.output {
            self.latch
        } else {
            self.external
        }
    }
}

impl FlexPin for MockLine {
    fn set_as_input(&mut self) {
        self.output = false;
        self.reconfigurations += 1;
    }

    fn set_as_output(&mut self) {
        self.output = true;
        self.reconfigurations += 1;
    }

    fn is_output(&self) -> bool {
        self.output
    }
}

/// Enable input whose raw level is flipped through a shared cell
pub struct MockEnable<'a>(pub &'a Cell<bool>);

impl InputPin for MockEnable<'_> {
    fn is_high(&self) -> bool {
        self.0.get()
    }
}

/// Clock with a settable edge latch
///
/// Waiting behaves like the RP2040 edge future: the latch is cleared when
/// armed and set again by the edge that completes the wait.
#[derive(Debug, Default)]
pub struct MockClock {
    pub latched: bool,
    pub waits: u32,
}

impl EdgeLatch for MockClock {
    fn take_edge(&mut self) -> bool {
        core::mem::replace(&mut self.latched, false)
    }

    async fn wait_for_rising_edge(&mut self) {
        self.latched = false;
        self.waits += 1;
        self.latched = true;
    }
}

pub fn mock_lines() -> [MockLine; BUS_WIDTH] {
    core::array::from_fn(|_| MockLine::default())
}

/// Apply external levels to the lines, first entry is the MSB line
pub fn set_external(bus: &mut DataBus<MockLine>, levels: [bool; BUS_WIDTH]) {
    for (line, level) in bus.lines_mut().iter_mut().zip(levels) {
        line.external = level;
    }
}

pub fn total_reconfigurations(bus: &DataBus<MockLine>) -> u32 {
    bus.lines().iter().map(|l| l.reconfigurations).sum()
}
