//! Property tests for the bus state machine
//!
//! The bus is wired to a simulated external device: while sensing, the
//! lines read whatever byte the device puts on them.

use std::cell::Cell;
use std::rc::Rc;

use octabus_core::bus::{DataBus, Direction, BUS_WIDTH};
use octabus_core::control::{on_rising_edge, ModeController};
use octabus_core::state::{Access, BusContext, EdgeEvent};
use octabus_core::trace::TraceLine;
use octabus_hal::{FlexPin, InputPin, OutputPin};
use proptest::prelude::*;

/// One bus line attached to a shared external byte
struct WiredLine {
    bit: u8,
    external: Rc<Cell<u8>>,
    output: bool,
    latch: bool,
}

impl OutputPin for WiredLine {
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

impl InputPin for WiredLine {
    fn is_high(&self) -> bool {
        if self.output {
            self.latch
        } else {
            self.external.get() & (1 << self.bit) != 0
        }
    }
}

impl FlexPin for WiredLine {
    fn set_as_input(&mut self) {
        self.output = false;
    }

    fn set_as_output(&mut self) {
        self.output = true;
    }

    fn is_output(&self) -> bool {
        self.output
    }
}

struct Enable(Rc<Cell<bool>>);

impl InputPin for Enable {
    fn is_high(&self) -> bool {
        self.0.get()
    }
}

struct Rig {
    ctx: BusContext,
    bus: DataBus<WiredLine>,
    controller: ModeController<Enable>,
    external: Rc<Cell<u8>>,
    enable_raw: Rc<Cell<bool>>,
}

impl Rig {
    /// Active-low enable, starts deasserted
    fn new() -> Self {
        let external = Rc::new(Cell::new(0));
        let lines = std::array::from_fn(|i| WiredLine {
            bit: (BUS_WIDTH - 1 - i) as u8,
            external: external.clone(),
            output: false,
            latch: false,
        });
        let enable_raw = Rc::new(Cell::new(true));
        Self {
            ctx: BusContext::new(),
            bus: DataBus::new(lines),
            controller: ModeController::new(Enable(enable_raw.clone()), true),
            external,
            enable_raw,
        }
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enable_raw.set(!enabled);
        self.controller.update(&self.ctx, &mut self.bus);
    }

    fn edge(&mut self) -> EdgeEvent {
        on_rising_edge(&self.ctx, &mut self.bus)
    }

    fn latched_byte(&self) -> u8 {
        self.bus
            .lines()
            .iter()
            .fold(0, |acc, l| (acc << 1) | l.is_set_high() as u8)
    }
}

#[derive(Debug, Clone)]
enum Step {
    Enable(bool),
    External(u8),
    Edge,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        any::<bool>().prop_map(Step::Enable),
        any::<u8>().prop_map(Step::External),
        Just(Step::Edge),
        Just(Step::Edge),
    ]
}

proptest! {
    #[test]
    fn test_sense_edges_sample_without_counting(values in prop::collection::vec(any::<u8>(), 1..64)) {
        let mut rig = Rig::new();
        for value in values {
            rig.external.set(value);
            prop_assert_eq!(rig.edge(), EdgeEvent::read(value));
            prop_assert_eq!(rig.ctx.counter(), 0);
        }
    }

    #[test]
    fn test_drive_edges_count_by_one(start in 0usize..256, edges in 1usize..600) {
        let mut rig = Rig::new();
        rig.set_enabled(true);
        for _ in 0..start {
            rig.edge();
        }

        let mut expected = start as u8;
        for _ in 0..edges {
            expected = expected.wrapping_add(1);
            prop_assert_eq!(rig.edge(), EdgeEvent::write(expected));
            prop_assert_eq!(rig.ctx.counter(), expected);
        }
    }

    #[test]
    fn test_driven_bits_match_counter(edges in 1usize..300) {
        let mut rig = Rig::new();
        rig.set_enabled(true);
        for _ in 0..edges {
            let event = rig.edge();
            prop_assert_eq!(rig.latched_byte(), rig.ctx.counter());
            prop_assert_eq!(rig.bus.read_byte(), event.value);
        }
    }

    #[test]
    fn test_trace_line_format(value in any::<u8>(), write in any::<bool>()) {
        let event = if write { EdgeEvent::write(value) } else { EdgeEvent::read(value) };
        let tag = if write { 'w' } else { 'r' };
        let expected = format!("{:08b} {}", value, tag);
        let line = TraceLine::new(event);
        prop_assert_eq!(line.content(), expected.as_bytes());
        prop_assert!(line.as_bytes().ends_with(b"\r\n"));
    }

    #[test]
    fn test_every_edge_uses_last_committed_direction(steps in prop::collection::vec(step(), 1..200)) {
        let mut rig = Rig::new();
        let mut enabled = false;
        let mut external = 0u8;
        let mut counter = 0u8;

        for step in steps {
            match step {
                Step::Enable(e) => {
                    enabled = e;
                    rig.set_enabled(e);
                    prop_assert_eq!(rig.bus.direction(), Direction::from_enabled(e));
                }
                Step::External(v) => {
                    external = v;
                    rig.external.set(v);
                }
                Step::Edge => {
                    let before = rig.ctx.counter();
                    let event = rig.edge();
                    let after = rig.ctx.counter();
                    if enabled {
                        // Exactly one increment: no edge lost or handled twice
                        counter = counter.wrapping_add(1);
                        prop_assert_eq!(after, before.wrapping_add(1));
                        prop_assert_eq!(event.access, Access::Write);
                        prop_assert_eq!(event.value, counter);
                        prop_assert_eq!(rig.latched_byte(), counter);
                    } else {
                        prop_assert_eq!(after, before);
                        prop_assert_eq!(event.access, Access::Read);
                        prop_assert_eq!(event.value, external);
                    }
                }
            }
        }

        prop_assert_eq!(rig.ctx.counter(), counter);
    }
}

#[test]
fn test_counter_254_to_255_traces_all_ones() {
    let mut rig = Rig::new();
    rig.set_enabled(true);
    for _ in 0..254 {
        rig.edge();
    }
    assert_eq!(rig.ctx.counter(), 254);

    let line = TraceLine::new(rig.edge());
    assert_eq!(line.content(), b"11111111 w");
}

#[test]
fn test_alternating_sample_traces_read_line() {
    let mut rig = Rig::new();
    rig.external.set(0b1010_1010);
    let line = TraceLine::new(rig.edge());
    assert_eq!(line.content(), b"10101010 r");
}
