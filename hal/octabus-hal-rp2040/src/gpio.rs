//! GPIO wrappers implementing the `octabus-hal` pin traits

use embassy_rp::gpio::{Flex, Input, Level, Pull};
use embassy_rp::pac;
use octabus_hal::{EdgeLatch, FlexPin, InputPin, OutputPin};

/// Number of GPIO pins on RP2040
pub const GPIO_COUNT: u8 = 30;

/// Pins held back for the trace UART (UART0 TX/RX)
pub const RESERVED_PINS: &[u8] = &[0, 1];

/// Data bus line
///
/// Starts as a floating input with the output latch low, so switching to
/// output before the first write drives zero rather than a stale level.
pub struct FlexLine {
    pin: Flex<'static>,
    output: bool,
}

impl FlexLine {
    pub fn new(mut pin: Flex<'static>) -> Self {
        pin.set_pull(Pull::None);
        pin.set_level(Level::Low);
        pin.set_as_input();
        Self { pin, output: false }
    }
}

impl OutputPin for FlexLine {
    #[inline(always)]
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    #[inline(always)]
    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

impl InputPin for FlexLine {
    #[inline(always)]
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

impl FlexPin for FlexLine {
    fn set_as_input(&mut self) {
        self.pin.set_as_input();
        self.output = false;
    }

    fn set_as_output(&mut self) {
        self.pin.set_as_output();
        self.output = true;
    }

    fn is_output(&self) -> bool {
        self.output
    }
}

/// Enable signal input
///
/// Polarity is handled by the mode controller; this reports the raw level.
pub struct EnableInput {
    pin: Input<'static>,
}

impl EnableInput {
    pub fn new(pin: Input<'static>) -> Self {
        Self { pin }
    }
}

impl InputPin for EnableInput {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

/// Bus clock input
///
/// Uses the IO_BANK0 raw `INTR` edge latch directly. The embassy edge
/// future clears that latch each time it is armed, so an edge that arrives
/// while the previous one is being handled is picked up from the latch
/// before waiting again.
pub struct ClockInput {
    pin: Input<'static>,
    num: u8,
}

impl ClockInput {
    /// Wrap the clock input, discarding any edge latched before startup
    pub fn new(pin: Input<'static>, num: u8) -> Self {
        let mut clock = Self { pin, num };
        clock.take_edge();
        clock
    }
}

impl EdgeLatch for ClockInput {
    fn take_edge(&mut self) -> bool {
        let group = self.num as usize / 8;
        let bit = self.num as usize % 8;
        let intr = pac::IO_BANK0.intr(group);

        if !intr.read().edge_high(bit) {
            return false;
        }
        // Write-1-to-clear
        intr.write(|w| w.set_edge_high(bit, true));
        true
    }

    async fn wait_for_rising_edge(&mut self) {
        self.pin.wait_for_rising_edge().await;
    }
}
