//! Pin allocation by number for config-driven bring-up
//!
//! The board config names GPIOs by number, so the typed `PIN_n` singletons
//! are collected into a bank that hands them out at runtime. GPIO 0/1 stay
//! outside the bank because the trace UART needs their typed form.

use embassy_rp::gpio::{AnyPin, Flex, Input, Pull};
use embassy_rp::peripherals::{PIN_0, PIN_1, UART0};
use embassy_rp::{Peri, Peripherals};
use octabus_core::config::PinConfig;

use crate::gpio::{ClockInput, EnableInput, FlexLine, GPIO_COUNT, RESERVED_PINS};

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin,
    /// Pin already taken
    AlreadyTaken,
    /// Pin reserved for special function
    Reserved,
}

/// Pin bank that holds the free GPIO pins and allows taking them by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT as usize],
}

impl PinBank {
    /// Split the peripherals into the pin bank and the trace UART resources
    pub fn from_peripherals(p: Peripherals) -> (Self, UartPeripherals) {
        let bank = Self {
            pins: [
                None,
                None,
                Some(p.PIN_2.into()),
                Some(p.PIN_3.into()),
                Some(p.PIN_4.into()),
                Some(p.PIN_5.into()),
                Some(p.PIN_6.into()),
                Some(p.PIN_7.into()),
                Some(p.PIN_8.into()),
                Some(p.PIN_9.into()),
                Some(p.PIN_10.into()),
                Some(p.PIN_11.into()),
                Some(p.PIN_12.into()),
                Some(p.PIN_13.into()),
                Some(p.PIN_14.into()),
                Some(p.PIN_15.into()),
                Some(p.PIN_16.into()),
                Some(p.PIN_17.into()),
                Some(p.PIN_18.into()),
                Some(p.PIN_19.into()),
                Some(p.PIN_20.into()),
                Some(p.PIN_21.into()),
                Some(p.PIN_22.into()),
                Some(p.PIN_23.into()),
                Some(p.PIN_24.into()),
                Some(p.PIN_25.into()),
                Some(p.PIN_26.into()),
                Some(p.PIN_27.into()),
                Some(p.PIN_28.into()),
                Some(p.PIN_29.into()),
            ],
        };
        let uart = UartPeripherals {
            uart0: p.UART0,
            tx: p.PIN_0,
            rx: p.PIN_1,
        };
        (bank, uart)
    }

    /// Take a pin by number
    ///
    /// Returns the pin if available, or an error if:
    /// - Pin number is invalid (>= 30)
    /// - Pin is reserved for the trace UART
    /// - Pin was already taken
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        if pin_num >= GPIO_COUNT {
            return Err(PinError::InvalidPin);
        }
        if RESERVED_PINS.contains(&pin_num) {
            return Err(PinError::Reserved);
        }
        self.pins[pin_num as usize]
            .take()
            .ok_or(PinError::AlreadyTaken)
    }

    /// Take a pin as a data bus line (floating input)
    pub fn take_bus_line(&mut self, pin_num: u8) -> Result<FlexLine, PinError> {
        Ok(FlexLine::new(Flex::new(self.take(pin_num)?)))
    }

    /// Take a pin as the edge-triggered clock input
    pub fn take_clock(&mut self, pin_num: u8) -> Result<ClockInput, PinError> {
        let pin = Input::new(self.take(pin_num)?, Pull::None);
        Ok(ClockInput::new(pin, pin_num))
    }

    /// Take the enable input with the configured pull
    pub fn take_enable(&mut self, config: PinConfig) -> Result<EnableInput, PinError> {
        let pull = if config.pull_up { Pull::Up } else { Pull::None };
        Ok(EnableInput::new(Input::new(self.take(config.pin)?, pull)))
    }
}

/// Peripherals left for the trace UART after the pin bank is built
pub struct UartPeripherals {
    pub uart0: Peri<'static, UART0>,
    pub tx: Peri<'static, PIN_0>,
    pub rx: Peri<'static, PIN_1>,
}
