//! Board wiring
//!
//! Which GPIOs carry the bus, the clock and the enable signal, and how fast
//! the trace UART runs. Compiled into the firmware from `board.toml`.

use crate::bus::BUS_WIDTH;

use super::pin::PinConfig;

/// Default trace baud rate
pub const DEFAULT_TRACE_BAUDRATE: u32 = 57_600;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Pin string could not be parsed
    InvalidPin,
    /// Pin number does not exist on this chip
    PinOutOfRange(u8),
    /// Pin is reserved for another peripheral
    ReservedPin(u8),
    /// Pin is assigned more than once
    DuplicatePin(u8),
    /// Trace baud rate is zero
    InvalidBaudrate,
}

/// Complete board wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    /// Data lines, first entry carries the MSB
    pub data_pins: [u8; BUS_WIDTH],
    /// Clock input, sampled on the rising edge
    pub clock_pin: u8,
    /// Enable input; `inverted` means drive is requested while LOW
    pub enable: PinConfig,
    /// Trace UART baud rate
    pub trace_baudrate: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            data_pins: [12, 11, 10, 9, 8, 7, 6, 5],
            clock_pin: 3,
            enable: PinConfig::inverted(2).with_pullup(),
            trace_baudrate: DEFAULT_TRACE_BAUDRATE,
        }
    }
}

impl BoardConfig {
    /// Every GPIO this configuration claims
    pub fn pins(&self) -> impl Iterator<Item = u8> + '_ {
        self.data_pins
            .iter()
            .copied()
            .chain([self.clock_pin, self.enable.pin])
    }

    /// Check the wiring against a chip
    ///
    /// # Arguments
    /// - `pin_count`: Number of GPIOs on the chip (valid pins are below this)
    /// - `reserved`: Pins that belong to other peripherals
    pub fn validate(&self, pin_count: u8, reserved: &[u8]) -> Result<(), ConfigError> {
        if self.trace_baudrate == 0 {
            return Err(ConfigError::InvalidBaudrate);
        }

        let mut seen: u64 = 0;
        for pin in self.pins() {
            if pin >= pin_count || pin >= 64 {
                return Err(ConfigError::PinOutOfRange(pin));
            }
            if reserved.contains(&pin) {
                return Err(ConfigError::ReservedPin(pin));
            }
            let mask = 1u64 << pin;
            if seen & mask != 0 {
                return Err(ConfigError::DuplicatePin(pin));
            }
            seen |= mask;
        }

        Ok(())
    }
}
