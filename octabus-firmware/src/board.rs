//! Board bring-up from the compiled-in wiring

use defmt::*;

use octabus_core::bus::DataBus;
use octabus_core::config::BoardConfig;
use octabus_hal_rp2040::gpio::{ClockInput, EnableInput, FlexLine};
use octabus_hal_rp2040::pins::{PinBank, PinError};

// Provides `BOARD`, generated by build.rs from board.toml
include!(concat!(env!("OUT_DIR"), "/board.rs"));

/// Pins claimed for the bus
pub struct BoardPins {
    pub bus: DataBus<FlexLine>,
    pub clock: ClockInput,
    pub enable: EnableInput,
}

/// Take every pin the config names from the bank
///
/// The bus comes up in sense mode with all lines floating.
pub fn take_pins(bank: &mut PinBank, config: &BoardConfig) -> Result<BoardPins, PinError> {
    let [d7, d6, d5, d4, d3, d2, d1, d0] = config.data_pins;
    let lines = [
        bank.take_bus_line(d7)?,
        bank.take_bus_line(d6)?,
        bank.take_bus_line(d5)?,
        bank.take_bus_line(d4)?,
        bank.take_bus_line(d3)?,
        bank.take_bus_line(d2)?,
        bank.take_bus_line(d1)?,
        bank.take_bus_line(d0)?,
    ];
    debug!("Data lines (MSB first): {}", config.data_pins);

    let clock = bank.take_clock(config.clock_pin)?;
    let enable = bank.take_enable(config.enable)?;

    Ok(BoardPins {
        bus: DataBus::new(lines),
        clock,
        enable,
    })
}
