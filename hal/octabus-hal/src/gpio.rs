//! GPIO pin abstractions
//!
//! Provides traits for digital input, output and direction-switchable pins
//! that can be implemented by chip-specific HALs.
//!
//! None of these operations can fail: a GPIO register access has no error
//! path on the supported chips, so the traits are infallible.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin output latch is set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin output latch is set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Pin whose electrical direction can be switched at runtime
///
/// As an input the pin is high-impedance and [`InputPin::is_high`] samples
/// the external level. As an output it drives the level last written
/// through [`OutputPin`]. Writing the output latch while configured as an
/// input must not drive the line.
pub trait FlexPin: InputPin + OutputPin {
    /// Configure the pin as a high-impedance input
    fn set_as_input(&mut self);

    /// Configure the pin as a driven output
    fn set_as_output(&mut self);

    /// Check if the pin is currently configured as an output
    fn is_output(&self) -> bool;
}

/// Input with a hardware rising-edge latch
///
/// The latch is set by every rising edge and stays set until cleared, so an
/// edge that arrives while the previous one is still being handled is not
/// lost. Edges arriving while the latch is already set merge into it.
pub trait EdgeLatch {
    /// Clear the latch, returning whether an edge was pending
    fn take_edge(&mut self) -> bool;

    /// Wait until a rising edge sets the latch
    ///
    /// May discard an edge latched before the call; check [`take_edge`]
    /// first.
    ///
    /// [`take_edge`]: EdgeLatch::take_edge
    fn wait_for_rising_edge(&mut self) -> impl core::future::Future<Output = ()>;
}
