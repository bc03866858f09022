//! Pin configuration and pin-string parsing

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: false,
        }
    }

    /// Same pin with the internal pull-up enabled
    pub const fn with_pullup(self) -> Self {
        Self {
            pull_up: true,
            ..self
        }
    }
}

/// Parse a pin string from the board config
///
/// Supports formats:
/// - "gpio11" -> pin 11
/// - "!gpio12" -> pin 12, inverted (active-low)
/// - "^gpio4" -> pin 4, pull-up
/// - "^!gpio2" or "!^gpio2" -> pin 2, pull-up and inverted
///
/// The pin number is not range-checked here; that depends on the chip and
/// is done by [`super::BoardConfig::validate`].
pub fn parse_pin_string(s: &str) -> Option<PinConfig> {
    let mut s = s.trim();
    let mut inverted = false;
    let mut pull_up = false;

    loop {
        if let Some(rest) = s.strip_prefix('!') {
            if inverted {
                return None;
            }
            inverted = true;
            s = rest;
        } else if let Some(rest) = s.strip_prefix('^') {
            if pull_up {
                return None;
            }
            pull_up = true;
            s = rest;
        } else {
            break;
        }
    }

    let digits = s.strip_prefix("gpio")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let pin: u8 = digits.parse().ok()?;

    Some(PinConfig {
        pin,
        inverted,
        pull_up,
    })
}
