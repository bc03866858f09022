//! Bus direction

/// Electrical direction of the whole bus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Lines are high-impedance inputs and get sampled on each edge
    #[default]
    Sense,
    /// Lines are outputs and carry the counter value
    Drive,
}

impl Direction {
    /// Direction requested by a logical enable level (asserted = drive)
    pub const fn from_enabled(enabled: bool) -> Self {
        if enabled {
            Direction::Drive
        } else {
            Direction::Sense
        }
    }

    /// Check if the bus is driven by this device
    pub const fn is_drive(self) -> bool {
        matches!(self, Direction::Drive)
    }
}
