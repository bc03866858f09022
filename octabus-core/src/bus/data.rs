//! Parallel data bus over eight direction-switchable lines

use octabus_hal::FlexPin;

use super::direction::Direction;

/// Number of data lines on the bus
pub const BUS_WIDTH: usize = 8;

/// Eight GPIO lines that always share one direction
///
/// `lines[0]` carries the most significant bit. The only way to change the
/// direction of a line is [`DataBus::set_direction`], which switches the
/// whole group, so the lines can never disagree.
pub struct DataBus<L> {
    lines: [L; BUS_WIDTH],
    direction: Direction,
}

impl<L: FlexPin> DataBus<L> {
    /// Take ownership of the lines and put them all in sense mode
    pub fn new(lines: [L; BUS_WIDTH]) -> Self {
        let mut bus = Self {
            lines,
            direction: Direction::Sense,
        };
        bus.set_direction(Direction::Sense);
        bus
    }

    /// Current electrical direction of the bus
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Reconfigure all eight lines
    ///
    /// Always touches the hardware; callers that want to avoid redundant
    /// reconfiguration compare against [`DataBus::direction`] first.
    pub fn set_direction(&mut self, direction: Direction) {
        for line in self.lines.iter_mut() {
            match direction {
                Direction::Drive => line.set_as_output(),
                Direction::Sense => line.set_as_input(),
            }
        }
        self.direction = direction;
    }

    /// Place a byte on the bus, MSB on the first line
    ///
    /// Only the output latches are written. Nothing is driven unless the
    /// bus is in [`Direction::Drive`].
    pub fn write_byte(&mut self, value: u8) {
        for (i, line) in self.lines.iter_mut().enumerate() {
            line.set_state(value & (0x80 >> i) != 0);
        }
    }

    /// Sample all eight lines, first line as MSB
    pub fn read_byte(&self) -> u8 {
        self.lines
            .iter()
            .fold(0u8, |acc, line| (acc << 1) | line.is_high() as u8)
    }

    /// Access the underlying lines
    pub fn lines(&self) -> &[L; BUS_WIDTH] {
        &self.lines
    }

    #[cfg(test)]
    pub(crate) fn lines_mut(&mut self) -> &mut [L; BUS_WIDTH] {
        &mut self.lines
    }
}
