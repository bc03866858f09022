//! Result of handling one clock edge

/// What the edge handler did with the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Access {
    /// Counter value was driven onto the bus
    Write,
    /// Bus lines were sampled
    Read,
}

impl Access {
    /// One-character tag used in the serial trace
    pub const fn tag(self) -> u8 {
        match self {
            Access::Write => b'w',
            Access::Read => b'r',
        }
    }
}

/// One handled rising edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeEvent {
    pub access: Access,
    /// Byte written or sampled, bit 7 on the first bus line
    pub value: u8,
}

impl EdgeEvent {
    pub const fn write(value: u8) -> Self {
        Self {
            access: Access::Write,
            value,
        }
    }

    pub const fn read(value: u8) -> Self {
        Self {
            access: Access::Read,
            value,
        }
    }
}
