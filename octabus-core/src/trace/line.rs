//! Fixed-size trace line

use crate::state::EdgeEvent;

/// Startup banner, written before the first edge
pub const BANNER: &[u8] = b"RUNNING";

/// Line terminator used for the banner and every trace line
pub const LINE_ENDING: &[u8] = b"\r\n";

/// Eight bits, one space, one tag
const CONTENT_LEN: usize = 10;

/// Encoded length of a trace line including the terminator
pub const TRACE_LINE_LEN: usize = CONTENT_LEN + LINE_ENDING.len();

/// One encoded trace line
///
/// Built without allocation so it can be produced inside the edge handler
/// and moved through a channel by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceLine {
    bytes: [u8; TRACE_LINE_LEN],
}

impl TraceLine {
    /// Encode an edge event
    pub fn new(event: EdgeEvent) -> Self {
        let mut bytes = [0u8; TRACE_LINE_LEN];
        for (i, byte) in bytes[..8].iter_mut().enumerate() {
            *byte = if event.value & (0x80 >> i) != 0 { b'1' } else { b'0' };
        }
        bytes[8] = b' ';
        bytes[9] = event.access.tag();
        bytes[CONTENT_LEN..].copy_from_slice(LINE_ENDING);
        Self { bytes }
    }

    /// Line text without the terminator
    pub fn content(&self) -> &[u8] {
        &self.bytes[..CONTENT_LEN]
    }

    /// Full encoded line including the terminator
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<EdgeEvent> for TraceLine {
    fn from(event: EdgeEvent) -> Self {
        Self::new(event)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TraceLine {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=[u8]:a}", self.content());
    }
}
