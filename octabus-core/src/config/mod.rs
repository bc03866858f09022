//! Board configuration types
//!
//! Parsed from `board.toml` at build time and validated again at boot.

pub mod board;
pub mod diagnostic;
pub mod pin;

pub use board::{BoardConfig, ConfigError, DEFAULT_TRACE_BAUDRATE};
pub use diagnostic::truncate_chars;
pub use pin::{parse_pin_string, PinConfig};
