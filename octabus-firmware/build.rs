//! Build script for octabus-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml and compiles it into `board.rs`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use octabus_core::bus::BUS_WIDTH;
use octabus_core::config::{parse_pin_string, truncate_chars, BoardConfig, ConfigError, PinConfig};

/// GPIOs on RP2040
const GPIO_COUNT: u8 = 30;

/// UART0 TX/RX carry the trace
const RESERVED_PINS: &[u8] = &[0, 1];

fn main() {
    setup_linker();
    let board = load_board();
    write_board(&board);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read and validate board.toml
fn load_board() -> BoardConfig {
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a board.toml wiring file in the           ║\n\
            ║  octabus-firmware directory.                                     ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read board.toml", &[e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail("Invalid TOML syntax in board.toml", &[e.to_string()]),
    };

    let mut errors = Vec::new();
    let board = parse_board(&config, &mut errors);
    if !errors.is_empty() {
        fail("Invalid board.toml", &errors);
    }

    if let Err(e) = board.validate(GPIO_COUNT, RESERVED_PINS) {
        let msg = match e {
            ConfigError::InvalidPin => "Invalid pin string".to_string(),
            ConfigError::PinOutOfRange(pin) => {
                format!("gpio{} does not exist (valid: gpio0-gpio{})", pin, GPIO_COUNT - 1)
            }
            ConfigError::ReservedPin(pin) => {
                format!("gpio{} is reserved for the trace UART", pin)
            }
            ConfigError::DuplicatePin(pin) => format!("gpio{} is assigned more than once", pin),
            ConfigError::InvalidBaudrate => "trace.baudrate must be non-zero".to_string(),
        };
        fail("Invalid board wiring in board.toml", &[msg]);
    }

    println!("cargo:warning=board.toml validated successfully");
    board
}

/// Extract the board config, collecting every problem found
fn parse_board(config: &toml::Value, errors: &mut Vec<String>) -> BoardConfig {
    let mut board = BoardConfig::default();

    match config.get("bus").and_then(|b| b.get("data_pins")) {
        Some(toml::Value::Array(pins)) if pins.len() == BUS_WIDTH => {
            for (i, value) in pins.iter().enumerate() {
                match pin_value(value) {
                    Some(pin) if !pin.inverted && !pin.pull_up => board.data_pins[i] = pin.pin,
                    Some(_) => errors.push(format!("bus.data_pins[{}]: modifiers not allowed", i)),
                    None => errors.push(format!("bus.data_pins[{}]: invalid pin string", i)),
                }
            }
        }
        Some(toml::Value::Array(pins)) => errors.push(format!(
            "bus.data_pins: expected {} pins, found {}",
            BUS_WIDTH,
            pins.len()
        )),
        _ => errors.push("Missing [bus] data_pins".to_string()),
    }

    match config.get("clock").and_then(|c| c.get("pin")) {
        Some(value) => match pin_value(value) {
            Some(pin) if !pin.inverted && !pin.pull_up => board.clock_pin = pin.pin,
            Some(_) => errors.push("clock.pin: modifiers not allowed".to_string()),
            None => errors.push("clock.pin: invalid pin string".to_string()),
        },
        None => errors.push("Missing [clock] pin".to_string()),
    }

    match config.get("enable").and_then(|e| e.get("pin")) {
        Some(value) => match pin_value(value) {
            Some(pin) => board.enable = pin,
            None => errors.push("enable.pin: invalid pin string".to_string()),
        },
        None => errors.push("Missing [enable] pin".to_string()),
    }

    match config.get("trace").and_then(|t| t.get("baudrate")) {
        Some(toml::Value::Integer(baud)) => match u32::try_from(*baud) {
            Ok(baud) => board.trace_baudrate = baud,
            Err(_) => errors.push(format!("trace.baudrate: {} out of range", baud)),
        },
        Some(_) => errors.push("trace.baudrate must be an integer".to_string()),
        // Optional, keeps the default
        None => {}
    }

    board
}

fn pin_value(value: &toml::Value) -> Option<PinConfig> {
    value.as_str().and_then(parse_pin_string)
}

/// Generate `board.rs` holding the validated config as a constant
fn write_board(board: &BoardConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let data_pins = board
        .data_pins
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let source = format!(
        "/// Board wiring generated from board.toml\n\
         pub const BOARD: octabus_core::config::BoardConfig = octabus_core::config::BoardConfig {{\n    \
             data_pins: [{}],\n    \
             clock_pin: {},\n    \
             enable: octabus_core::config::PinConfig {{ pin: {}, inverted: {}, pull_up: {} }},\n    \
             trace_baudrate: {},\n\
         }};\n",
        data_pins,
        board.clock_pin,
        board.enable.pin,
        board.enable.inverted,
        board.enable.pull_up,
        board.trace_baudrate,
    );

    fs::write(out_dir.join("board.rs"), source).unwrap();
}

/// Abort the build with a boxed error report
fn fail(title: &str, errors: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        format_error_lines(errors)
    );
}

/// Format error message lines with box drawing
fn format_error_lines(errors: &[String]) -> String {
    errors
        .iter()
        .flat_map(|e| e.lines())
        .map(|line| {
            let truncated = if line.chars().count() > 62 {
                format!("{}...", truncate_chars(line, 59))
            } else {
                line.to_string()
            };
            format!("║  • {:<62} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
