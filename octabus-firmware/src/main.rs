//! Octabus - 8-bit bidirectional data bus peripheral
//!
//! On every rising clock edge the firmware either drives the eight data
//! lines with a free-running counter (enable asserted) or samples them
//! (enable released), and reports each transfer on the trace UART.
//!
//! Two executors mirror the interrupt/main-loop split of the bus protocol:
//!
//! - An `InterruptExecutor` on `SWI_IRQ_1` runs the edge task. It preempts
//!   everything else, and runs each edge to completion.
//! - The thread-mode `Executor` runs the mode controller poll loop and the
//!   trace writer.

#![no_std]
#![no_main]

use core::cell::RefCell;

use cortex_m_rt::entry;
use defmt::*;
use embassy_executor::{Executor, InterruptExecutor};
use embassy_futures::block_on;
use embassy_rp::bind_interrupts;
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_sync::blocking_mutex::Mutex;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use octabus_core::control::ModeController;
use octabus_core::trace::TraceWriter;
use octabus_hal_rp2040::gpio::{GPIO_COUNT, RESERVED_PINS};
use octabus_hal_rp2040::pins::PinBank;
use octabus_hal_rp2040::uart::TraceUart;

use crate::board::BOARD;
use crate::channels::{SharedBus, CONTEXT};

mod board;
mod channels;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

static EXECUTOR_EDGE: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_MAIN: StaticCell<Executor> = StaticCell::new();

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 16]> = StaticCell::new();

static BUS: StaticCell<SharedBus> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_EDGE.on_interrupt()
}

/// Main entry point
#[entry]
fn main() -> ! {
    info!("Octabus firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    if let Err(e) = BOARD.validate(GPIO_COUNT, RESERVED_PINS) {
        defmt::panic!("Invalid board config: {}", e);
    }
    info!("Board config: {}", BOARD);

    let (mut bank, uart) = PinBank::from_peripherals(p);
    let pins = match board::take_pins(&mut bank, &BOARD) {
        Ok(pins) => pins,
        Err(e) => defmt::panic!("Failed to claim board pins: {}", e),
    };

    // Setup UART0 for the serial trace
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = BOARD.trace_baudrate;

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 16]);

    let uart = Uart::new_blocking(uart.uart0, uart.tx, uart.rx, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, _rx) = uart.split();

    // Nothing else is running yet, so the banner is written synchronously
    let mut writer = TraceWriter::new(TraceUart::new(tx));
    if let Err(e) = block_on(writer.banner()) {
        warn!("Failed to write trace banner: {:?}", e);
    }
    info!("Trace UART initialized at {} baud", BOARD.trace_baudrate);

    // Pick up the wired enable level before the first edge can arrive
    let bus = BUS.init(Mutex::new(RefCell::new(pins.bus)));
    let mut controller = ModeController::new(pins.enable, BOARD.enable.inverted);
    bus.lock(|bus| controller.update(&CONTEXT, &mut bus.borrow_mut()));
    info!("Initial bus direction: {}", CONTEXT.direction());

    // Edge handling preempts the thread-mode tasks
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let spawner = EXECUTOR_EDGE.start(interrupt::SWI_IRQ_1);
    spawner.spawn(tasks::edge_task(pins.clock, bus)).unwrap();

    let executor = EXECUTOR_MAIN.init(Executor::new());
    executor.run(|spawner| {
        spawner.spawn(tasks::mode_task(controller, bus)).unwrap();
        spawner.spawn(tasks::trace_task(writer)).unwrap();
        info!("All tasks spawned, firmware running");
    })
}
