//! State shared between the edge and mode executors
//!
//! The edge task runs on the interrupt executor and the mode and trace
//! tasks on the thread executor, so everything here is either a
//! single-word atomic or guarded by a critical-section mutex.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use octabus_core::bus::DataBus;
use octabus_core::state::BusContext;
use octabus_core::trace::TraceQueue;
use octabus_hal_rp2040::gpio::FlexLine;

/// Queue capacity for trace lines
///
/// At 57600 baud a trace line takes about 2 ms on the wire; this absorbs a
/// burst of edges faster than that.
const TRACE_QUEUE_SIZE: usize = 32;

/// The eight data lines, locked for one reconfiguration or one transfer
pub type SharedBus = Mutex<CriticalSectionRawMutex, RefCell<DataBus<FlexLine>>>;

/// Direction flag and counter
pub static CONTEXT: BusContext = BusContext::new();

/// Trace lines from the edge task to the trace task, with a drop count
pub static TRACE_QUEUE: TraceQueue<CriticalSectionRawMutex, TRACE_QUEUE_SIZE> = TraceQueue::new();
