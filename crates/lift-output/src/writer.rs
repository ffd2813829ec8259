//! The sink trait behind the observer bridge.

use crate::error::OutputResult;
use crate::row::{RequestEventRow, TickStateRow};

/// Destination for the two projections of a run.
///
/// Rows arrive in tick order.  `finish` flushes buffered rows and must be
/// idempotent; dropping a writer without calling it may lose the tail of the
/// trace.
pub trait OutputWriter {
    fn write_tick_state(&mut self, row: &TickStateRow) -> OutputResult<()>;

    fn write_request_event(&mut self, row: &RequestEventRow) -> OutputResult<()>;

    fn finish(&mut self) -> OutputResult<()>;
}
