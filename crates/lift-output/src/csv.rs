//! CSV sink: `tick_states.csv` and `request_events.csv` in one directory.

use std::fs::File;
use std::path::Path;

use crate::error::OutputResult;
use crate::row::{RequestEventRow, TickStateRow};
use crate::writer::OutputWriter;

/// Writes the state trace and the event stream to two CSV files.
///
/// Headers are written at creation; rows are buffered by the underlying
/// writers until [`finish`][OutputWriter::finish].
pub struct CsvWriter {
    tick_states:    ::csv::Writer<File>,
    request_events: ::csv::Writer<File>,
}

impl CsvWriter {
    /// Create both files (with headers) inside `dir`, which must exist.
    pub fn create(dir: impl AsRef<Path>) -> OutputResult<Self> {
        let dir = dir.as_ref();
        let mut tick_states = ::csv::Writer::from_path(dir.join("tick_states.csv"))?;
        tick_states.write_record(["tick", "floor", "status", "direction", "door_open"])?;
        let mut request_events = ::csv::Writer::from_path(dir.join("request_events.csv"))?;
        request_events.write_record(["tick", "request_id", "floor", "from", "to"])?;
        Ok(Self {
            tick_states,
            request_events,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick_state(&mut self, row: &TickStateRow) -> OutputResult<()> {
        self.tick_states.write_record([
            row.tick.0.to_string(),
            row.floor.to_string(),
            row.status.as_str().to_string(),
            row.direction.as_str().to_string(),
            row.door_open.to_string(),
        ])?;
        Ok(())
    }

    fn write_request_event(&mut self, row: &RequestEventRow) -> OutputResult<()> {
        self.request_events.write_record([
            row.tick.0.to_string(),
            row.request_id.0.to_string(),
            row.floor.to_string(),
            row.from.as_str().to_string(),
            row.to.as_str().to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.tick_states.flush()?;
        self.request_events.flush()?;
        Ok(())
    }
}
