//! `lift-output` — read-only projections of a simulation run.
//!
//! # What lives here
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`row`]      | Flat row types for the two projections                  |
//! | [`writer`]   | The `OutputWriter` sink trait                           |
//! | [`csv`]      | `CsvWriter` — `tick_states.csv` + `request_events.csv`  |
//! | [`observer`] | `EngineOutputObserver` (sink bridge), `StateHistory`    |
//! | [`error`]    | `OutputError` / `OutputResult`                          |
//!
//! Everything here consumes the engine's observer hooks; nothing feeds back
//! into dispatch or the physical state machine.

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::{EngineOutputObserver, StateHistory};
pub use row::{RequestEventRow, TickStateRow};
pub use writer::OutputWriter;
