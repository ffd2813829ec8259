//! `lift-engine` — the tick-driven single-car simulation engine.
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`engine`]   | `LiftEngine` — the physical state machine driver       |
//! | [`builder`]  | `LiftEngineBuilder` — validated construction           |
//! | [`observer`] | `EngineObserver` — push-based run observation          |
//! | [`error`]    | `EngineError` / `EngineResult`                         |
//!
//! The engine owns the physical state machine (floor, status, phase
//! counters) and the clock; request state lives inside the controller it
//! drives.  One `tick()` call is one unit of simulated time.

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::LiftEngineBuilder;
pub use engine::LiftEngine;
pub use error::{EngineError, EngineResult};
pub use observer::{EngineObserver, NoopObserver};
