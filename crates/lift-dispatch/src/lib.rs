//! `lift-dispatch` — pluggable dispatch strategies for the single-car engine.
//!
//! # What lives here
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`action`]     | `Action` — the per-tick decision vocabulary           |
//! | [`controller`] | The `LiftController` trait (the extension point)      |
//! | [`naive`]      | `NaiveLiftController` — nearest-request routing       |
//! | [`scan`]       | `DirectionalScanLiftController` — SCAN/LOOK sweeps    |
//! | [`strategy`]   | `Strategy` enum + variant-to-constructor factory      |
//!
//! The engine calls [`LiftController::decide`] once per tick and notifies the
//! controller of arrivals and door phases so it can advance request
//! lifecycles.  Each controller owns its own request index; the engine never
//! mutates request state directly.

pub mod action;
pub mod controller;
pub mod naive;
pub mod scan;
pub mod strategy;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use action::Action;
pub use controller::LiftController;
pub use naive::{IdleParkingMode, NaiveLiftController};
pub use scan::DirectionalScanLiftController;
pub use strategy::{ControllerParams, Strategy, make_controller};
