//! Push-based engine observation.
//!
//! Observers receive the externally-consumed projections of a run — the
//! per-tick state trace and the request lifecycle event stream — without
//! polling the engine.  Hooks return `()` so a misbehaving sink can never
//! stall the simulation; sinks that can fail store their first error for
//! post-run retrieval.

use lift_core::{LiftState, LiftStatus, Tick};
use lift_request::RequestEvent;

/// Per-tick hooks with no-op defaults.  Implement only what you need.
pub trait EngineObserver {
    /// Called before the controller decision, with the snapshot the
    /// controller is about to see.
    fn on_tick_start(&mut self, _tick: Tick, _state: &LiftState) {}

    /// Called for every applied status edge, in order.  A tick that chains
    /// edges fires once per edge, each of which is table-legal.
    fn on_status_change(&mut self, _tick: Tick, _from: LiftStatus, _to: LiftStatus) {}

    /// Called for every request lifecycle transition recorded this tick.
    fn on_request_event(&mut self, _event: &RequestEvent) {}

    /// Called after all of this tick's effects, with the settled snapshot.
    fn on_tick_end(&mut self, _tick: Tick, _state: &LiftState) {}
}

/// Observer that ignores everything.
pub struct NoopObserver;

impl EngineObserver for NoopObserver {}
