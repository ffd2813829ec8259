//! The `LiftController` trait — the dispatch extension point.

use lift_core::{Direction, Floor, LiftState, RequestId, Tick};
use lift_request::{LiftRequest, RequestEvent, RequestResult};

use crate::Action;

/// Pluggable dispatch strategy for a single car.
///
/// The engine drives implementations through three channels:
///
/// 1. **Decisions** — [`decide`][Self::decide] is called exactly once per
///    tick with the current physical snapshot.  The returned [`Action`] is a
///    request, not a command: the engine validates it and may degrade it to
///    an idle tick.
/// 2. **Notifications** — the `on_*` hooks report physical progress
///    (arrival at a floor, door phases) so the controller can advance
///    request lifecycles.  Only the controller mutates request state.
/// 3. **Request plumbing** — calls are injected, cancelled, and snapshotted
///    through the remaining methods.  Cancellation is speculative and
///    returns a boolean; everything else that can fail returns a `Result`.
///
/// Implementations must be deterministic: identical call sequences produce
/// identical decisions and identical lifecycle event streams.
pub trait LiftController {
    /// Choose the action for this tick given the current physical snapshot.
    fn decide(&mut self, state: &LiftState, tick: Tick) -> Action;

    /// Create and queue a landing call at `floor` toward `direction`.
    fn add_hall_call(
        &mut self,
        floor: Floor,
        direction: Direction,
        tick: Tick,
    ) -> RequestResult<RequestId>;

    /// Create and queue an in-car call for destination `floor`.
    fn add_car_call(&mut self, floor: Floor, tick: Tick) -> RequestResult<RequestId>;

    /// Cancel an active request.  Returns `false` for an unknown or
    /// already-terminal id; idempotent.
    fn cancel_request(&mut self, id: RequestId, tick: Tick) -> bool;

    /// Snapshots of all active requests, ascending by id.
    fn active_requests(&self) -> Vec<LiftRequest>;

    /// Terminal requests retained for reporting.
    fn history(&self) -> Vec<LiftRequest>;

    /// The car completed a movement leg and is now stationary at `floor`.
    fn on_arrival(&mut self, floor: Floor, tick: Tick);

    /// Doors began opening at `floor`.  Same-floor calls (which never
    /// travelled) complete here.
    fn on_doors_opening(&mut self, floor: Floor, tick: Tick);

    /// Doors are fully open at `floor`.  Calls the car travelled for
    /// complete here.
    fn on_doors_open(&mut self, floor: Floor, tick: Tick);

    /// The engine is shutting the car down: cancel every active request,
    /// regardless of state, as a safety measure.
    fn take_out_of_service(&mut self, tick: Tick);

    /// The car is back in service: clear parking/sweep bookkeeping so the
    /// next decision behaves as if freshly initialized.
    fn return_to_service(&mut self);

    /// Take all lifecycle events recorded since the last drain.
    fn drain_events(&mut self) -> Vec<RequestEvent>;
}

// Forwarding impl so `LiftEngine<Box<dyn LiftController>>` works with the
// strategy factory while the engine itself stays generic.
impl LiftController for Box<dyn LiftController> {
    fn decide(&mut self, state: &LiftState, tick: Tick) -> Action {
        (**self).decide(state, tick)
    }

    fn add_hall_call(
        &mut self,
        floor: Floor,
        direction: Direction,
        tick: Tick,
    ) -> RequestResult<RequestId> {
        (**self).add_hall_call(floor, direction, tick)
    }

    fn add_car_call(&mut self, floor: Floor, tick: Tick) -> RequestResult<RequestId> {
        (**self).add_car_call(floor, tick)
    }

    fn cancel_request(&mut self, id: RequestId, tick: Tick) -> bool {
        (**self).cancel_request(id, tick)
    }

    fn active_requests(&self) -> Vec<LiftRequest> {
        (**self).active_requests()
    }

    fn history(&self) -> Vec<LiftRequest> {
        (**self).history()
    }

    fn on_arrival(&mut self, floor: Floor, tick: Tick) {
        (**self).on_arrival(floor, tick)
    }

    fn on_doors_opening(&mut self, floor: Floor, tick: Tick) {
        (**self).on_doors_opening(floor, tick)
    }

    fn on_doors_open(&mut self, floor: Floor, tick: Tick) {
        (**self).on_doors_open(floor, tick)
    }

    fn take_out_of_service(&mut self, tick: Tick) {
        (**self).take_out_of_service(tick)
    }

    fn return_to_service(&mut self) {
        (**self).return_to_service()
    }

    fn drain_events(&mut self) -> Vec<RequestEvent> {
        (**self).drain_events()
    }
}
