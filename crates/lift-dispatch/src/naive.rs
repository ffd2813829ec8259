//! Nearest-request dispatch.

use lift_core::{Direction, Floor, LiftState, LiftStatus, RequestId, Tick};
use lift_request::{
    LiftRequest, RequestEvent, RequestFactory, RequestResult, RequestState, RequestStore,
};

use crate::{Action, LiftController};

/// What the car does after sitting idle with no requests.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IdleParkingMode {
    /// Stay wherever the last request left the car.
    StayPut,
    /// After the idle timeout, return to the configured home floor.
    ParkToHomeFloor,
}

/// Greedy nearest-request routing.
///
/// Each decision scans the active set: calls waiting at the current floor
/// are serviced in place; otherwise the car moves one step toward the
/// request with the minimum absolute floor distance, ties broken toward the
/// lower floor.  With no requests and [`IdleParkingMode::ParkToHomeFloor`],
/// the car drifts back to its home floor after `idle_timeout_ticks`
/// consecutive idle ticks; any new request pre-empts parking through the
/// normal nearest-selection path, not a special case.
pub struct NaiveLiftController {
    factory: RequestFactory,
    store: RequestStore,
    home_floor: Floor,
    idle_timeout_ticks: u64,
    parking: IdleParkingMode,
    /// First tick of the current requestless-idle stretch.
    idle_since: Option<Tick>,
    /// The request currently marked `Assigned`, if any.
    target: Option<RequestId>,
}

impl NaiveLiftController {
    pub fn new(home_floor: Floor, idle_timeout_ticks: u64, parking: IdleParkingMode) -> Self {
        Self {
            factory: RequestFactory::new(),
            store: RequestStore::new(),
            home_floor,
            idle_timeout_ticks,
            parking,
            idle_since: None,
            target: None,
        }
    }

    /// The active request nearest to `floor`.
    ///
    /// Tie-break order: absolute distance, then lower floor number, then
    /// lower id — fully deterministic.
    fn nearest_request(&self, floor: Floor) -> Option<(RequestId, Floor)> {
        self.store
            .iter()
            .map(|r| (r.id(), r.floor()))
            .min_by_key(|&(id, f)| ((f - floor).abs(), f, id))
    }

    /// Point the controller at `id`, re-queueing the previous target if its
    /// service never began.
    fn retarget(&mut self, id: RequestId, tick: Tick) {
        if self.target == Some(id) {
            return;
        }
        if let Some(old) = self.target.take() {
            self.store
                .transition_if(old, RequestState::Assigned, RequestState::Queued, tick);
        }
        self.store
            .transition_if(id, RequestState::Queued, RequestState::Assigned, tick);
        self.target = Some(id);
    }

    fn park(&mut self, state: &LiftState, tick: Tick) -> Action {
        if state.status != LiftStatus::Idle {
            return Action::Idle;
        }
        let since = *self.idle_since.get_or_insert(tick);
        if self.parking == IdleParkingMode::ParkToHomeFloor
            && tick.since(since) >= self.idle_timeout_ticks
            && state.floor != self.home_floor
        {
            tracing::debug!(from = state.floor, home = self.home_floor, "parking toward home floor");
            return match Direction::toward(state.floor, self.home_floor) {
                Direction::Up => Action::MoveUp,
                Direction::Down => Action::MoveDown,
                Direction::Idle => Action::Idle,
            };
        }
        Action::Idle
    }

    fn complete_at(&mut self, floor: Floor, tick: Tick, include_serving: bool) {
        for id in self.store.ids_at_floor(floor) {
            let Some(state) = self.store.get(id).map(LiftRequest::state) else {
                continue;
            };
            if state == RequestState::Serving && !include_serving {
                continue;
            }
            if let Err(e) = self.store.complete(id, tick) {
                tracing::warn!(error = %e, "request completion failed");
            }
        }
    }
}

impl LiftController for NaiveLiftController {
    fn decide(&mut self, state: &LiftState, tick: Tick) -> Action {
        if self.store.is_empty() {
            self.target = None;
            return self.park(state, tick);
        }
        self.idle_since = None;

        // Calls waiting at the current floor are serviced in place.
        if !self.store.ids_at_floor(state.floor).is_empty() {
            return match state.status {
                LiftStatus::Idle => Action::OpenDoor,
                // A fresh same-floor call during closing attempts a reopen;
                // the engine honors it only within the reopen window.
                LiftStatus::DoorsClosing => Action::OpenDoor,
                _ => Action::Idle,
            };
        }

        if state.status != LiftStatus::Idle {
            // The current movement leg or door cycle finishes first.
            return Action::Idle;
        }

        let Some((id, floor)) = self.nearest_request(state.floor) else {
            return Action::Idle;
        };
        self.retarget(id, tick);
        if floor > state.floor {
            Action::MoveUp
        } else {
            Action::MoveDown
        }
    }

    fn add_hall_call(
        &mut self,
        floor: Floor,
        direction: Direction,
        tick: Tick,
    ) -> RequestResult<RequestId> {
        let request = self.factory.hall_call(floor, direction);
        self.store.insert(request, tick)
    }

    fn add_car_call(&mut self, floor: Floor, tick: Tick) -> RequestResult<RequestId> {
        let request = self.factory.car_call(floor);
        self.store.insert(request, tick)
    }

    fn cancel_request(&mut self, id: RequestId, tick: Tick) -> bool {
        if self.target == Some(id) {
            self.target = None;
        }
        self.store.cancel(id, tick)
    }

    fn active_requests(&self) -> Vec<LiftRequest> {
        self.store.snapshot()
    }

    fn history(&self) -> Vec<LiftRequest> {
        self.store.history().to_vec()
    }

    fn on_arrival(&mut self, floor: Floor, tick: Tick) {
        // The targeted request is now physically reached, before doors open.
        for id in self.store.ids_at_floor(floor) {
            self.store
                .transition_if(id, RequestState::Assigned, RequestState::Serving, tick);
        }
    }

    fn on_doors_opening(&mut self, floor: Floor, tick: Tick) {
        // Same-floor calls (never travelled for) complete as soon as the
        // doors begin opening.
        self.complete_at(floor, tick, false);
    }

    fn on_doors_open(&mut self, floor: Floor, tick: Tick) {
        self.complete_at(floor, tick, true);
    }

    fn take_out_of_service(&mut self, tick: Tick) {
        self.store.cancel_all(tick);
        self.target = None;
        self.idle_since = None;
    }

    fn return_to_service(&mut self) {
        self.target = None;
        self.idle_since = None;
    }

    fn drain_events(&mut self) -> Vec<RequestEvent> {
        self.store.drain_events()
    }
}
