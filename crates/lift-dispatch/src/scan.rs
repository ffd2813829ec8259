//! Directional SCAN (LOOK) dispatch.

use lift_core::{Direction, Floor, LiftState, LiftStatus, RequestId, Tick};
use lift_request::{
    LiftRequest, RequestEvent, RequestFactory, RequestResult, RequestState, RequestStore,
};

use crate::{Action, LiftController};

/// SCAN/LOOK-style dispatch with a committed sweep direction.
///
/// Once moving, the car services only car calls (passenger already aboard)
/// and hall calls whose declared direction matches the sweep.  It keeps
/// travelling while *any* pending request lies ahead — opposite-direction
/// hall calls are valid turning points but are not serviced until after the
/// reversal, at which point they become eligible.  When idle with no
/// commitment, the initial direction points toward the nearest pending
/// request, ties broken toward the lower floor.
pub struct DirectionalScanLiftController {
    factory: RequestFactory,
    store: RequestStore,
    /// Sweep direction; `None` until the first commitment and whenever the
    /// active set empties.  Never `Direction::Idle`.
    committed: Option<Direction>,
}

impl DirectionalScanLiftController {
    pub fn new() -> Self {
        Self {
            factory: RequestFactory::new(),
            store: RequestStore::new(),
            committed: None,
        }
    }

    /// Is `request` serviceable during a sweep in `direction`?
    ///
    /// Car calls always are; hall calls require a matching declared
    /// direction (`Direction::Idle` hall calls are direction-agnostic).
    fn eligible_under(request: &LiftRequest, direction: Option<Direction>) -> bool {
        match (request.direction(), direction) {
            (None, _) => true,
            (Some(Direction::Idle), _) => true,
            (Some(_), None) => true,
            (Some(declared), Some(sweep)) => declared == sweep,
        }
    }

    fn eligible_stop_here(&self, floor: Floor) -> bool {
        self.store
            .iter()
            .any(|r| r.floor() == floor && Self::eligible_under(r, self.committed))
    }

    /// Any pending request strictly ahead of `floor` in `direction`?
    ///
    /// Deliberately ignores eligibility: an opposite-direction hall call
    /// ahead is a turning point the car must still travel to.
    fn has_business_ahead(&self, floor: Floor, direction: Direction) -> bool {
        self.store.iter().any(|r| match direction {
            Direction::Up => r.floor() > floor,
            Direction::Down => r.floor() < floor,
            Direction::Idle => false,
        })
    }

    /// Re-mark assignments for the current sweep: eligible requests at or
    /// ahead of `floor` become `Assigned`; assigned requests that fell out
    /// of the sweep (reversal, new commitment) are re-queued.
    fn resweep(&mut self, floor: Floor, tick: Tick) {
        let Some(direction) = self.committed else {
            return;
        };
        let marks: Vec<(RequestId, RequestState, bool)> = self
            .store
            .iter()
            .map(|r| {
                let ahead_or_here = match direction {
                    Direction::Up => r.floor() >= floor,
                    Direction::Down => r.floor() <= floor,
                    Direction::Idle => false,
                };
                let in_sweep = ahead_or_here && Self::eligible_under(r, self.committed);
                (r.id(), r.state(), in_sweep)
            })
            .collect();
        for (id, state, in_sweep) in marks {
            match (state, in_sweep) {
                (RequestState::Queued, true) => {
                    self.store
                        .transition_if(id, RequestState::Queued, RequestState::Assigned, tick);
                }
                (RequestState::Assigned, false) => {
                    self.store
                        .transition_if(id, RequestState::Assigned, RequestState::Queued, tick);
                }
                _ => {}
            }
        }
    }

    fn move_toward(direction: Direction) -> Action {
        match direction {
            Direction::Up => Action::MoveUp,
            Direction::Down => Action::MoveDown,
            Direction::Idle => Action::Idle,
        }
    }

    fn plan_from_idle(&mut self, floor: Floor, tick: Tick) -> Action {
        if self.committed.is_none() {
            let nearest = self
                .store
                .iter()
                .map(|r| r.floor())
                .min_by_key(|&f| ((f - floor).abs(), f));
            let Some(nearest) = nearest else {
                return Action::Idle;
            };
            if nearest == floor {
                // Serve in place; commitment happens when travel starts.
                return Action::OpenDoor;
            }
            let direction = Direction::toward(floor, nearest);
            tracing::debug!(%direction, "committing sweep direction");
            self.committed = Some(direction);
        }

        let Some(direction) = self.committed else {
            return Action::Idle;
        };
        if self.eligible_stop_here(floor) {
            self.resweep(floor, tick);
            return Action::OpenDoor;
        }
        if self.has_business_ahead(floor, direction) {
            self.resweep(floor, tick);
            return Self::move_toward(direction);
        }

        // Sweep exhausted: reverse.  Opposite-direction hall calls now
        // become eligible.
        let reversed = direction.opposite();
        tracing::debug!(%reversed, "sweep exhausted, reversing");
        self.committed = Some(reversed);
        if self.eligible_stop_here(floor) {
            self.resweep(floor, tick);
            return Action::OpenDoor;
        }
        if self.has_business_ahead(floor, reversed) {
            self.resweep(floor, tick);
            return Self::move_toward(reversed);
        }
        self.committed = None;
        Action::Idle
    }

    fn complete_eligible_at(&mut self, floor: Floor, tick: Tick, include_serving: bool) {
        let ids: Vec<RequestId> = self
            .store
            .iter()
            .filter(|r| r.floor() == floor && Self::eligible_under(r, self.committed))
            .filter(|r| include_serving || r.state() != RequestState::Serving)
            .map(LiftRequest::id)
            .collect();
        for id in ids {
            if let Err(e) = self.store.complete(id, tick) {
                tracing::warn!(error = %e, "request completion failed");
            }
        }
    }
}

impl Default for DirectionalScanLiftController {
    fn default() -> Self {
        Self::new()
    }
}

impl LiftController for DirectionalScanLiftController {
    fn decide(&mut self, state: &LiftState, tick: Tick) -> Action {
        if self.store.is_empty() {
            self.committed = None;
            return Action::Idle;
        }
        match state.status {
            LiftStatus::Idle => self.plan_from_idle(state.floor, tick),
            // A fresh eligible call at this floor during closing attempts a
            // reopen; honored by the engine only within the reopen window.
            LiftStatus::DoorsClosing if self.eligible_stop_here(state.floor) => Action::OpenDoor,
            // Movement legs and door phases run to completion.
            _ => Action::Idle,
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
        self.store.cancel(id, tick)
    }

    fn active_requests(&self) -> Vec<LiftRequest> {
        self.store.snapshot()
    }

    fn history(&self) -> Vec<LiftRequest> {
        self.store.history().to_vec()
    }

    fn on_arrival(&mut self, floor: Floor, tick: Tick) {
        let ids: Vec<RequestId> = self
            .store
            .iter()
            .filter(|r| r.floor() == floor && Self::eligible_under(r, self.committed))
            .map(LiftRequest::id)
            .collect();
        for id in ids {
            self.store
                .transition_if(id, RequestState::Assigned, RequestState::Serving, tick);
        }
    }

    fn on_doors_opening(&mut self, floor: Floor, tick: Tick) {
        self.complete_eligible_at(floor, tick, false);
    }

    fn on_doors_open(&mut self, floor: Floor, tick: Tick) {
        self.complete_eligible_at(floor, tick, true);
    }

    fn take_out_of_service(&mut self, tick: Tick) {
        self.store.cancel_all(tick);
        self.committed = None;
    }

    fn return_to_service(&mut self) {
        self.committed = None;
    }

    fn drain_events(&mut self) -> Vec<RequestEvent> {
        self.store.drain_events()
    }
}
