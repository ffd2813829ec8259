//! The tick-driven simulation engine.
//!
//! # Tick anatomy
//!
//! Each `tick()`:
//!
//! 1. Advances the in-progress phase, if any: movement legs and door phases
//!    count up by one and complete when their counter fills; dwell expiry
//!    starts closing.  Completions land before the controller looks at the
//!    snapshot.
//! 2. Hands the updated snapshot to the controller and maps the returned
//!    [`Action`] to a desired status.
//! 3. Validates the desired status against the adjacency table.  A rejected
//!    request degrades to an idle tick and is logged — never substituted
//!    with a different legal action.
//! 4. Applies the action: movement legs and door cycles start here, and a
//!    same-floor request inside the reopen window reverses closing doors.
//! 5. Drains the controller's lifecycle events to the observer and advances
//!    the clock.
//!
//! A freshly entered phase holds its status through the entry tick's
//! snapshot and completes on a later tick, so a `travel_ticks_per_floor`-tick
//! leg is visible for exactly that many snapshots.  With one-tick legs the
//! car still covers a floor per tick while requests remain ahead, because
//! arrival and the next departure share a tick.
//!
//! # Shutdown
//!
//! `set_out_of_service()` never halts the car abruptly: an in-flight
//! movement leg completes, then one safety door cycle runs (a cycle already
//! in progress counts), and only at closing completion does the status chain
//! `DoorsClosing → Idle → OutOfService` — every edge table-legal.

use lift_core::{
    Direction, EngineConfig, Floor, LiftState, LiftStatus, RequestId, SimClock, Tick, transition,
};
use lift_dispatch::{Action, LiftController};
use lift_request::LiftRequest;

use crate::error::{EngineError, EngineResult};
use crate::observer::{EngineObserver, NoopObserver};

/// Single-car simulation engine, generic over the dispatch strategy.
pub struct LiftEngine<C: LiftController> {
    config:     EngineConfig,
    clock:      SimClock,
    state:      LiftState,
    controller: C,

    /// Full ticks completed in the current movement leg or door phase.
    /// Zero on the phase's entry tick.
    transition_elapsed: u64,

    /// Clock mark captured when `DoorsOpen` was last reached.
    door_open_since: Tick,

    /// Shutdown requested but not yet in effect; the car finishes its leg
    /// and one safety door cycle first.
    oos_pending: bool,
}

impl<C: LiftController> LiftEngine<C> {
    /// Validate `config` and place the car idle at the initial floor.
    pub fn new(config: EngineConfig, controller: C) -> EngineResult<Self> {
        config.validate()?;
        let state = LiftState::new(config.initial_floor, LiftStatus::Idle);
        Ok(Self {
            config,
            clock: SimClock::new(),
            state,
            controller,
            transition_elapsed: 0,
            door_open_since: Tick::ZERO,
            oos_pending: false,
        })
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The current snapshot.
    #[inline]
    pub fn state(&self) -> LiftState {
        self.state
    }

    /// The current tick (the one the next `tick()` call will execute).
    #[inline]
    pub fn now(&self) -> Tick {
        self.clock.now()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn is_out_of_service(&self) -> bool {
        self.state.status == LiftStatus::OutOfService
    }

    /// Shutdown requested but the car has not reached `OutOfService` yet.
    #[inline]
    pub fn shutdown_pending(&self) -> bool {
        self.oos_pending
    }

    /// Snapshots of all active requests, ascending by id.
    pub fn active_requests(&self) -> Vec<LiftRequest> {
        self.controller.active_requests()
    }

    /// Terminal requests retained for reporting.
    pub fn request_history(&self) -> Vec<LiftRequest> {
        self.controller.history()
    }

    // ── Request surface ───────────────────────────────────────────────────

    /// Queue a landing call at `floor` toward `direction`.
    pub fn add_hall_call(&mut self, floor: Floor, direction: Direction) -> EngineResult<RequestId> {
        self.ensure_accepting("add_hall_call")?;
        self.ensure_in_bounds(floor)?;
        Ok(self.controller.add_hall_call(floor, direction, self.clock.now())?)
    }

    /// Queue an in-car call for destination `floor`.
    pub fn add_car_call(&mut self, floor: Floor) -> EngineResult<RequestId> {
        self.ensure_accepting("add_car_call")?;
        self.ensure_in_bounds(floor)?;
        Ok(self.controller.add_car_call(floor, self.clock.now())?)
    }

    /// Cancel an active request.  `false` for unknown/terminal ids.
    pub fn cancel_request(&mut self, id: RequestId) -> bool {
        self.controller.cancel_request(id, self.clock.now())
    }

    /// Request a graceful shutdown.  All active requests are cancelled
    /// immediately; the physical wind-down spans the following ticks.
    pub fn set_out_of_service(&mut self) -> EngineResult<()> {
        if self.oos_pending || self.is_out_of_service() {
            return Err(EngineError::InvalidOperation(
                "shutdown already requested or in effect".into(),
            ));
        }
        tracing::info!(tick = %self.clock.now(), "shutdown requested");
        self.oos_pending = true;
        self.controller.take_out_of_service(self.clock.now());
        Ok(())
    }

    /// Bring an out-of-service car back to `Idle` at its current floor.
    pub fn return_to_service(&mut self) -> EngineResult<()> {
        if !self.is_out_of_service() {
            return Err(EngineError::InvalidOperation(
                "car is not out of service".into(),
            ));
        }
        self.state = LiftState::new(self.state.floor, LiftStatus::Idle);
        self.transition_elapsed = 0;
        self.controller.return_to_service();
        tracing::info!(tick = %self.clock.now(), floor = self.state.floor, "returned to service");
        Ok(())
    }

    // ── Ticking ───────────────────────────────────────────────────────────

    /// Advance one tick without observation.
    pub fn tick(&mut self) {
        self.tick_with(&mut NoopObserver);
    }

    /// Advance `ticks` ticks, reporting to `observer`.
    pub fn run_for(&mut self, ticks: u64, observer: &mut dyn EngineObserver) {
        for _ in 0..ticks {
            self.tick_with(observer);
        }
    }

    /// Advance one tick, reporting to `observer`.
    pub fn tick_with(&mut self, observer: &mut dyn EngineObserver) {
        let tick = self.clock.now();
        observer.on_tick_start(tick, &self.state);

        self.progress(tick, observer);

        let action = self.controller.decide(&self.state, tick);
        let desired = self.validate_action(action);
        self.apply(desired, tick, observer);

        for event in self.controller.drain_events() {
            observer.on_request_event(&event);
        }
        observer.on_tick_end(tick, &self.state);
        self.clock.advance();
    }

    /// Map `action` to a desired status, dropping requests the adjacency
    /// table forbids from the current status.
    fn validate_action(&self, action: Action) -> Option<LiftStatus> {
        let desired = match action {
            Action::MoveUp => LiftStatus::MovingUp,
            Action::MoveDown => LiftStatus::MovingDown,
            Action::OpenDoor => LiftStatus::DoorsOpening,
            Action::CloseDoor => LiftStatus::DoorsClosing,
            Action::Idle => return None,
        };
        if desired == self.state.status {
            return None;
        }
        if !transition::is_valid(self.state.status, desired) {
            tracing::warn!(
                from = %self.state.status,
                requested = %desired,
                "action rejected by transition table, idling instead"
            );
            return None;
        }
        Some(desired)
    }

    /// Advance the in-progress phase by one tick, completing it when its
    /// counter fills.  Runs before the controller decision, so the decision
    /// already sees this tick's arrival or door completion.
    fn progress(&mut self, tick: Tick, observer: &mut dyn EngineObserver) {
        match self.state.status {
            LiftStatus::MovingUp | LiftStatus::MovingDown => self.advance_movement(tick, observer),
            LiftStatus::DoorsOpening => self.advance_opening(tick, observer),
            LiftStatus::DoorsOpen => {
                if self
                    .clock
                    .has_elapsed(self.door_open_since, self.config.door_dwell_ticks)
                {
                    self.begin_closing(tick, observer);
                }
            }
            LiftStatus::DoorsClosing => self.advance_closing(tick, observer),
            LiftStatus::Idle | LiftStatus::OutOfService => {}
        }
    }

    /// Apply the controller's validated desire to the post-progress state.
    fn apply(&mut self, desired: Option<LiftStatus>, tick: Tick, observer: &mut dyn EngineObserver) {
        match self.state.status {
            LiftStatus::Idle if self.oos_pending => {
                // The safety door cycle before shutdown overrides whatever
                // the controller wanted.
                self.begin_opening(tick, observer);
            }
            LiftStatus::Idle => match desired {
                Some(LiftStatus::MovingUp) => {
                    self.begin_move(1, LiftStatus::MovingUp, tick, observer);
                }
                Some(LiftStatus::MovingDown) => {
                    self.begin_move(-1, LiftStatus::MovingDown, tick, observer);
                }
                Some(LiftStatus::DoorsOpening) => self.begin_opening(tick, observer),
                _ => {}
            },
            LiftStatus::DoorsOpen if desired == Some(LiftStatus::DoorsClosing) => {
                // Early close, ahead of dwell expiry.
                self.begin_closing(tick, observer);
            }
            LiftStatus::DoorsClosing if desired == Some(LiftStatus::DoorsOpening) => {
                if !self.oos_pending
                    && self.transition_elapsed < self.config.door_reopen_window_ticks
                {
                    self.reverse_into_opening(tick, observer);
                } else {
                    tracing::debug!(
                        elapsed = self.transition_elapsed,
                        window = self.config.door_reopen_window_ticks,
                        "reopen window missed, doors finish closing"
                    );
                }
            }
            _ => {}
        }
    }

    // ── Movement ──────────────────────────────────────────────────────────

    fn begin_move(
        &mut self,
        delta: Floor,
        status: LiftStatus,
        tick: Tick,
        observer: &mut dyn EngineObserver,
    ) {
        let next_floor = self.state.floor + delta;
        if !self.config.contains_floor(next_floor) {
            tracing::warn!(
                floor = self.state.floor,
                next_floor,
                "move rejected at floor bound, idling instead"
            );
            return;
        }
        self.set_status(status, tick, observer);
        self.transition_elapsed = 0;
    }

    fn advance_movement(&mut self, tick: Tick, observer: &mut dyn EngineObserver) {
        self.transition_elapsed += 1;
        if self.transition_elapsed < self.config.travel_ticks_per_floor {
            return;
        }
        let delta = if self.state.status == LiftStatus::MovingUp {
            1
        } else {
            -1
        };
        self.state.floor += delta;
        self.transition_elapsed = 0;
        self.set_status(LiftStatus::Idle, tick, observer);
        self.controller.on_arrival(self.state.floor, tick);
    }

    // ── Doors ─────────────────────────────────────────────────────────────

    fn begin_opening(&mut self, tick: Tick, observer: &mut dyn EngineObserver) {
        self.set_status(LiftStatus::DoorsOpening, tick, observer);
        self.transition_elapsed = 0;
        self.controller.on_doors_opening(self.state.floor, tick);
    }

    fn advance_opening(&mut self, tick: Tick, observer: &mut dyn EngineObserver) {
        self.transition_elapsed += 1;
        if self.transition_elapsed < self.config.door_transition_ticks {
            return;
        }
        self.transition_elapsed = 0;
        self.set_status(LiftStatus::DoorsOpen, tick, observer);
        self.door_open_since = tick;
        self.controller.on_doors_open(self.state.floor, tick);
    }

    fn begin_closing(&mut self, tick: Tick, observer: &mut dyn EngineObserver) {
        self.set_status(LiftStatus::DoorsClosing, tick, observer);
        self.transition_elapsed = 0;
    }

    fn advance_closing(&mut self, tick: Tick, observer: &mut dyn EngineObserver) {
        self.transition_elapsed += 1;
        if self.transition_elapsed < self.config.door_transition_ticks {
            return;
        }
        self.transition_elapsed = 0;
        self.set_status(LiftStatus::Idle, tick, observer);
        if self.oos_pending {
            self.oos_pending = false;
            self.set_status(LiftStatus::OutOfService, tick, observer);
            tracing::info!(floor = self.state.floor, %tick, "out of service");
        }
    }

    /// Reverse a closing door back into opening.  Door position is
    /// symmetric: reopening takes exactly the closing progress made so far,
    /// with a minimum of one tick.
    fn reverse_into_opening(&mut self, tick: Tick, observer: &mut dyn EngineObserver) {
        self.transition_elapsed = self.config.door_transition_ticks - self.transition_elapsed;
        self.set_status(LiftStatus::DoorsOpening, tick, observer);
        self.controller.on_doors_opening(self.state.floor, tick);
    }

    // ── Plumbing ──────────────────────────────────────────────────────────

    fn set_status(&mut self, to: LiftStatus, tick: Tick, observer: &mut dyn EngineObserver) {
        let from = self.state.status;
        if from == to {
            return;
        }
        debug_assert!(transition::is_valid(from, to), "illegal edge {from} -> {to}");
        self.state = LiftState::new(self.state.floor, to);
        observer.on_status_change(tick, from, to);
    }

    fn ensure_accepting(&self, op: &str) -> EngineResult<()> {
        if self.oos_pending || self.is_out_of_service() {
            return Err(EngineError::InvalidOperation(format!(
                "{op} rejected while out of service or shutting down"
            )));
        }
        Ok(())
    }

    fn ensure_in_bounds(&self, floor: Floor) -> EngineResult<()> {
        if !self.config.contains_floor(floor) {
            return Err(EngineError::FloorOutOfBounds {
                floor,
                min: self.config.min_floor,
                max: self.config.max_floor,
            });
        }
        Ok(())
    }
}
