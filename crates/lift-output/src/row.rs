//! Flat row types for the two run projections.

use lift_core::{Direction, Floor, LiftState, LiftStatus, RequestId, Tick};
use lift_request::{RequestEvent, RequestState};

/// One tick of the state trace.  Direction and door position are denormalized
/// into their own columns for downstream KPI queries.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TickStateRow {
    pub tick:      Tick,
    pub floor:     Floor,
    pub status:    LiftStatus,
    pub direction: Direction,
    pub door_open: bool,
}

impl TickStateRow {
    pub fn from_state(tick: Tick, state: &LiftState) -> Self {
        Self {
            tick,
            floor: state.floor,
            status: state.status,
            direction: state.direction(),
            door_open: state.door_state() == lift_core::DoorState::Open,
        }
    }
}

/// One request lifecycle transition.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RequestEventRow {
    pub tick:       Tick,
    pub request_id: RequestId,
    pub floor:      Floor,
    pub from:       RequestState,
    pub to:         RequestState,
}

impl From<&RequestEvent> for RequestEventRow {
    fn from(event: &RequestEvent) -> Self {
        Self {
            tick:       event.tick,
            request_id: event.id,
            floor:      event.floor,
            from:       event.from,
            to:         event.to,
        }
    }
}
