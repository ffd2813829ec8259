//! The passenger-call entity and its factory.

use std::fmt;
use std::hash::{Hash, Hasher};

use lift_core::{Direction, Floor, RequestId};

use crate::error::{RequestError, RequestResult};
use crate::state::RequestState;

// ── CallKind ──────────────────────────────────────────────────────────────────

/// How the call was made.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CallKind {
    /// Made from a landing, before boarding.  Carries the desired travel
    /// direction; `Direction::Idle` means direction-agnostic.
    Hall { direction: Direction },
    /// Made from inside the car for a destination floor.  Direction is
    /// derived from the car's position, never declared.
    Car,
}

// ── LiftRequest ───────────────────────────────────────────────────────────────

/// One passenger call.
///
/// Identity is the id: two requests targeting the same floor are distinct,
/// so `PartialEq`/`Hash` are implemented over `id` alone.  External readers
/// receive clones of this struct as snapshots; only the owning controller
/// mutates `state`, and only through [`transition_to`][Self::transition_to].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiftRequest {
    id: RequestId,
    kind: CallKind,
    floor: Floor,
    state: RequestState,
}

impl LiftRequest {
    #[inline]
    pub fn id(&self) -> RequestId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> CallKind {
        self.kind
    }

    /// The floor this call is serviced at: origin floor for a hall call,
    /// destination floor for a car call.
    #[inline]
    pub fn floor(&self) -> Floor {
        self.floor
    }

    #[inline]
    pub fn state(&self) -> RequestState {
        self.state
    }

    /// Declared travel direction for hall calls; `None` for car calls.
    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        match self.kind {
            CallKind::Hall { direction } => Some(direction),
            CallKind::Car => None,
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Advance the lifecycle to `to`, rejecting any edge not in the table.
    pub fn transition_to(&mut self, to: RequestState) -> RequestResult<()> {
        if !RequestState::can_transition(self.state, to) {
            return Err(RequestError::InvalidTransition {
                id: self.id,
                from: self.state,
                to,
            });
        }
        self.state = to;
        Ok(())
    }
}

impl PartialEq for LiftRequest {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for LiftRequest {}

impl Hash for LiftRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for LiftRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CallKind::Hall { direction } => {
                write!(f, "hall#{} floor {} {} [{}]", self.id.0, self.floor, direction, self.state)
            }
            CallKind::Car => write!(f, "car#{} floor {} [{}]", self.id.0, self.floor, self.state),
        }
    }
}

// ── RequestFactory ────────────────────────────────────────────────────────────

/// Allocates monotonically increasing ids and builds requests in `Created`.
#[derive(Debug, Default)]
pub struct RequestFactory {
    next: u64,
}

impl RequestFactory {
    pub fn new() -> Self {
        Self::default()
    }

    fn build(&mut self, kind: CallKind, floor: Floor) -> LiftRequest {
        let id = RequestId(self.next);
        self.next += 1;
        LiftRequest {
            id,
            kind,
            floor,
            state: RequestState::Created,
        }
    }

    /// A landing call at `floor` wanting to travel in `direction`.
    pub fn hall_call(&mut self, floor: Floor, direction: Direction) -> LiftRequest {
        self.build(CallKind::Hall { direction }, floor)
    }

    /// An in-car call for destination `floor`.
    pub fn car_call(&mut self, floor: Floor) -> LiftRequest {
        self.build(CallKind::Car, floor)
    }
}
