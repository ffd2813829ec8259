//! Physical lift status model.
//!
//! # Design
//!
//! `LiftStatus` is the single source of truth for the car's physical state.
//! Travel direction and door position are *derived* from it by pure mapping
//! functions rather than stored in separate mutable fields.  Storing them
//! separately invites desynchronization ("moving with doors open"); deriving
//! them makes that whole class of state impossible to represent.

use std::fmt;

/// A building floor.  Signed so basements (`-1`, `-2`, …) are representable.
pub type Floor = i32;

// ── LiftStatus ────────────────────────────────────────────────────────────────

/// The authoritative physical state of the car.
///
/// Exactly one variant holds at any tick.  Legal transitions between variants
/// are defined by [`transition::is_valid`][crate::transition::is_valid].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LiftStatus {
    /// Stationary at a floor with doors closed, ready to accept any action.
    Idle,
    /// Travelling toward the floor above.
    MovingUp,
    /// Travelling toward the floor below.
    MovingDown,
    /// Doors in motion toward fully open.
    DoorsOpening,
    /// Doors fully open (passengers boarding/alighting).
    DoorsOpen,
    /// Doors in motion toward fully closed.
    DoorsClosing,
    /// Offline.  Entered only through the graceful shutdown sequence.
    OutOfService,
}

impl LiftStatus {
    /// Derived travel direction.  Only the moving variants have one.
    #[inline]
    pub fn direction(self) -> Direction {
        match self {
            LiftStatus::MovingUp => Direction::Up,
            LiftStatus::MovingDown => Direction::Down,
            _ => Direction::Idle,
        }
    }

    /// Derived door position.  Doors are open only in `DoorsOpen`.
    #[inline]
    pub fn door_state(self) -> DoorState {
        match self {
            LiftStatus::DoorsOpen => DoorState::Open,
            _ => DoorState::Closed,
        }
    }

    /// True for `MovingUp` / `MovingDown`.
    #[inline]
    pub fn is_moving(self) -> bool {
        matches!(self, LiftStatus::MovingUp | LiftStatus::MovingDown)
    }

    /// True while doors are opening, open, or closing.
    #[inline]
    pub fn in_door_cycle(self) -> bool {
        matches!(
            self,
            LiftStatus::DoorsOpening | LiftStatus::DoorsOpen | LiftStatus::DoorsClosing
        )
    }

    /// Stable lowercase name, used by output sinks and `Display`.
    pub fn as_str(self) -> &'static str {
        match self {
            LiftStatus::Idle => "idle",
            LiftStatus::MovingUp => "moving_up",
            LiftStatus::MovingDown => "moving_down",
            LiftStatus::DoorsOpening => "doors_opening",
            LiftStatus::DoorsOpen => "doors_open",
            LiftStatus::DoorsClosing => "doors_closing",
            LiftStatus::OutOfService => "out_of_service",
        }
    }
}

impl fmt::Display for LiftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// Travel direction, either derived from [`LiftStatus`] or declared on a hall
/// call.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    /// No direction (stationary, or a direction-agnostic hall call).
    Idle,
}

impl Direction {
    /// `Up` ↔ `Down`; `Idle` has no opposite and maps to itself.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Idle => Direction::Idle,
        }
    }

    /// The direction from `from` toward `to` (`Idle` when equal).
    #[inline]
    pub fn toward(from: Floor, to: Floor) -> Direction {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Direction::Up,
            std::cmp::Ordering::Less => Direction::Down,
            std::cmp::Ordering::Equal => Direction::Idle,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Idle => "idle",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DoorState ─────────────────────────────────────────────────────────────────

/// Derived door position.  Never stored; always computed from [`LiftStatus`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DoorState {
    Open,
    Closed,
}

// ── LiftState ─────────────────────────────────────────────────────────────────

/// Immutable snapshot of the car's observable state at one tick.
///
/// The engine replaces the whole snapshot on every change; it is never
/// mutated in place.  Invariant: `floor` stays within the configured
/// `[min_floor, max_floor]` range.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiftState {
    pub floor: Floor,
    pub status: LiftStatus,
}

impl LiftState {
    #[inline]
    pub fn new(floor: Floor, status: LiftStatus) -> Self {
        Self { floor, status }
    }

    /// Derived travel direction of this snapshot.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.status.direction()
    }

    /// Derived door position of this snapshot.
    #[inline]
    pub fn door_state(&self) -> DoorState {
        self.status.door_state()
    }
}

impl fmt::Display for LiftState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "floor {} [{}]", self.floor, self.status)
    }
}
