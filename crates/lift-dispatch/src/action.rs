//! The per-tick decision vocabulary.

use std::fmt;

/// What a controller wants the car to do this tick.
///
/// Produced by [`LiftController::decide`][crate::LiftController::decide] and
/// consumed by the engine, which maps it to a status transition, validates it
/// against the adjacency table, and degrades illegal requests to an idle
/// tick.  `Idle` covers both "nothing to do" and "wait for the current phase
/// to finish" — the engine's autonomous progression (movement legs, door
/// timing) continues regardless.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    MoveUp,
    MoveDown,
    OpenDoor,
    CloseDoor,
    Idle,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::MoveUp => "move_up",
            Action::MoveDown => "move_down",
            Action::OpenDoor => "open_door",
            Action::CloseDoor => "close_door",
            Action::Idle => "idle",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
