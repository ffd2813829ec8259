//! The lift-status transition table.
//!
//! A pure adjacency predicate over [`LiftStatus`] pairs.  The engine consults
//! it before applying any controller-requested status change; a rejected pair
//! degrades to an idle tick at the call site, never to a silently substituted
//! action.
//!
//! # The table
//!
//! | From           | Legal targets                                    |
//! |----------------|--------------------------------------------------|
//! | `Idle`         | `Idle`, `MovingUp`, `MovingDown`, `DoorsOpening`, `OutOfService` |
//! | `MovingUp`     | `MovingUp`, `Idle`                               |
//! | `MovingDown`   | `MovingDown`, `Idle`                             |
//! | `DoorsOpening` | `DoorsOpening`, `DoorsOpen`                      |
//! | `DoorsOpen`    | `DoorsOpen`, `DoorsClosing`                      |
//! | `DoorsClosing` | `DoorsClosing`, `DoorsOpening`, `Idle`           |
//! | `OutOfService` | `OutOfService`, `Idle`                           |
//!
//! Self-transitions model a phase holding across a tick while its counter
//! advances.  Movement never reaches a door variant (or vice versa) without
//! passing through `Idle`, and a direction change always passes through
//! `Idle`.  `DoorsClosing → DoorsOpening` is the reopen edge; the engine
//! additionally gates it on the configured reopen window.

use crate::LiftStatus;

/// Every status variant, for exhaustive pairwise enumeration in tests.
pub const ALL_STATUSES: [LiftStatus; 7] = [
    LiftStatus::Idle,
    LiftStatus::MovingUp,
    LiftStatus::MovingDown,
    LiftStatus::DoorsOpening,
    LiftStatus::DoorsOpen,
    LiftStatus::DoorsClosing,
    LiftStatus::OutOfService,
];

/// Is the status change `from → to` in the adjacency table?
#[inline]
pub fn is_valid(from: LiftStatus, to: LiftStatus) -> bool {
    use LiftStatus::*;
    matches!(
        (from, to),
        (Idle, Idle | MovingUp | MovingDown | DoorsOpening | OutOfService)
            | (MovingUp, MovingUp | Idle)
            | (MovingDown, MovingDown | Idle)
            | (DoorsOpening, DoorsOpening | DoorsOpen)
            | (DoorsOpen, DoorsOpen | DoorsClosing)
            | (DoorsClosing, DoorsClosing | DoorsOpening | Idle)
            | (OutOfService, OutOfService | Idle)
    )
}
