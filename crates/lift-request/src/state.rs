//! Request lifecycle states and their transition table.

use std::fmt;

/// Lifecycle state of one passenger call.
///
/// ```text
/// Created ─▶ Queued ─▶ Assigned ─▶ Serving ─▶ Completed
///               ▲          │ │         │
///               └──────────┘ └▶ Cancelled ◀┘  (also Queued ─▶ Cancelled)
/// ```
///
/// `Completed` and `Cancelled` are terminal: no outgoing edges, including
/// self-transitions.  The `Assigned → Queued` edge re-queues a call whose
/// dispatch target changed before service began.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RequestState {
    /// Freshly built by the factory; not yet handed to a controller.
    Created,
    /// In a controller's active index, awaiting dispatch.
    Queued,
    /// Chosen as a dispatch target.
    Assigned,
    /// The car has physically reached the call's floor.
    Serving,
    /// Serviced; removed from the active index.
    Completed,
    /// Withdrawn; removed from the active index.
    Cancelled,
}

impl RequestState {
    /// Every lifecycle state, for exhaustive enumeration in tests.
    pub const ALL: [RequestState; 6] = [
        RequestState::Created,
        RequestState::Queued,
        RequestState::Assigned,
        RequestState::Serving,
        RequestState::Completed,
        RequestState::Cancelled,
    ];

    /// Is `from → to` a legal lifecycle edge?
    #[inline]
    pub fn can_transition(from: RequestState, to: RequestState) -> bool {
        use RequestState::*;
        matches!(
            (from, to),
            (Created, Queued)
                | (Queued, Assigned | Cancelled)
                | (Assigned, Serving | Queued | Cancelled)
                | (Serving, Completed | Cancelled)
        )
    }

    /// `Completed` or `Cancelled`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, RequestState::Completed | RequestState::Cancelled)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RequestState::Created => "created",
            RequestState::Queued => "queued",
            RequestState::Assigned => "assigned",
            RequestState::Serving => "serving",
            RequestState::Completed => "completed",
            RequestState::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for RequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
