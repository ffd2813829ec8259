//! `RequestStore` — a controller's active-request index plus terminal history.
//!
//! # Why a `BTreeMap`
//!
//! Controllers iterate the active set every tick to pick targets, and every
//! lifecycle transition is recorded as an observable event.  An ordered map
//! keyed by id makes both iteration order and event order deterministic, so
//! two identically-fed simulations produce identical traces.  Lookup is
//! O(log n) over a set that is at most tens of requests.

use std::collections::BTreeMap;

use lift_core::{Floor, RequestId, Tick};

use crate::error::{RequestError, RequestResult};
use crate::request::LiftRequest;
use crate::state::RequestState;

// ── RequestEvent ──────────────────────────────────────────────────────────────

/// One observed lifecycle transition, emitted for external reporting.
///
/// Events are an append-only projection of what already happened; consuming
/// or dropping them never feeds back into dispatch decisions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequestEvent {
    pub id: RequestId,
    pub floor: Floor,
    pub from: RequestState,
    pub to: RequestState,
    pub tick: Tick,
}

// ── RequestStore ──────────────────────────────────────────────────────────────

/// Active (non-terminal) requests indexed by id, kept disjoint from a
/// completed/cancelled history retained for reporting.
///
/// A request leaves the active index the instant it reaches a terminal
/// state; the store never holds a terminal request in `active`.
#[derive(Debug, Default)]
pub struct RequestStore {
    active: BTreeMap<RequestId, LiftRequest>,
    history: Vec<LiftRequest>,
    events: Vec<RequestEvent>,
}

impl RequestStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand a freshly created request to the store, advancing it
    /// `Created → Queued`.
    pub fn insert(&mut self, mut request: LiftRequest, tick: Tick) -> RequestResult<RequestId> {
        let id = request.id();
        let from = request.state();
        request.transition_to(RequestState::Queued)?;
        self.events.push(RequestEvent {
            id,
            floor: request.floor(),
            from,
            to: RequestState::Queued,
            tick,
        });
        self.active.insert(id, request);
        Ok(id)
    }

    /// Advance the active request `id` one lifecycle edge.
    ///
    /// On a terminal target the request moves from the active index to the
    /// history in the same call.
    pub fn transition(&mut self, id: RequestId, to: RequestState, tick: Tick) -> RequestResult<()> {
        let request = self
            .active
            .get_mut(&id)
            .ok_or(RequestError::UnknownRequest(id))?;
        let from = request.state();
        request.transition_to(to)?;
        self.events.push(RequestEvent {
            id,
            floor: request.floor(),
            from,
            to,
            tick,
        });
        if to.is_terminal() {
            if let Some(request) = self.active.remove(&id) {
                self.history.push(request);
            }
        }
        Ok(())
    }

    /// Apply `from → to` only if the request is currently in `from`.
    ///
    /// Returns whether the edge was applied.  Controllers use this for
    /// transitions guarded by a state check, where "not in that state any
    /// more" is an expected outcome rather than a defect.
    pub fn transition_if(
        &mut self,
        id: RequestId,
        from: RequestState,
        to: RequestState,
        tick: Tick,
    ) -> bool {
        if self.active.get(&id).map(LiftRequest::state) != Some(from) {
            return false;
        }
        self.transition(id, to, tick).is_ok()
    }

    /// Drive the active request `id` through its remaining lifecycle to
    /// `Completed`, emitting one event per edge walked.
    pub fn complete(&mut self, id: RequestId, tick: Tick) -> RequestResult<()> {
        loop {
            let state = self
                .active
                .get(&id)
                .ok_or(RequestError::UnknownRequest(id))?
                .state();
            let next = match state {
                RequestState::Queued => RequestState::Assigned,
                RequestState::Assigned => RequestState::Serving,
                RequestState::Serving => RequestState::Completed,
                other => {
                    return Err(RequestError::InvalidTransition {
                        id,
                        from: other,
                        to: RequestState::Completed,
                    });
                }
            };
            self.transition(id, next, tick)?;
            if next == RequestState::Completed {
                return Ok(());
            }
        }
    }

    /// Cancel the active request `id`.
    ///
    /// Returns `false` for an unknown or already-terminal id — cancellation
    /// is routinely attempted speculatively, so this is not an error.
    /// Idempotent: a second call for the same id returns `false`.
    pub fn cancel(&mut self, id: RequestId, tick: Tick) -> bool {
        if !self.active.contains_key(&id) {
            return false;
        }
        // Every non-terminal, post-insert state has a Cancelled edge.
        self.transition(id, RequestState::Cancelled, tick).is_ok()
    }

    /// Cancel every active request (out-of-service safety measure).
    pub fn cancel_all(&mut self, tick: Tick) {
        let ids: Vec<RequestId> = self.active.keys().copied().collect();
        for id in ids {
            self.cancel(id, tick);
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn get(&self, id: RequestId) -> Option<&LiftRequest> {
        self.active.get(&id)
    }

    /// Iterate active requests in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &LiftRequest> {
        self.active.values()
    }

    /// Ids of active requests serviced at `floor`, ascending.
    pub fn ids_at_floor(&self, floor: Floor) -> Vec<RequestId> {
        self.active
            .values()
            .filter(|r| r.floor() == floor)
            .map(|r| r.id())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Clones of all active requests, ascending by id.  This is the snapshot
    /// surface handed to external readers; they never receive shared mutable
    /// references.
    pub fn snapshot(&self) -> Vec<LiftRequest> {
        self.active.values().cloned().collect()
    }

    /// Terminal requests, in completion/cancellation order.
    pub fn history(&self) -> &[LiftRequest] {
        &self.history
    }

    /// Take all lifecycle events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<RequestEvent> {
        std::mem::take(&mut self.events)
    }
}
