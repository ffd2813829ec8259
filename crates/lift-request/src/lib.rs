//! `lift-request` — the passenger-call entity and its lifecycle.
//!
//! # What lives here
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`state`]   | `RequestState` and its fixed transition table            |
//! | [`request`] | `LiftRequest`, `CallKind`, `RequestFactory`              |
//! | [`store`]   | `RequestStore` (active index + terminal history), `RequestEvent` |
//! | [`error`]   | `RequestError`, `RequestResult`                          |
//!
//! Request state is only ever changed through the validated
//! [`LiftRequest::transition_to`] contract; any edge not in the lifecycle
//! table is rejected with [`RequestError::InvalidTransition`].

pub mod error;
pub mod request;
pub mod state;
pub mod store;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RequestError, RequestResult};
pub use request::{CallKind, LiftRequest, RequestFactory};
pub use state::RequestState;
pub use store::{RequestEvent, RequestStore};
