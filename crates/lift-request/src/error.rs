//! Request lifecycle error type.

use thiserror::Error;

use lift_core::RequestId;

use crate::state::RequestState;

/// Errors raised by request lifecycle operations.
///
/// An invalid lifecycle edge indicates a controller logic defect, so it is
/// surfaced as a `Result` the caller must handle rather than logged away.
/// Speculative cancellation of an unknown id is *not* an error — see
/// [`RequestStore::cancel`][crate::RequestStore::cancel], which returns a
/// boolean instead.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("illegal request transition {from} -> {to} for {id}")]
    InvalidTransition {
        id: RequestId,
        from: RequestState,
        to: RequestState,
    },

    #[error("no active request with id {0}")]
    UnknownRequest(RequestId),
}

/// Shorthand result type for `lift-request`.
pub type RequestResult<T> = Result<T, RequestError>;
