//! Engine error taxonomy.
//!
//! Construction-time bound violations are fatal (`Core`).  Runtime request
//! plumbing surfaces `Request` and `FloorOutOfBounds` through `Result`s.
//! Operations that make no sense in the car's current mode (double shutdown,
//! returning a running car to service) are `InvalidOperation`.  Rejected
//! *controller actions* are deliberately absent: those degrade to an idle
//! tick with a log line, never an error.

use lift_core::{CoreError, Floor};
use lift_request::RequestError;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("floor {floor} outside serviced range [{min}, {max}]")]
    FloorOutOfBounds { floor: Floor, min: Floor, max: Floor },

    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}
