//! Core error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! via `From` impls or wrap it as one variant.

use thiserror::Error;

use crate::LiftStatus;

/// Errors raised by `lift-core` primitives.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("illegal lift status transition {from} -> {to}")]
    InvalidTransition { from: LiftStatus, to: LiftStatus },
}

/// Shorthand result type for `lift-core`.
pub type CoreResult<T> = Result<T, CoreError>;
