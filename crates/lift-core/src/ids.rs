//! Strongly typed request identifier.

use std::fmt;

/// Identity of one passenger call.
///
/// Allocated monotonically by the request factory; never reused within a
/// simulation.  Two requests may target the same floor, so equality and
/// index membership throughout the workspace go through this id, not through
/// a request's structural fields.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RequestId({})", self.0)
    }
}
