//! Engine configuration.

use crate::error::{CoreError, CoreResult};
use crate::status::Floor;

/// Immutable simulation parameters, fixed at engine construction.
///
/// All bounds are checked by [`validate`][Self::validate]; a violated bound
/// is a fatal configuration error, never silently clamped.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Lowest serviced floor.
    pub min_floor: Floor,

    /// Highest serviced floor.  Must be strictly above `min_floor`.
    pub max_floor: Floor,

    /// Floor the car starts at.  Must lie within `[min_floor, max_floor]`.
    pub initial_floor: Floor,

    /// Ticks one single-floor movement leg takes.  Must be ≥ 1.
    pub travel_ticks_per_floor: u64,

    /// Ticks a door opening (or closing) phase takes.  Must be ≥ 1.
    pub door_transition_ticks: u64,

    /// Ticks doors stay open before the engine autonomously starts closing
    /// them.  May be 0 (close on the first tick after fully open).
    pub door_dwell_ticks: u64,

    /// A same-floor request reverses closing doors back into opening while
    /// fewer than this many closing ticks have fully elapsed; 0 disables
    /// reversal.  Must lie within `[0, door_transition_ticks]`.
    pub door_reopen_window_ticks: u64,
}

impl EngineConfig {
    /// A small default building: floors 0–9, one tick per floor, two-tick
    /// doors with a three-tick dwell.  The reopen window spans the whole
    /// closing phase.
    pub fn ten_floors() -> Self {
        Self {
            min_floor: 0,
            max_floor: 9,
            initial_floor: 0,
            travel_ticks_per_floor: 1,
            door_transition_ticks: 2,
            door_dwell_ticks: 3,
            door_reopen_window_ticks: 2,
        }
    }

    /// Check every construction-time bound.
    pub fn validate(&self) -> CoreResult<()> {
        if self.min_floor >= self.max_floor {
            return Err(CoreError::Config(format!(
                "min_floor {} must be below max_floor {}",
                self.min_floor, self.max_floor
            )));
        }
        if self.initial_floor < self.min_floor || self.initial_floor > self.max_floor {
            return Err(CoreError::Config(format!(
                "initial_floor {} outside [{}, {}]",
                self.initial_floor, self.min_floor, self.max_floor
            )));
        }
        if self.travel_ticks_per_floor == 0 {
            return Err(CoreError::Config(
                "travel_ticks_per_floor must be at least 1".into(),
            ));
        }
        if self.door_transition_ticks == 0 {
            return Err(CoreError::Config(
                "door_transition_ticks must be at least 1".into(),
            ));
        }
        if self.door_reopen_window_ticks > self.door_transition_ticks {
            return Err(CoreError::Config(format!(
                "door_reopen_window_ticks {} exceeds door_transition_ticks {}",
                self.door_reopen_window_ticks, self.door_transition_ticks
            )));
        }
        Ok(())
    }

    /// Is `floor` within the serviced range?
    #[inline]
    pub fn contains_floor(&self, floor: Floor) -> bool {
        (self.min_floor..=self.max_floor).contains(&floor)
    }

    /// Number of serviced floors.
    #[inline]
    pub fn floor_span(&self) -> u64 {
        (self.max_floor - self.min_floor) as u64 + 1
    }
}
