//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  All durations in the
//! simulator — travel per floor, door transitions, dwell, idle timeouts —
//! are integer tick counts, never wall-clock timers.  That is what makes a
//! run deterministic and replayable from the same inputs.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute index on the simulation timeline.
///
/// `Tick(0)` is the first tick an engine executes and indices only grow.
/// Ticks are compared and subtracted, never added: durations live in the
/// configuration as plain `u64` counts.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Whole ticks from `earlier` up to `self`.
    ///
    /// # Panics
    /// Panics in debug builds if `earlier` is ahead of `self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Monotonic tick counter with mark-and-elapse helpers.
///
/// The engine advances the clock exactly once per `tick()` call, so the
/// clock's total ordering of ticks is the only ordering guarantee the core
/// provides.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    current_tick: Tick,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current tick.
    #[inline]
    pub fn now(&self) -> Tick {
        self.current_tick
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Ticks elapsed since `mark` (a tick captured earlier via [`now`][Self::now]).
    #[inline]
    pub fn elapsed_since(&self, mark: Tick) -> u64 {
        self.current_tick.since(mark)
    }

    /// Have at least `n` ticks elapsed since `mark`?
    #[inline]
    pub fn has_elapsed(&self, mark: Tick, n: u64) -> bool {
        self.elapsed_since(mark) >= n
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current_tick)
    }
}
