//! Observer implementations: the sink bridge and an in-memory recorder.

use lift_core::{LiftState, LiftStatus, Tick};
use lift_engine::EngineObserver;
use lift_request::RequestEvent;

use crate::error::{OutputError, OutputResult};
use crate::row::{RequestEventRow, TickStateRow};
use crate::writer::OutputWriter;

// ── EngineOutputObserver ──────────────────────────────────────────────────────

/// Bridges the engine's observer hooks to an [`OutputWriter`].
///
/// Hooks return `()`, so a failing writer cannot stop the simulation; the
/// first error is stored and surfaced by [`finish`][Self::finish].  After an
/// error, further rows are dropped.
pub struct EngineOutputObserver<W: OutputWriter> {
    writer: W,
    error:  Option<OutputError>,
}

impl<W: OutputWriter> EngineOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    fn record(&mut self, result: OutputResult<()>) {
        if self.error.is_none()
            && let Err(e) = result
        {
            self.error = Some(e);
        }
    }

    /// The first writer error, if any, leaving the observer usable.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.error.take()
    }

    /// Surface any stored error, flush the sink, and hand it back.
    pub fn finish(mut self) -> OutputResult<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.writer.finish()?;
        Ok(self.writer)
    }
}

impl<W: OutputWriter> EngineObserver for EngineOutputObserver<W> {
    fn on_request_event(&mut self, event: &RequestEvent) {
        if self.error.is_some() {
            return;
        }
        let row = RequestEventRow::from(event);
        let result = self.writer.write_request_event(&row);
        self.record(result);
    }

    fn on_tick_end(&mut self, tick: Tick, state: &LiftState) {
        if self.error.is_some() {
            return;
        }
        let row = TickStateRow::from_state(tick, state);
        let result = self.writer.write_tick_state(&row);
        self.record(result);
    }
}

// ── StateHistory ──────────────────────────────────────────────────────────────

/// In-memory recorder with simple utilization queries.
///
/// Captures one [`TickStateRow`] per tick and every request event; the
/// `*_fraction` helpers are the inputs to the KPI computation performed by
/// the surrounding layer.
#[derive(Default)]
pub struct StateHistory {
    states: Vec<TickStateRow>,
    events: Vec<RequestEventRow>,
}

impl StateHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn states(&self) -> &[TickStateRow] {
        &self.states
    }

    pub fn events(&self) -> &[RequestEventRow] {
        &self.events
    }

    /// Number of recorded ticks.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    fn fraction(&self, pred: impl Fn(&TickStateRow) -> bool) -> f64 {
        if self.states.is_empty() {
            return 0.0;
        }
        let hits = self.states.iter().filter(|row| pred(row)).count();
        hits as f64 / self.states.len() as f64
    }

    /// Fraction of recorded ticks spent travelling.
    pub fn moving_fraction(&self) -> f64 {
        self.fraction(|row| row.status.is_moving())
    }

    /// Fraction of recorded ticks with doors fully open.
    pub fn door_open_fraction(&self) -> f64 {
        self.fraction(|row| row.door_open)
    }

    /// Fraction of recorded ticks spent idle.
    pub fn idle_fraction(&self) -> f64 {
        self.fraction(|row| row.status == LiftStatus::Idle)
    }
}

impl EngineObserver for StateHistory {
    fn on_request_event(&mut self, event: &RequestEvent) {
        self.events.push(RequestEventRow::from(event));
    }

    fn on_tick_end(&mut self, tick: Tick, state: &LiftState) {
        self.states.push(TickStateRow::from_state(tick, state));
    }
}
