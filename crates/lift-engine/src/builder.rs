//! Engine construction.

use lift_core::{EngineConfig, Floor};
use lift_dispatch::{ControllerParams, IdleParkingMode, LiftController, Strategy, make_controller};

use crate::engine::LiftEngine;
use crate::error::{EngineError, EngineResult};

/// Builder wiring an [`EngineConfig`] to a dispatch strategy.
///
/// Every bound is checked at [`build`][Self::build]; nothing is clamped.
/// Callers with a hand-rolled controller use [`LiftEngine::new`] directly.
pub struct LiftEngineBuilder {
    config:   EngineConfig,
    strategy: Strategy,
    params:   ControllerParams,
}

impl LiftEngineBuilder {
    pub fn new() -> Self {
        Self {
            config:   EngineConfig::ten_floors(),
            strategy: Strategy::default(),
            params:   ControllerParams::default(),
        }
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Floor the naive controller parks at when idle long enough.
    pub fn home_floor(mut self, floor: Floor) -> Self {
        self.params.home_floor = floor;
        self
    }

    pub fn idle_timeout_ticks(mut self, ticks: u64) -> Self {
        self.params.idle_timeout_ticks = ticks;
        self
    }

    pub fn idle_parking(mut self, mode: IdleParkingMode) -> Self {
        self.params.idle_parking = mode;
        self
    }

    /// Validate the configuration and construct the engine.
    pub fn build(self) -> EngineResult<LiftEngine<Box<dyn LiftController>>> {
        self.config.validate()?;
        if !self.config.contains_floor(self.params.home_floor) {
            return Err(EngineError::FloorOutOfBounds {
                floor: self.params.home_floor,
                min:   self.config.min_floor,
                max:   self.config.max_floor,
            });
        }
        let controller = make_controller(self.strategy, &self.params);
        LiftEngine::new(self.config, controller)
    }
}

impl Default for LiftEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
