//! Strategy selection.

use std::fmt;

use lift_core::Floor;

use crate::controller::LiftController;
use crate::naive::{IdleParkingMode, NaiveLiftController};
use crate::scan::DirectionalScanLiftController;

/// Which dispatch algorithm to run.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Greedy nearest-request routing with optional idle parking.
    #[default]
    Naive,
    /// SCAN/LOOK sweep with direction-matched hall-call servicing.
    DirectionalScan,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Naive => "naive",
            Strategy::DirectionalScan => "directional_scan",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Controller tuning shared across strategies.
///
/// The scan controller ignores the parking fields; they only shape the
/// naive controller's idle behavior.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerParams {
    pub home_floor:         Floor,
    pub idle_timeout_ticks: u64,
    pub idle_parking:       IdleParkingMode,
}

impl Default for ControllerParams {
    fn default() -> Self {
        Self {
            home_floor:         0,
            idle_timeout_ticks: 10,
            idle_parking:       IdleParkingMode::StayPut,
        }
    }
}

/// Construct a boxed controller for `strategy`.
pub fn make_controller(strategy: Strategy, params: &ControllerParams) -> Box<dyn LiftController> {
    match strategy {
        Strategy::Naive => Box::new(NaiveLiftController::new(
            params.home_floor,
            params.idle_timeout_ticks,
            params.idle_parking,
        )),
        Strategy::DirectionalScan => Box::new(DirectionalScanLiftController::new()),
    }
}
