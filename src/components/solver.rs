use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::*;

/// Strategy used to locate the thrust/drag balance inside the scan band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum SpeedSearch {
    /// Every whole m/s in the band is evaluated.
    LinearScan,
    /// Golden-section search on |thrust - drag|, snapped to the whole-m/s grid.
    GoldenSection { tolerance: f64, max_iters: u64 },
}

impl Default for SpeedSearch {
    fn default() -> Self {
        SpeedSearch::LinearScan
    }
}

/// Tunables for the performance solvers and the design evaluator.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub speed_search: SpeedSearch,
    /// Equilibrium scan band (m/s).
    pub speed_range: (f64, f64),
    pub speed_step: f64,
    /// Fixed climb speed (m/s).
    pub climb_speed: f64,
    /// Rate of climb defining the service ceiling (m/s).
    pub min_rate_of_climb: f64,
    pub ceiling_scan_max: f64,
    pub ceiling_scan_step: f64,
    /// Altitude of the second speed evaluation and of the turn estimate (m).
    pub reference_altitude: f64,
    /// Divides the raw Breguet range.
    pub range_balance_divisor: f64,
    pub turn_time_bounds: (f64, f64),
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            speed_search: SpeedSearch::default(),
            speed_range: (MIN_SCAN_SPEED, MAX_SCAN_SPEED),
            speed_step: SCAN_STEP,
            climb_speed: CLIMB_SPEED,
            min_rate_of_climb: MIN_RATE_OF_CLIMB,
            ceiling_scan_max: CEILING_SCAN_MAX,
            ceiling_scan_step: CEILING_SCAN_STEP,
            reference_altitude: 5000.0,
            range_balance_divisor: 2.0,
            turn_time_bounds: (MIN_TURN_TIME, MAX_TURN_TIME),
        }
    }
}

impl SolverConfig {
    /// Equilibrium grid spacing, falling back to the default for non-positive values.
    pub fn scan_step(&self) -> f64 {
        usable_step(self.speed_step, SCAN_STEP)
    }

    pub fn ceiling_step(&self) -> f64 {
        usable_step(self.ceiling_scan_step, CEILING_SCAN_STEP)
    }

    pub fn golden_section() -> Self {
        Self {
            speed_search: SpeedSearch::GoldenSection {
                tolerance: 1e-4,
                max_iters: 200,
            },
            ..Default::default()
        }
    }
}

/// `step` when it can advance a scan, otherwise `fallback`.
pub fn usable_step(step: f64, fallback: f64) -> f64 {
    if step.is_finite() && step > 0.0 {
        step
    } else {
        fallback
    }
}
