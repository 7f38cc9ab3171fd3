use bevy::prelude::*;

use super::search::golden_section_speed;
use super::PerformanceInputs;
use crate::components::{usable_step, EquilibriumResult, SolverConfig, SpeedSearch};
use crate::systems::aerodynamics::{air_properties_at, drag_at};
use crate::systems::propulsion::engine_power_at;
use crate::utils::{
    HP_TO_WATTS, MS_TO_KMH, RESULT_THRUST_FLOOR, SCAN_STEP, SCAN_THRUST_FLOOR,
    SPEED_GOVERNOR_GAIN, SPEED_GOVERNOR_ONSET,
};

/// Thrust/drag balance of one design at one altitude, as a function of airspeed.
#[derive(Debug, Clone, Copy)]
pub struct ThrustDragBalance<'a> {
    pub inputs: &'a PerformanceInputs<'a>,
    pub altitude: f64,
    pub density: f64,
    /// Shaft power after altitude effects and the power modifier (W).
    pub power: f64,
}

impl<'a> ThrustDragBalance<'a> {
    pub fn new(altitude: f64, inputs: &'a PerformanceInputs<'a>) -> Self {
        let air = air_properties_at(altitude);
        let shaft_power = engine_power_at(inputs.power_hp, altitude, inputs.supercharger);
        Self {
            inputs,
            altitude,
            density: air.density,
            power: shaft_power * inputs.aero.power_mod * HP_TO_WATTS,
        }
    }

    pub fn thrust(&self, airspeed: f64, floor: f64) -> f64 {
        self.power * self.inputs.prop_efficiency / airspeed.max(floor)
    }

    pub fn drag(&self, airspeed: f64) -> f64 {
        drag_at(
            self.inputs.aero,
            self.density,
            airspeed,
            self.altitude,
            self.inputs.weight,
        )
        .drag
    }

    /// `|thrust - drag|` as seen by the speed search.
    pub fn imbalance(&self, airspeed: f64) -> f64 {
        (self.thrust(airspeed, SCAN_THRUST_FLOOR) - self.drag(airspeed)).abs()
    }

    /// Evaluates every grid point of the band and keeps the first smallest imbalance.
    ///
    /// A step that cannot advance the scan is replaced by the default grid spacing.
    pub fn linear_scan(&self, range: (f64, f64), step: f64) -> f64 {
        let (low, high) = range;
        let step = usable_step(step, SCAN_STEP);
        let steps = ((high - low) / step).round().max(0.0) as usize;
        let mut best_speed = low;
        let mut best_imbalance = f64::INFINITY;

        for i in 0..=steps {
            let speed = low + i as f64 * step;
            let imbalance = self.imbalance(speed);
            if imbalance < best_imbalance {
                best_imbalance = imbalance;
                best_speed = speed;
            }
        }
        best_speed
    }
}

/// Cruise equilibrium at `altitude`: the airspeed inside the configured band
/// where propeller thrust best matches drag.
///
/// The search is best-effort. When no balance exists inside the band the
/// closest candidate is returned rather than an error.
pub fn performance_at(
    altitude: f64,
    inputs: &PerformanceInputs,
    config: &SolverConfig,
) -> EquilibriumResult {
    let balance = ThrustDragBalance::new(altitude, inputs);
    let (low, high) = config.speed_range;

    let speed = match config.speed_search {
        SpeedSearch::LinearScan => balance.linear_scan(config.speed_range, config.scan_step()),
        SpeedSearch::GoldenSection {
            tolerance,
            max_iters,
        } => golden_section_speed(&balance, config, tolerance, max_iters).unwrap_or_else(|err| {
            warn!("Golden-section speed search failed ({err}), using linear scan");
            balance.linear_scan(config.speed_range, config.scan_step())
        }),
    };

    let drag = balance.drag(speed);
    let thrust = balance.thrust(speed, RESULT_THRUST_FLOOR);

    let governed_kmh = govern_speed(speed * MS_TO_KMH, inputs.aero.limits.max_speed);
    let speed_ms = (governed_kmh / MS_TO_KMH).clamp(low, high);

    debug!(
        "Equilibrium at {:.0} m: {:.1} m/s (thrust {:.0} N, drag {:.0} N)",
        altitude, speed_ms, thrust, drag
    );

    EquilibriumResult {
        speed_kmh: speed_ms * MS_TO_KMH,
        speed_ms,
        drag,
        thrust,
        rate_of_climb: 0.0,
    }
}

/// Smoothly pulls speeds above 90% of `max_speed` back down by half the overshoot ratio.
pub fn govern_speed(speed_kmh: f64, max_speed: f64) -> f64 {
    let onset = SPEED_GOVERNOR_ONSET * max_speed;
    if onset <= 0.0 || speed_kmh <= onset {
        return speed_kmh;
    }
    let overshoot = speed_kmh / onset - 1.0;
    speed_kmh * (1.0 - overshoot * SPEED_GOVERNOR_GAIN).max(0.0)
}
