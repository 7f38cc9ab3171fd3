use super::{rate_of_climb_at, PerformanceInputs};
use crate::components::SolverConfig;
use crate::utils::{NO_OXYGEN_CEILING, UNPRESSURIZED_CEILING};

/// First scanned altitude where the rate of climb drops below the threshold,
/// or the top of the scan when it never does.
pub fn service_ceiling(inputs: &PerformanceInputs, config: &SolverConfig) -> f64 {
    let step = config.ceiling_step();
    let steps = (config.ceiling_scan_max / step).round().max(0.0) as usize;

    (0..=steps)
        .map(|i| i as f64 * step)
        .find(|&altitude| rate_of_climb_at(altitude, inputs, config) < config.min_rate_of_climb)
        .unwrap_or(config.ceiling_scan_max)
}

/// Applies the ceiling modifier and the life-support caps to a physical ceiling.
pub fn apply_ceiling_policy(
    ceiling: f64,
    ceiling_mod: f64,
    pressurized_cabin: bool,
    oxygen_system: bool,
) -> f64 {
    let mut ceiling = ceiling * ceiling_mod;
    if !pressurized_cabin {
        ceiling = ceiling.min(UNPRESSURIZED_CEILING);
    }
    if !oxygen_system {
        ceiling = ceiling.min(NO_OXYGEN_CEILING);
    }
    ceiling
}
