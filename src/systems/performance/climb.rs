use super::PerformanceInputs;
use crate::components::SolverConfig;
use crate::systems::aerodynamics::{air_properties_at, clean_drag_at};
use crate::systems::propulsion::engine_power_at;
use crate::utils::{GRAVITY, HP_TO_WATTS};

/// Steady rate of climb (m/s) at the configured climb speed.
///
/// Excess power over the clean drag polar divided by weight. Never negative:
/// a design that cannot climb reports zero.
pub fn rate_of_climb_at(altitude: f64, inputs: &PerformanceInputs, config: &SolverConfig) -> f64 {
    let air = air_properties_at(altitude);
    let power = engine_power_at(inputs.power_hp, altitude, inputs.supercharger)
        * inputs.aero.power_mod
        * HP_TO_WATTS;

    let airspeed = config.climb_speed;
    let thrust = power * inputs.prop_efficiency / airspeed;
    let drag = clean_drag_at(inputs.aero, air.density, airspeed, inputs.weight).drag;

    let excess_power = (thrust - drag) * airspeed;
    (excess_power / (inputs.weight * GRAVITY)).max(0.0)
}
