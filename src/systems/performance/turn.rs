use crate::components::{AerodynamicProfile, TurnPerformance};
use crate::utils::{GRAVITY, MIN_LOAD_FACTOR_TERM, TURN_SPEED_FACTOR};

/// Sustained level turn flown at a fraction of the cruise equilibrium speed.
///
/// The load factor is the lower of the structural G-limit and what `cl_max`
/// can generate at that speed. Turn time is divided by the maneuverability
/// modifier and clamped to `time_bounds`.
pub fn turn_performance(
    equilibrium_speed: f64,
    density: f64,
    weight: f64,
    aero: &AerodynamicProfile,
    time_bounds: (f64, f64),
) -> TurnPerformance {
    let speed_ms = (equilibrium_speed * TURN_SPEED_FACTOR).max(1.0);

    let wing_loading = (weight * GRAVITY / aero.wing_area.max(1e-6)).max(1e-6);
    let lift_limited = 0.5 * density * speed_ms * speed_ms * aero.cl_max / wing_loading;
    let load_factor = aero.limits.g_limit.min(lift_limited);

    let bank_term = (load_factor * load_factor - 1.0).max(MIN_LOAD_FACTOR_TERM).sqrt();
    let radius = speed_ms * speed_ms / (GRAVITY * bank_term);

    let raw_time = 2.0 * std::f64::consts::PI * radius / speed_ms;
    let (min_time, max_time) = time_bounds;
    let turn_time = (raw_time / aero.maneuverability_mod.max(1e-9)).clamp(min_time, max_time);

    TurnPerformance {
        speed_ms,
        load_factor,
        radius,
        turn_time,
    }
}
