use crate::components::Supercharger;
use crate::systems::aerodynamics::density_ratio;
use crate::utils::{DIMINISHING_RETURNS_PENALTY, DIMINISHING_RETURNS_THRESHOLD_HP};

/// Shaft power (HP) available at `altitude` from engines rated at `base_power` HP.
///
/// The supercharger profile sets the altitude behaviour; the diminishing-returns
/// curve is applied to the result in every case.
pub fn engine_power_at(base_power: f64, altitude: f64, supercharger: &Supercharger) -> f64 {
    let power = match supercharger {
        Supercharger::NaturallyAspirated => naturally_aspirated_power(base_power, altitude),
        Supercharger::SingleAltitudeRated {
            optimal_altitude,
            power_modifier,
        } => single_altitude_power(base_power, altitude, *optimal_altitude, *power_modifier),
        Supercharger::MultiAltitudeRated {
            optimal_altitudes,
            power_modifier,
        } => multi_altitude_power(base_power, altitude, optimal_altitudes, *power_modifier),
        Supercharger::AltitudeLimited {
            altitude_limit,
            power_modifier,
        } => altitude_limited_power(base_power, altitude, *altitude_limit, *power_modifier),
    };
    apply_diminishing_returns(power)
}

pub fn naturally_aspirated_power(base_power: f64, altitude: f64) -> f64 {
    base_power * density_ratio(altitude, 0.0)
}

/// Full rated power up to the rated altitude, density-limited above it.
pub fn single_altitude_power(
    base_power: f64,
    altitude: f64,
    optimal_altitude: f64,
    power_modifier: f64,
) -> f64 {
    if altitude <= optimal_altitude {
        base_power * power_modifier
    } else {
        altitude_limited_power(base_power, altitude, optimal_altitude, power_modifier)
    }
}

/// Full rated power at or below the nearest rated altitude, density-limited above it.
pub fn multi_altitude_power(
    base_power: f64,
    altitude: f64,
    optimal_altitudes: &[f64],
    power_modifier: f64,
) -> f64 {
    let Some(nearest) = nearest_altitude(altitude, optimal_altitudes) else {
        return altitude_limited_power(base_power, altitude, 0.0, power_modifier);
    };
    if altitude <= nearest {
        base_power * power_modifier
    } else {
        base_power * power_modifier * density_ratio(altitude, nearest)
    }
}

pub fn altitude_limited_power(
    base_power: f64,
    altitude: f64,
    altitude_limit: f64,
    power_modifier: f64,
) -> f64 {
    base_power * power_modifier * density_ratio(altitude, altitude_limit)
}

/// Closest rated altitude; on equal distance the earlier entry wins.
pub fn nearest_altitude(altitude: f64, candidates: &[f64]) -> Option<f64> {
    candidates.iter().copied().reduce(|best, candidate| {
        if (candidate - altitude).abs() < (best - altitude).abs() {
            candidate
        } else {
            best
        }
    })
}

/// Damps power above the threshold: `1000 + excess * max(0, 1 - 0.25 (excess/1000)²)`.
pub fn apply_diminishing_returns(power: f64) -> f64 {
    if power <= DIMINISHING_RETURNS_THRESHOLD_HP {
        return power;
    }
    let excess = power - DIMINISHING_RETURNS_THRESHOLD_HP;
    let ratio = excess / DIMINISHING_RETURNS_THRESHOLD_HP;
    let penalty_factor = (1.0 - ratio * ratio * DIMINISHING_RETURNS_PENALTY).max(0.0);
    DIMINISHING_RETURNS_THRESHOLD_HP + excess * penalty_factor
}
