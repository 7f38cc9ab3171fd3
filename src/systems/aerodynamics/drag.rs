use crate::components::{AerodynamicProfile, AircraftCategory};
use crate::utils::{
    COMPRESSIBILITY_COEFFICIENT, COMPRESSIBILITY_ONSET_KMH, COMPRESSIBILITY_SCALE_KMH, GRAVITY,
    MS_TO_KMH,
};

const FIGHTER_DRAG_ONSET_KMH: f64 = 500.0;
const FIGHTER_DRAG_COEFFICIENT: f64 = 0.01;
const CLOSE_AIR_SUPPORT_DRAG_ALTITUDE: f64 = 3000.0;
const CLOSE_AIR_SUPPORT_DRAG_FACTOR: f64 = 1.15;
const BOMBER_REFERENCE_WEIGHT: f64 = 15000.0;
const BOMBER_DRAG_COEFFICIENT: f64 = 0.004;
const SEAPLANE_DRAG_FACTOR: f64 = 1.15;
const AIRSHIP_PINNED_SPEED_KMH: f64 = 130.0;
const AIRSHIP_DRAG_FACTOR: f64 = 5.0;

/// Category-specific drag: an additive coefficient and a multiplier on the total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryDrag {
    pub additive: f64,
    pub multiplier: f64,
}

impl Default for CategoryDrag {
    fn default() -> Self {
        Self {
            additive: 0.0,
            multiplier: 1.0,
        }
    }
}

/// Coefficients and forces at one flight condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragBreakdown {
    pub lift_coefficient: f64,
    pub induced_drag_coefficient: f64,
    pub drag_coefficient: f64,
    /// Drag force (N).
    pub drag: f64,
}

pub fn lift_coefficient(weight: f64, density: f64, airspeed: f64, wing_area: f64) -> f64 {
    weight * GRAVITY / (0.5 * density * airspeed * airspeed * wing_area)
}

pub fn induced_drag_coefficient(lift_coefficient: f64, aero: &AerodynamicProfile) -> f64 {
    lift_coefficient * lift_coefficient / aero.induced_drag_factor()
}

/// Transonic penalty applied to every category.
pub fn compressibility_drag(speed_kmh: f64) -> f64 {
    let excess = (speed_kmh - COMPRESSIBILITY_ONSET_KMH).max(0.0) / COMPRESSIBILITY_SCALE_KMH;
    COMPRESSIBILITY_COEFFICIENT * excess * excess
}

pub fn category_drag(
    category: AircraftCategory,
    speed_kmh: f64,
    altitude: f64,
    weight: f64,
) -> CategoryDrag {
    match category {
        AircraftCategory::Fighter if speed_kmh > FIGHTER_DRAG_ONSET_KMH => {
            let excess = (speed_kmh - FIGHTER_DRAG_ONSET_KMH) / 100.0;
            CategoryDrag {
                additive: FIGHTER_DRAG_COEFFICIENT * excess * excess,
                ..Default::default()
            }
        }
        AircraftCategory::CloseAirSupport if altitude > CLOSE_AIR_SUPPORT_DRAG_ALTITUDE => {
            CategoryDrag {
                multiplier: CLOSE_AIR_SUPPORT_DRAG_FACTOR,
                ..Default::default()
            }
        }
        AircraftCategory::Bomber => CategoryDrag {
            additive: BOMBER_DRAG_COEFFICIENT * weight / BOMBER_REFERENCE_WEIGHT,
            ..Default::default()
        },
        AircraftCategory::Seaplane => CategoryDrag {
            multiplier: SEAPLANE_DRAG_FACTOR,
            ..Default::default()
        },
        AircraftCategory::Airship => CategoryDrag {
            multiplier: AIRSHIP_DRAG_FACTOR,
            ..Default::default()
        },
        _ => CategoryDrag::default(),
    }
}

/// Speed seen by the speed-dependent drag terms. Airships are pinned.
fn drag_reference_speed_kmh(category: AircraftCategory, airspeed: f64) -> f64 {
    match category {
        AircraftCategory::Airship => AIRSHIP_PINNED_SPEED_KMH,
        _ => airspeed * MS_TO_KMH,
    }
}

/// Full drag model used by the equilibrium solver, category terms included.
pub fn drag_at(
    aero: &AerodynamicProfile,
    density: f64,
    airspeed: f64,
    altitude: f64,
    weight: f64,
) -> DragBreakdown {
    let speed_kmh = drag_reference_speed_kmh(aero.category, airspeed);
    let extra = category_drag(aero.category, speed_kmh, altitude, weight);
    evaluate(aero, density, airspeed, weight, speed_kmh, extra)
}

/// Drag model without the category terms, used for the climb estimate.
pub fn clean_drag_at(
    aero: &AerodynamicProfile,
    density: f64,
    airspeed: f64,
    weight: f64,
) -> DragBreakdown {
    let speed_kmh = airspeed * MS_TO_KMH;
    evaluate(aero, density, airspeed, weight, speed_kmh, CategoryDrag::default())
}

fn evaluate(
    aero: &AerodynamicProfile,
    density: f64,
    airspeed: f64,
    weight: f64,
    speed_kmh: f64,
    extra: CategoryDrag,
) -> DragBreakdown {
    let cl = lift_coefficient(weight, density, airspeed, aero.wing_area);
    let cdi = induced_drag_coefficient(cl, aero);
    let cd = (aero.cd_0 * aero.drag_mod + cdi + extra.additive + compressibility_drag(speed_kmh))
        * extra.multiplier;
    let drag = 0.5 * density * airspeed * airspeed * aero.wing_area * cd;

    DragBreakdown {
        lift_coefficient: cl,
        induced_drag_coefficient: cdi,
        drag_coefficient: cd,
        drag,
    }
}
