use crate::components::RangeParameters;
use crate::utils::GRAVITY;

/// Fuel-free mass can never fall below this in the Breguet log term (kg).
const MIN_LANDING_WEIGHT: f64 = 1e-6;

impl RangeParameters {
    /// Lift-to-drag ratio at the simplified cruise condition:
    /// `CL = sqrt(cd_0 · π · AR · e)`, `CD = 2 · cd_0`.
    pub fn cruise_lift_to_drag(&self) -> f64 {
        if self.cd_0 <= 0.0 {
            return 0.0;
        }
        let induced_factor = std::f64::consts::PI * self.aspect_ratio * self.oswald_efficiency;
        let cl_opt = (self.cd_0 * induced_factor).max(0.0).sqrt();
        let cd_opt = 2.0 * self.cd_0;
        cl_opt / cd_opt
    }

    /// `η / (g · bsfc) · L/D`, the distance flown per unit of `ln(W0 / W1)` (m).
    pub fn range_factor(&self) -> f64 {
        if self.bsfc <= 0.0 {
            return 0.0;
        }
        self.prop_efficiency / (GRAVITY * self.bsfc) * self.cruise_lift_to_drag()
    }
}

/// Unmodified Breguet range (m).
pub fn breguet_range_m(params: &RangeParameters) -> f64 {
    if params.gross_weight <= 0.0 || params.fuel_weight <= 0.0 {
        return 0.0;
    }
    let landing_weight = (params.gross_weight - params.fuel_weight).max(MIN_LANDING_WEIGHT);
    params.range_factor() * (params.gross_weight / landing_weight).ln()
}

/// Range in km after the range modifier and the balance divisor, capped at `cap_km`.
pub fn estimate_range_km(params: &RangeParameters, balance_divisor: f64, cap_km: f64) -> f64 {
    let range_km = breguet_range_m(params) * params.range_mod / balance_divisor.max(1e-9) / 1000.0;
    range_km.min(cap_km).max(0.0)
}

/// Fuel mass (kg) needed so that [`estimate_range_km`] reaches `target_km`
/// for a design whose mass without fuel is `dry_weight`.
///
/// `params.gross_weight` and `params.fuel_weight` are ignored. The result never
/// exceeds what `max_fuel_fraction` of the gross weight allows.
pub fn fuel_for_range(
    dry_weight: f64,
    target_km: f64,
    params: &RangeParameters,
    balance_divisor: f64,
    max_fuel_fraction: f64,
) -> f64 {
    let effective_factor = params.range_factor() * params.range_mod;
    if dry_weight <= 0.0 || target_km <= 0.0 || effective_factor <= 0.0 {
        return 0.0;
    }

    let fraction = max_fuel_fraction.clamp(0.0, 0.95);
    let fuel_cap = dry_weight * fraction / (1.0 - fraction);

    let exponent = target_km * 1000.0 * balance_divisor / effective_factor;
    (dry_weight * exponent.exp_m1()).min(fuel_cap)
}
