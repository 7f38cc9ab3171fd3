use serde::{Deserialize, Serialize};

/// Thrust/drag balance found by the equilibrium speed solver at one altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumResult {
    pub speed_kmh: f64,
    pub speed_ms: f64,
    /// Drag force at the equilibrium speed (N).
    pub drag: f64,
    /// Propeller thrust at the equilibrium speed (N).
    pub thrust: f64,
    /// Always zero here; see `rate_of_climb_at`.
    pub rate_of_climb: f64,
}

/// Inputs to the Breguet range estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeParameters {
    pub prop_efficiency: f64,
    /// Brake-specific fuel consumption (kg/(W·s)).
    pub bsfc: f64,
    pub cd_0: f64,
    pub aspect_ratio: f64,
    pub oswald_efficiency: f64,
    pub gross_weight: f64,
    pub fuel_weight: f64,
    pub range_mod: f64,
}

/// Sustained turn at the turn reference speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurnPerformance {
    pub speed_ms: f64,
    pub load_factor: f64,
    /// Turn radius (m).
    pub radius: f64,
    /// Time for a full 360° turn (s), after the maneuverability modifier and clamping.
    pub turn_time: f64,
}

/// Mass breakdown of an evaluated design (kg).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightBreakdown {
    pub empty: f64,
    pub fuel: f64,
    pub gross: f64,
    /// Empty weight plus half the fuel load; used by the speed and climb solvers.
    pub combat: f64,
}

/// Aggregate output of a design evaluation. Owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub name: String,
    pub speed_sea_level_kmh: f64,
    pub speed_at_altitude_kmh: f64,
    pub reference_altitude: f64,
    /// Sea-level rate of climb (m/s).
    pub rate_of_climb: f64,
    /// Service ceiling after modifiers and policy caps (m).
    pub service_ceiling: f64,
    pub range_km: f64,
    /// Full-circle turn time (s).
    pub turn_time: f64,
    pub turn: TurnPerformance,
    pub reliability: f64,
    pub cost: f64,
    pub weight: WeightBreakdown,
    pub total_power_hp: f64,
    pub sea_level: EquilibriumResult,
    pub at_altitude: EquilibriumResult,
    pub range_parameters: RangeParameters,
    pub offensive_armament: Vec<String>,
    pub defensive_armament: Vec<String>,
}
