use serde::{Deserialize, Serialize};

/// Forced-induction profile of a powerplant. Exactly one applies per evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Supercharger {
    /// Power follows the density ratio to sea level.
    NaturallyAspirated,
    /// Holds rated power up to a single rated altitude (m).
    SingleAltitudeRated {
        optimal_altitude: f64,
        power_modifier: f64,
    },
    /// Multi-speed unit holding rated power below the nearest rated altitude (m).
    MultiAltitudeRated {
        optimal_altitudes: Vec<f64>,
        power_modifier: f64,
    },
    /// Power follows the density ratio to a reference altitude (m).
    AltitudeLimited {
        altitude_limit: f64,
        power_modifier: f64,
    },
}

impl Default for Supercharger {
    fn default() -> Self {
        Supercharger::NaturallyAspirated
    }
}

impl Supercharger {
    pub fn power_modifier(&self) -> f64 {
        match self {
            Supercharger::NaturallyAspirated => 1.0,
            Supercharger::SingleAltitudeRated { power_modifier, .. }
            | Supercharger::MultiAltitudeRated { power_modifier, .. }
            | Supercharger::AltitudeLimited { power_modifier, .. } => *power_modifier,
        }
    }
}
