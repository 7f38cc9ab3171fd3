mod ceiling;
mod climb;
mod equilibrium;
mod range;
mod search;
mod turn;

pub use ceiling::{apply_ceiling_policy, service_ceiling};
pub use climb::rate_of_climb_at;
pub use equilibrium::{govern_speed, performance_at, ThrustDragBalance};
pub use range::{breguet_range_m, estimate_range_km, fuel_for_range};
pub use search::golden_section_speed;
pub use turn::turn_performance;

use crate::components::{AerodynamicProfile, Supercharger};

/// Everything the speed, climb and ceiling solvers need to know about a design.
#[derive(Debug, Clone, Copy)]
pub struct PerformanceInputs<'a> {
    /// Mass used for lift (kg).
    pub weight: f64,
    /// Total installed power at sea level, all engines (HP).
    pub power_hp: f64,
    pub prop_efficiency: f64,
    pub aero: &'a AerodynamicProfile,
    pub supercharger: &'a Supercharger,
}
