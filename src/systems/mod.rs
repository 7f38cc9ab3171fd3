pub mod aerodynamics;
mod design;
mod evaluator;
pub mod performance;
pub mod propulsion;

pub use aerodynamics::{air_properties_at, density_ratio, drag_at};
pub use design::{debounce_design_changes, evaluate_pending_design};
pub use evaluator::evaluate_design;
pub use performance::{
    estimate_range_km, performance_at, rate_of_climb_at, service_ceiling, turn_performance,
    PerformanceInputs,
};
pub use propulsion::engine_power_at;
