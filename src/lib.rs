//! Aircraft design performance calculator.
//!
//! Resolves a [`DesignSnapshot`](components::DesignSnapshot) against a
//! [`ComponentCatalog`](components::ComponentCatalog) and derives speed, climb,
//! ceiling, range and turn figures. The numerics are plain functions in
//! [`systems`]; [`plugins::DesignEvaluatorPlugin`] drives them from bevy events.

pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{ComponentCatalog, DesignSnapshot, PerformanceRecord, SolverConfig};
pub use systems::evaluate_design;
pub use utils::{DesignError, Result};
