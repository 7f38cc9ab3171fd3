pub mod aerodynamics;
pub mod air_data;
pub mod design;
pub mod performance;
pub mod propulsion;
pub mod solver;

pub use aerodynamics::{AerodynamicProfile, AircraftCategory, Modifiers, PerformanceLimits};
pub use air_data::AirProperties;
pub use design::{
    AirframeEntry, ArmamentRole, CatalogEntry, CatalogError, CatalogSource, ComponentCatalog,
    ComponentId, ComponentKind, DesignChanged, DesignSnapshot, EngineEntry, EquipmentEntry,
    EquipmentSelection, RawCatalog, RawSuperchargerEntry, StructureEntry, SuperchargerEntry,
    WingEntry,
};
pub use performance::{
    EquilibriumResult, PerformanceRecord, RangeParameters, TurnPerformance, WeightBreakdown,
};
pub use propulsion::Supercharger;
pub use solver::{usable_step, SolverConfig, SpeedSearch};
