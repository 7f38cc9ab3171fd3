mod catalog;
mod events;
mod loader;
mod snapshot;

pub use catalog::{
    AirframeEntry, ArmamentRole, CatalogEntry, CatalogSource, ComponentCatalog, ComponentId,
    ComponentKind, EngineEntry, EquipmentEntry, StructureEntry, SuperchargerEntry, WingEntry,
};
pub use events::DesignChanged;
pub use loader::{CatalogError, RawCatalog, RawSuperchargerEntry};
pub use snapshot::{DesignSnapshot, EquipmentSelection};
