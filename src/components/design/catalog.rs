use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use include_dir::{include_dir, Dir};
use serde::{Deserialize, Serialize};

use super::loader::{default_reliability, CatalogError, RawCatalog};
use crate::components::{AircraftCategory, Modifiers, PerformanceLimits, Supercharger};

static BUNDLED_CATALOGS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets/catalogs");

/// Component categories a design is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Airframe,
    Structure,
    Wing,
    Engine,
    Supercharger,
    Equipment,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentKind::Airframe => "airframe",
            ComponentKind::Structure => "structure",
            ComponentKind::Wing => "wing",
            ComponentKind::Engine => "engine",
            ComponentKind::Supercharger => "supercharger",
            ComponentKind::Equipment => "equipment",
        };
        f.write_str(name)
    }
}

/// Global identifier of a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentId {
    pub kind: ComponentKind,
    pub key: String,
}

impl ComponentId {
    pub fn new(kind: ComponentKind, key: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
        }
    }
}

/// Base aircraft type: fixes the category, the fuselage and the performance envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirframeEntry {
    pub name: String,
    pub category: AircraftCategory,
    /// Empty fuselage mass (kg).
    pub weight: f64,
    #[serde(default)]
    pub cost: f64,
    #[serde(default = "default_reliability")]
    pub reliability: f64,
    pub cd_0: f64,
    pub cl_max: f64,
    /// Largest share of gross weight that may be fuel.
    #[serde(default = "default_max_fuel_fraction")]
    pub max_fuel_fraction: f64,
    pub limits: PerformanceLimits,
    #[serde(default)]
    pub modifiers: Modifiers,
}

fn default_max_fuel_fraction() -> f64 {
    0.25
}

/// Construction method; scales the airframe mass and cost and sets the G limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureEntry {
    pub name: String,
    #[serde(default = "neutral_factor")]
    pub weight_factor: f64,
    #[serde(default = "neutral_factor")]
    pub cost_factor: f64,
    #[serde(default = "default_reliability")]
    pub reliability: f64,
    pub g_limit: f64,
    #[serde(default)]
    pub modifiers: Modifiers,
}

fn neutral_factor() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WingEntry {
    pub name: String,
    /// Wing reference area (m²).
    pub wing_area: f64,
    pub aspect_ratio: f64,
    pub oswald_efficiency: f64,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub cost: f64,
    #[serde(default = "default_reliability")]
    pub reliability: f64,
    #[serde(default)]
    pub modifiers: Modifiers,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineEntry {
    pub name: String,
    /// Sea-level rated power of one engine (HP).
    pub power: f64,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub cost: f64,
    #[serde(default = "default_reliability")]
    pub reliability: f64,
    /// Brake-specific fuel consumption (kg/kWh).
    #[serde(default = "default_bsfc")]
    pub bsfc: f64,
    #[serde(default = "default_prop_efficiency")]
    pub prop_efficiency: f64,
    #[serde(default)]
    pub modifiers: Modifiers,
}

fn default_bsfc() -> f64 {
    0.28
}

fn default_prop_efficiency() -> f64 {
    0.8
}

impl EngineEntry {
    /// BSFC in SI units (kg/(W·s)).
    pub fn bsfc_si(&self) -> f64 {
        self.bsfc / 3.6e6
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuperchargerEntry {
    pub name: String,
    pub profile: Supercharger,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub cost: f64,
    #[serde(default = "default_reliability")]
    pub reliability: f64,
    #[serde(default)]
    pub modifiers: Modifiers,
}

/// Whether a piece of equipment is reported as offensive or defensive armament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmamentRole {
    Offensive,
    Defensive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentEntry {
    pub name: String,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub cost: f64,
    #[serde(default = "default_reliability")]
    pub reliability: f64,
    #[serde(default)]
    pub armament: Option<ArmamentRole>,
    #[serde(default)]
    pub pressurized_cabin: bool,
    #[serde(default)]
    pub oxygen_system: bool,
    #[serde(default)]
    pub modifiers: Modifiers,
}

/// A borrowed catalog row of any category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CatalogEntry<'a> {
    Airframe(&'a AirframeEntry),
    Structure(&'a StructureEntry),
    Wing(&'a WingEntry),
    Engine(&'a EngineEntry),
    Supercharger(&'a SuperchargerEntry),
    Equipment(&'a EquipmentEntry),
}

/// Where a catalog is read from.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// A catalog compiled into the crate, by file stem.
    Bundled(String),
    /// A YAML catalog on disk.
    File(PathBuf),
}

/// Typed component tables keyed by string identifiers.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ComponentCatalog {
    pub airframes: BTreeMap<String, AirframeEntry>,
    pub structures: BTreeMap<String, StructureEntry>,
    pub wings: BTreeMap<String, WingEntry>,
    pub engines: BTreeMap<String, EngineEntry>,
    pub superchargers: BTreeMap<String, SuperchargerEntry>,
    pub equipment: BTreeMap<String, EquipmentEntry>,
}

impl ComponentCatalog {
    /// Loads a catalog from the given source.
    pub fn new(source: CatalogSource) -> Result<Self, CatalogError> {
        match source {
            CatalogSource::Bundled(name) => Self::from_bundled(&name),
            CatalogSource::File(path) => Self::from_file(path),
        }
    }

    /// The catalog shipped with the crate.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::from_bundled("standard")
    }

    fn from_bundled(name: &str) -> Result<Self, CatalogError> {
        let file_name = format!("{name}.yaml");
        let contents = BUNDLED_CATALOGS
            .get_file(&file_name)
            .and_then(|file| file.contents_utf8())
            .ok_or_else(|| CatalogError::MissingBundled(name.to_string()))?;
        let catalog = Self::from_yaml(contents)?;
        info!(
            "Loaded bundled catalog '{}' ({} airframes, {} engines)",
            name,
            catalog.airframes.len(),
            catalog.engines.len()
        );
        Ok(catalog)
    }

    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file_contents = std::fs::read_to_string(&path)?;
        let catalog = Self::from_yaml(&file_contents)?;
        info!("Loaded catalog from {}", path.as_ref().display());
        Ok(catalog)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_yaml::from_str(contents)?;
        Self::from_raw(raw)
    }

    pub fn airframe(&self, key: &str) -> Option<&AirframeEntry> {
        self.airframes.get(key)
    }

    pub fn structure(&self, key: &str) -> Option<&StructureEntry> {
        self.structures.get(key)
    }

    pub fn wing(&self, key: &str) -> Option<&WingEntry> {
        self.wings.get(key)
    }

    pub fn engine(&self, key: &str) -> Option<&EngineEntry> {
        self.engines.get(key)
    }

    pub fn supercharger(&self, key: &str) -> Option<&SuperchargerEntry> {
        self.superchargers.get(key)
    }

    pub fn equipment_item(&self, key: &str) -> Option<&EquipmentEntry> {
        self.equipment.get(key)
    }

    /// Looks up any entry by its global identifier.
    pub fn lookup(&self, id: &ComponentId) -> Option<CatalogEntry<'_>> {
        let key = id.key.as_str();
        match id.kind {
            ComponentKind::Airframe => self.airframe(key).map(CatalogEntry::Airframe),
            ComponentKind::Structure => self.structure(key).map(CatalogEntry::Structure),
            ComponentKind::Wing => self.wing(key).map(CatalogEntry::Wing),
            ComponentKind::Engine => self.engine(key).map(CatalogEntry::Engine),
            ComponentKind::Supercharger => {
                self.supercharger(key).map(CatalogEntry::Supercharger)
            }
            ComponentKind::Equipment => {
                self.equipment_item(key).map(CatalogEntry::Equipment)
            }
        }
    }

    /// Checks physical plausibility of every row.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (key, e) in &self.airframes {
            check_common(ComponentKind::Airframe, key, e.weight, e.cost, e.reliability)?;
            if e.cd_0 <= 0.0 || e.cl_max <= 0.0 {
                return Err(invalid(
                    ComponentKind::Airframe,
                    key,
                    "cd_0 and cl_max must be positive",
                ));
            }
            if !(0.0..1.0).contains(&e.max_fuel_fraction) {
                return Err(invalid(
                    ComponentKind::Airframe,
                    key,
                    "max_fuel_fraction must be in [0, 1)",
                ));
            }
            let limits = &e.limits;
            if limits.max_speed <= 0.0 || limits.max_range <= 0.0 || limits.max_ceiling <= 0.0 {
                return Err(invalid(ComponentKind::Airframe, key, "limits must be positive"));
            }
        }
        for (key, e) in &self.structures {
            check_common(ComponentKind::Structure, key, 0.0, 0.0, e.reliability)?;
            if e.weight_factor <= 0.0 || e.cost_factor < 0.0 || e.g_limit < 1.0 {
                return Err(invalid(
                    ComponentKind::Structure,
                    key,
                    "factors must be positive and g_limit >= 1",
                ));
            }
        }
        for (key, e) in &self.wings {
            check_common(ComponentKind::Wing, key, e.weight, e.cost, e.reliability)?;
            if e.wing_area <= 0.0 || e.aspect_ratio <= 0.0 || e.oswald_efficiency <= 0.0 {
                return Err(invalid(
                    ComponentKind::Wing,
                    key,
                    "area, aspect ratio and efficiency must be positive",
                ));
            }
        }
        for (key, e) in &self.engines {
            check_common(ComponentKind::Engine, key, e.weight, e.cost, e.reliability)?;
            let efficiency_ok = e.prop_efficiency > 0.0 && e.prop_efficiency <= 1.0;
            if e.power <= 0.0 || e.bsfc <= 0.0 || !efficiency_ok {
                return Err(invalid(
                    ComponentKind::Engine,
                    key,
                    "power, bsfc and propeller efficiency out of range",
                ));
            }
        }
        for (key, e) in &self.superchargers {
            check_common(ComponentKind::Supercharger, key, e.weight, e.cost, e.reliability)?;
            if e.profile.power_modifier() <= 0.0 {
                return Err(invalid(
                    ComponentKind::Supercharger,
                    key,
                    "power_modifier must be positive",
                ));
            }
        }
        for (key, e) in &self.equipment {
            check_common(ComponentKind::Equipment, key, e.weight, e.cost, e.reliability)?;
        }
        Ok(())
    }
}

fn invalid(kind: ComponentKind, key: &str, reason: &str) -> CatalogError {
    CatalogError::ValidationError(format!("{kind} '{key}': {reason}"))
}

fn check_common(
    kind: ComponentKind,
    key: &str,
    weight: f64,
    cost: f64,
    reliability: f64,
) -> Result<(), CatalogError> {
    if weight < 0.0 || cost < 0.0 {
        return Err(invalid(kind, key, "weight and cost must be non-negative"));
    }
    if reliability <= 0.0 || reliability > 1.0 {
        return Err(invalid(kind, key, "reliability must be in (0, 1]"));
    }
    Ok(())
}
