use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

use crate::components::{
    AirframeEntry, ComponentCatalog, EngineEntry, EquipmentEntry, Modifiers, StructureEntry,
    Supercharger, SuperchargerEntry, WingEntry,
};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("No bundled catalog named '{0}'")]
    MissingBundled(String),
    #[error("Invalid catalog: {0}")]
    ValidationError(String),
}

/// Catalog as it appears on disk, before supercharger profiles are resolved.
#[derive(Debug, Deserialize)]
pub struct RawCatalog {
    #[serde(default)]
    pub airframes: BTreeMap<String, AirframeEntry>,
    #[serde(default)]
    pub structures: BTreeMap<String, StructureEntry>,
    #[serde(default)]
    pub wings: BTreeMap<String, WingEntry>,
    #[serde(default)]
    pub engines: BTreeMap<String, EngineEntry>,
    #[serde(default)]
    pub superchargers: BTreeMap<String, RawSuperchargerEntry>,
    #[serde(default)]
    pub equipment: BTreeMap<String, EquipmentEntry>,
}

/// Supercharger row whose profile is implied by which optional fields are present.
#[derive(Debug, Deserialize)]
pub struct RawSuperchargerEntry {
    pub name: String,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub cost: f64,
    #[serde(default = "default_reliability")]
    pub reliability: f64,
    pub optimal_altitude: Option<f64>,
    pub optimal_altitudes: Option<Vec<f64>>,
    pub altitude_limit: Option<f64>,
    pub power_modifier: Option<f64>,
    #[serde(default)]
    pub modifiers: Modifiers,
}

pub(crate) fn default_reliability() -> f64 {
    1.0
}

impl RawSuperchargerEntry {
    /// Resolves the profile: a single rated altitude wins over a list of rated
    /// altitudes, which wins over an altitude limit. No field means no supercharger.
    pub fn profile(&self) -> Supercharger {
        let power_modifier = self.power_modifier.unwrap_or(1.0);
        match (
            self.optimal_altitude,
            &self.optimal_altitudes,
            self.altitude_limit,
        ) {
            (Some(optimal_altitude), _, _) => Supercharger::SingleAltitudeRated {
                optimal_altitude,
                power_modifier,
            },
            (None, Some(altitudes), _) if !altitudes.is_empty() => {
                Supercharger::MultiAltitudeRated {
                    optimal_altitudes: altitudes.clone(),
                    power_modifier,
                }
            }
            (None, Some(_), limit) => Supercharger::AltitudeLimited {
                altitude_limit: limit.unwrap_or(0.0),
                power_modifier,
            },
            (None, None, Some(altitude_limit)) => Supercharger::AltitudeLimited {
                altitude_limit,
                power_modifier,
            },
            (None, None, None) => Supercharger::NaturallyAspirated,
        }
    }
}

impl ComponentCatalog {
    pub fn from_raw(raw: RawCatalog) -> Result<Self, CatalogError> {
        let superchargers = raw
            .superchargers
            .into_iter()
            .map(|(key, entry)| {
                let profile = entry.profile();
                let resolved = SuperchargerEntry {
                    name: entry.name,
                    profile,
                    weight: entry.weight,
                    cost: entry.cost,
                    reliability: entry.reliability,
                    modifiers: entry.modifiers,
                };
                (key, resolved)
            })
            .collect();

        let catalog = ComponentCatalog {
            airframes: raw.airframes,
            structures: raw.structures,
            wings: raw.wings,
            engines: raw.engines,
            superchargers,
            equipment: raw.equipment,
        };
        catalog.validate()?;
        Ok(catalog)
    }
}
