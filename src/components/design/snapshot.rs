use serde::{Deserialize, Serialize};

use crate::components::{ComponentId, ComponentKind};
use crate::utils::Result;

/// One selected piece of equipment and how many are fitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentSelection {
    pub key: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl EquipmentSelection {
    pub fn new(key: impl Into<String>, quantity: u32) -> Self {
        Self {
            key: key.into(),
            quantity,
        }
    }
}

/// Every user selection needed to evaluate a design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSnapshot {
    pub name: String,
    pub airframe: String,
    pub structure: String,
    pub wing: String,
    pub engine: String,
    pub engine_count: u32,
    pub supercharger: String,
    #[serde(default)]
    pub equipment: Vec<EquipmentSelection>,
    /// Design target speed (km/h).
    pub target_speed: f64,
    /// Design target range (km).
    pub target_range: f64,
}

impl Default for DesignSnapshot {
    fn default() -> Self {
        Self {
            name: "Light Fighter".to_string(),
            airframe: "light_fighter".to_string(),
            structure: "stressed_skin".to_string(),
            wing: "elliptical".to_string(),
            engine: "inline_v12".to_string(),
            engine_count: 1,
            supercharger: "single_stage".to_string(),
            equipment: vec![
                EquipmentSelection::new("machine_gun", 4),
                EquipmentSelection::new("oxygen", 1),
                EquipmentSelection::new("radio", 1),
            ],
            target_speed: 650.0,
            target_range: 900.0,
        }
    }
}

impl DesignSnapshot {
    /// Identifiers of every selected component, equipment included.
    pub fn component_ids(&self) -> Vec<ComponentId> {
        let mut ids = vec![
            ComponentId::new(ComponentKind::Airframe, &self.airframe),
            ComponentId::new(ComponentKind::Structure, &self.structure),
            ComponentId::new(ComponentKind::Wing, &self.wing),
            ComponentId::new(ComponentKind::Engine, &self.engine),
            ComponentId::new(ComponentKind::Supercharger, &self.supercharger),
        ];
        ids.extend(
            self.equipment
                .iter()
                .map(|item| ComponentId::new(ComponentKind::Equipment, &item.key)),
        );
        ids
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
