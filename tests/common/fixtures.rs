use aerodesign::components::{
    AerodynamicProfile, ComponentCatalog, DesignSnapshot, EquipmentSelection, Supercharger,
};
use aerodesign::systems::PerformanceInputs;
use std::sync::LazyLock;

pub static STANDARD_CATALOG: LazyLock<ComponentCatalog> =
    LazyLock::new(|| ComponentCatalog::standard().expect("bundled catalog must load"));

/// Reference light fighter: 18 m², cd_0 0.025, AR 6, e 0.8
pub fn light_fighter_aero() -> AerodynamicProfile {
    AerodynamicProfile::light_fighter()
}

/// 2200 kg, 1000 HP, propeller efficiency 0.85, naturally aspirated
pub fn light_fighter_inputs<'a>(
    aero: &'a AerodynamicProfile,
    supercharger: &'a Supercharger,
) -> PerformanceInputs<'a> {
    PerformanceInputs {
        weight: 2200.0,
        power_hp: 1000.0,
        prop_efficiency: 0.85,
        aero,
        supercharger,
    }
}

pub fn heavy_fighter_design() -> DesignSnapshot {
    DesignSnapshot {
        name: "Heavy Fighter".to_string(),
        airframe: "heavy_fighter".to_string(),
        structure: "reinforced".to_string(),
        wing: "straight".to_string(),
        engine: "radial_14".to_string(),
        engine_count: 2,
        supercharger: "two_speed".to_string(),
        equipment: vec![
            EquipmentSelection::new("cannon", 4),
            EquipmentSelection::new("oxygen", 1),
            EquipmentSelection::new("radio", 1),
        ],
        target_speed: 650.0,
        target_range: 1500.0,
    }
}

pub fn medium_bomber_design() -> DesignSnapshot {
    DesignSnapshot {
        name: "Medium Bomber".to_string(),
        airframe: "medium_bomber".to_string(),
        structure: "stressed_skin".to_string(),
        wing: "bomber_wing".to_string(),
        engine: "radial_14".to_string(),
        engine_count: 2,
        supercharger: "turbocharger".to_string(),
        equipment: vec![
            EquipmentSelection::new("bomb_bay", 1),
            EquipmentSelection::new("turret", 2),
            EquipmentSelection::new("machine_gun", 1),
            EquipmentSelection::new("oxygen", 1),
            EquipmentSelection::new("pressurized_cabin", 1),
        ],
        target_speed: 480.0,
        target_range: 2500.0,
    }
}

pub fn floatplane_design() -> DesignSnapshot {
    DesignSnapshot {
        name: "Floatplane".to_string(),
        airframe: "floatplane".to_string(),
        structure: "wooden".to_string(),
        wing: "high_lift".to_string(),
        engine: "radial_9".to_string(),
        engine_count: 1,
        supercharger: "none".to_string(),
        equipment: vec![EquipmentSelection::new("radio", 1)],
        target_speed: 400.0,
        target_range: 1000.0,
    }
}
