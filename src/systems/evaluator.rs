use bevy::prelude::*;

use crate::components::{
    AerodynamicProfile, ArmamentRole, ComponentCatalog, ComponentKind, DesignSnapshot,
    EngineEntry, EquipmentEntry, PerformanceRecord, RangeParameters, SolverConfig,
    WeightBreakdown,
};
use crate::systems::aerodynamics::air_properties_at;
use crate::systems::performance::{
    apply_ceiling_policy, estimate_range_km, fuel_for_range, performance_at, rate_of_climb_at,
    service_ceiling, turn_performance, PerformanceInputs,
};
use crate::utils::{DesignError, Result};

/// Evaluates a complete design against the catalog.
///
/// Every key in the snapshot must resolve; a missing component or a
/// physically meaningless selection yields an error and no record. The
/// evaluation is a pure function of its arguments.
pub fn evaluate_design(
    snapshot: &DesignSnapshot,
    catalog: &ComponentCatalog,
    config: &SolverConfig,
) -> Result<PerformanceRecord> {
    let airframe = catalog
        .airframe(&snapshot.airframe)
        .ok_or_else(|| unknown(ComponentKind::Airframe, &snapshot.airframe))?;
    let structure = catalog
        .structure(&snapshot.structure)
        .ok_or_else(|| unknown(ComponentKind::Structure, &snapshot.structure))?;
    let wing = catalog
        .wing(&snapshot.wing)
        .ok_or_else(|| unknown(ComponentKind::Wing, &snapshot.wing))?;
    let engine = catalog
        .engine(&snapshot.engine)
        .ok_or_else(|| unknown(ComponentKind::Engine, &snapshot.engine))?;
    let supercharger = catalog
        .supercharger(&snapshot.supercharger)
        .ok_or_else(|| unknown(ComponentKind::Supercharger, &snapshot.supercharger))?;
    let equipment = snapshot
        .equipment
        .iter()
        .map(|item| {
            catalog
                .equipment_item(&item.key)
                .map(|entry| (entry, item.quantity))
                .ok_or_else(|| unknown(ComponentKind::Equipment, &item.key))
        })
        .collect::<Result<Vec<(&EquipmentEntry, u32)>>>()?;

    if snapshot.engine_count == 0 {
        return Err(invalid("a design needs at least one engine"));
    }
    if snapshot.target_speed <= 0.0 || snapshot.target_range <= 0.0 {
        return Err(invalid("target speed and range must be positive"));
    }
    let engine_count = f64::from(snapshot.engine_count);

    // Aerodynamics
    let mut aero = AerodynamicProfile::new(
        airframe.category,
        wing.wing_area,
        airframe.cl_max,
        airframe.cd_0,
        wing.aspect_ratio,
        wing.oswald_efficiency,
        airframe.limits,
    );
    aero.limits.g_limit = airframe.limits.g_limit.min(structure.g_limit);
    aero.apply(&airframe.modifiers);
    aero.apply(&structure.modifiers);
    aero.apply(&wing.modifiers);
    aero.apply(&engine.modifiers);
    aero.apply(&supercharger.modifiers);
    for (entry, quantity) in &equipment {
        aero.apply(&entry.modifiers.scaled(f64::from(*quantity)));
    }
    if aero.wing_area <= 0.0 || aero.cl_max <= 0.0 || aero.cd_0 <= 0.0 {
        return Err(invalid("wing area, cl_max and cd_0 must be positive"));
    }

    // Masses
    let equipment_weight: f64 = equipment
        .iter()
        .map(|(entry, quantity)| entry.weight * f64::from(*quantity))
        .sum();
    let empty = airframe.weight * structure.weight_factor
        + wing.weight
        + (engine.weight + supercharger.weight) * engine_count
        + equipment_weight;
    if empty <= 0.0 {
        return Err(invalid("empty weight must be positive"));
    }

    let sizing = range_parameters(engine, &aero, 0.0, 0.0);
    let fuel = fuel_for_range(
        empty,
        snapshot.target_range,
        &sizing,
        config.range_balance_divisor,
        airframe.max_fuel_fraction,
    );
    let weight = WeightBreakdown {
        empty,
        fuel,
        gross: empty + fuel,
        combat: empty + 0.5 * fuel,
    };

    // Performance
    let total_power_hp = engine.power * engine_count;
    let inputs = PerformanceInputs {
        weight: weight.combat,
        power_hp: total_power_hp,
        prop_efficiency: engine.prop_efficiency,
        aero: &aero,
        supercharger: &supercharger.profile,
    };

    let sea_level = performance_at(0.0, &inputs, config);
    let at_altitude = performance_at(config.reference_altitude, &inputs, config);
    let rate_of_climb = rate_of_climb_at(0.0, &inputs, config);

    let pressurized_cabin = equipment
        .iter()
        .any(|(entry, quantity)| *quantity > 0 && entry.pressurized_cabin);
    let oxygen_system = equipment
        .iter()
        .any(|(entry, quantity)| *quantity > 0 && entry.oxygen_system);
    let physical_ceiling = service_ceiling(&inputs, config);
    let service_ceiling = apply_ceiling_policy(
        physical_ceiling,
        aero.ceiling_mod,
        pressurized_cabin,
        oxygen_system,
    )
    .min(aero.limits.max_ceiling);

    let range_parameters = range_parameters(engine, &aero, weight.gross, weight.fuel);
    let range_km = estimate_range_km(
        &range_parameters,
        config.range_balance_divisor,
        snapshot.target_range.min(aero.limits.max_range),
    );

    let reference_density = air_properties_at(config.reference_altitude).density;
    let turn = turn_performance(
        at_altitude.speed_ms,
        reference_density,
        weight.combat,
        &aero,
        config.turn_time_bounds,
    );

    let speed_cap = snapshot.target_speed.min(aero.limits.max_speed);
    let speed_sea_level_kmh = (sea_level.speed_kmh * aero.speed_mod).min(speed_cap);
    let speed_at_altitude_kmh = (at_altitude.speed_kmh * aero.speed_mod).min(speed_cap);

    // Economics
    let cost_sum = airframe.cost
        + wing.cost
        + (engine.cost + supercharger.cost) * engine_count
        + equipment
            .iter()
            .map(|(entry, quantity)| entry.cost * f64::from(*quantity))
            .sum::<f64>();
    let cost = cost_sum * structure.cost_factor;

    let reliability = (airframe.reliability
        * structure.reliability
        * wing.reliability
        * (engine.reliability * supercharger.reliability).powf(engine_count)
        * equipment
            .iter()
            .map(|(entry, quantity)| entry.reliability.powf(f64::from(*quantity)))
            .product::<f64>())
    .clamp(0.0, 1.0);

    let armament = |role: ArmamentRole| -> Vec<String> {
        equipment
            .iter()
            .filter(|(entry, quantity)| *quantity > 0 && entry.armament == Some(role))
            .map(|(entry, quantity)| format!("{}x {}", quantity, entry.name))
            .collect()
    };

    debug!(
        "Evaluated '{}': {:.0} km/h SL, {:.0} km/h at {:.0} m, climb {:.1} m/s, \
         ceiling {:.0} m, range {:.0} km",
        snapshot.name,
        speed_sea_level_kmh,
        speed_at_altitude_kmh,
        config.reference_altitude,
        rate_of_climb,
        service_ceiling,
        range_km
    );

    Ok(PerformanceRecord {
        name: snapshot.name.clone(),
        speed_sea_level_kmh,
        speed_at_altitude_kmh,
        reference_altitude: config.reference_altitude,
        rate_of_climb,
        service_ceiling,
        range_km,
        turn_time: turn.turn_time,
        turn,
        reliability,
        cost,
        weight,
        total_power_hp,
        sea_level,
        at_altitude,
        range_parameters,
        offensive_armament: armament(ArmamentRole::Offensive),
        defensive_armament: armament(ArmamentRole::Defensive),
    })
}

fn range_parameters(
    engine: &EngineEntry,
    aero: &AerodynamicProfile,
    gross_weight: f64,
    fuel_weight: f64,
) -> RangeParameters {
    RangeParameters {
        prop_efficiency: engine.prop_efficiency,
        bsfc: engine.bsfc_si(),
        cd_0: aero.cd_0 * aero.drag_mod,
        aspect_ratio: aero.aspect_ratio,
        oswald_efficiency: aero.oswald_efficiency,
        gross_weight,
        fuel_weight,
        range_mod: aero.range_mod,
    }
}

fn unknown(kind: ComponentKind, key: &str) -> DesignError {
    DesignError::UnknownComponent {
        kind,
        key: key.to_string(),
    }
}

fn invalid(reason: &str) -> DesignError {
    DesignError::InvalidConfiguration(reason.to_string())
}
