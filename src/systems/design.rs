use bevy::prelude::*;

use crate::components::{ComponentCatalog, DesignChanged, SolverConfig};
use crate::resources::{DesignInput, EvaluationDebounce, LatestPerformance};
use crate::systems::evaluate_design;

/// Restarts the debounce timer on every edit and advances it otherwise.
pub fn debounce_design_changes(
    mut changes: EventReader<DesignChanged>,
    mut debounce: ResMut<EvaluationDebounce>,
    time: Res<Time>,
) {
    if changes.read().count() > 0 {
        debounce.trigger();
    } else {
        debounce.tick(time.delta());
    }
}

/// Runs one evaluation of the current design once edits have settled.
pub fn evaluate_pending_design(
    mut debounce: ResMut<EvaluationDebounce>,
    input: Res<DesignInput>,
    catalog: Res<ComponentCatalog>,
    config: Res<SolverConfig>,
    mut latest: ResMut<LatestPerformance>,
) {
    if !debounce.take_ready() {
        return;
    }

    let result = evaluate_design(&input.snapshot, &catalog, &config);
    match &result {
        Ok(record) => info!(
            "Design '{}': {:.0} km/h, {:.0} m ceiling, {:.0} km range",
            record.name, record.speed_sea_level_kmh, record.service_ceiling, record.range_km
        ),
        Err(err) => warn!("Design '{}' rejected: {}", input.snapshot.name, err),
    }

    latest.result = Some(result);
    latest.evaluations += 1;
}
