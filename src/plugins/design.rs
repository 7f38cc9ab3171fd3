use bevy::prelude::*;

use crate::components::{ComponentCatalog, DesignChanged, SolverConfig};
use crate::resources::{DesignInput, EvaluationDebounce, EvaluationSettings, LatestPerformance};
use crate::systems::{debounce_design_changes, evaluate_pending_design};

/// Re-evaluates the design in `DesignInput` once `DesignChanged` events stop
/// arriving for the configured debounce period.
///
/// The standard bundled catalog is inserted unless the app already has a
/// `ComponentCatalog`.
#[derive(Default)]
pub struct DesignEvaluatorPlugin {
    pub settings: EvaluationSettings,
}

impl DesignEvaluatorPlugin {
    pub fn new(settings: EvaluationSettings) -> Self {
        Self { settings }
    }
}

impl Plugin for DesignEvaluatorPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<ComponentCatalog>() {
            let catalog = ComponentCatalog::standard().unwrap_or_else(|err| {
                error!("Failed to load the standard catalog: {err}");
                ComponentCatalog::default()
            });
            app.insert_resource(catalog);
        }

        app.add_event::<DesignChanged>()
            .insert_resource(self.settings)
            .insert_resource(EvaluationDebounce::new(&self.settings))
            .init_resource::<DesignInput>()
            .init_resource::<SolverConfig>()
            .init_resource::<LatestPerformance>()
            .add_systems(
                Update,
                (debounce_design_changes, evaluate_pending_design).chain(),
            );
    }
}
