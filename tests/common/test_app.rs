use aerodesign::{
    components::{ComponentCatalog, DesignChanged, DesignSnapshot, SolverConfig},
    plugins::DesignEvaluatorPlugin,
    resources::{DesignInput, EvaluationSettings, LatestPerformance},
};
use bevy::prelude::*;
use std::time::Duration;

// Builder for creating a test application with customizable configuration
#[derive(Default)]
pub struct TestAppBuilder {
    catalog: Option<ComponentCatalog>,
    solver: Option<SolverConfig>,
    snapshot: Option<DesignSnapshot>,
    settings: EvaluationSettings,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(mut self, catalog: ComponentCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_solver(mut self, config: SolverConfig) -> Self {
        self.solver = Some(config);
        self
    }

    pub fn with_design(mut self, snapshot: DesignSnapshot) -> Self {
        self.snapshot = Some(snapshot);
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.settings.debounce = debounce;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();
        app.init_resource::<Time>();

        if let Some(catalog) = self.catalog {
            app.insert_resource(catalog);
        }
        if let Some(config) = self.solver {
            app.insert_resource(config);
        }
        app.add_plugins(DesignEvaluatorPlugin::new(self.settings));
        if let Some(snapshot) = self.snapshot {
            app.insert_resource(DesignInput::new(snapshot));
        }

        TestApp { app }
    }
}

pub struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Advances the clock by `millis` and runs one frame.
    pub fn step(&mut self, millis: u64) {
        self.app
            .world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(millis));
        self.app.update();
    }

    /// Replaces the design and announces the edit, as a UI would.
    pub fn edit(&mut self, edit: impl FnOnce(&mut DesignSnapshot)) {
        {
            let mut input = self.app.world_mut().resource_mut::<DesignInput>();
            edit(&mut input.snapshot);
        }
        self.app.world_mut().send_event(DesignChanged);
    }

    pub fn latest(&self) -> &LatestPerformance {
        self.app.world().resource::<LatestPerformance>()
    }
}
