use std::time::Duration;

use bevy::prelude::*;

use crate::components::{DesignSnapshot, PerformanceRecord};
use crate::utils::DesignError;

/// The design currently being edited.
#[derive(Resource, Debug, Clone, Default)]
pub struct DesignInput {
    pub snapshot: DesignSnapshot,
}

impl DesignInput {
    pub fn new(snapshot: DesignSnapshot) -> Self {
        Self { snapshot }
    }
}

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct EvaluationSettings {
    /// Quiet period after the last edit before the design is re-evaluated.
    pub debounce: Duration,
}

impl Default for EvaluationSettings {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(250),
        }
    }
}

/// Coalesces bursts of `DesignChanged` events into one evaluation.
#[derive(Resource, Debug, Clone)]
pub struct EvaluationDebounce {
    pub timer: Timer,
    /// An edit has been seen since the last evaluation.
    pub pending: bool,
}

impl EvaluationDebounce {
    pub fn new(settings: &EvaluationSettings) -> Self {
        Self {
            timer: Timer::new(settings.debounce, TimerMode::Once),
            pending: false,
        }
    }

    /// Restarts the quiet period.
    pub fn trigger(&mut self) {
        self.timer.reset();
        self.pending = true;
    }

    pub fn tick(&mut self, delta: Duration) {
        if self.pending {
            self.timer.tick(delta);
        }
    }

    /// Consumes the pending edit once the quiet period has elapsed.
    pub fn take_ready(&mut self) -> bool {
        if self.pending && self.timer.finished() {
            self.pending = false;
            true
        } else {
            false
        }
    }
}

impl Default for EvaluationDebounce {
    fn default() -> Self {
        Self::new(&EvaluationSettings::default())
    }
}

/// Outcome of the most recent evaluation.
#[derive(Resource, Debug, Default)]
pub struct LatestPerformance {
    pub result: Option<Result<PerformanceRecord, DesignError>>,
    /// Number of evaluations run so far.
    pub evaluations: u64,
}

impl LatestPerformance {
    pub fn record(&self) -> Option<&PerformanceRecord> {
        self.result.as_ref().and_then(|result| result.as_ref().ok())
    }

    pub fn error(&self) -> Option<&DesignError> {
        self.result.as_ref().and_then(|result| result.as_ref().err())
    }
}
