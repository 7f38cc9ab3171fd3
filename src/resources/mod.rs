mod design;

pub use design::{DesignInput, EvaluationDebounce, EvaluationSettings, LatestPerformance};
