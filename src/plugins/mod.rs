mod design;

pub use design::DesignEvaluatorPlugin;
