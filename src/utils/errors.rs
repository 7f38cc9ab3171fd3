use thiserror::Error;

use crate::components::{CatalogError, ComponentKind};

#[derive(Error, Debug)]
pub enum DesignError {
    #[error("Unknown {kind} component: {key}")]
    UnknownComponent { kind: ComponentKind, key: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DesignError>;
