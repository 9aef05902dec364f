use devcfg_core::error::CoreError;

use crate::config::ConfigError;

/// Failures that abort a load run.
///
/// Per-interface mapping and insert failures are not represented here;
/// the pipeline logs them and moves on to the next interface.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read interface document: {0}")]
    Input(#[from] CoreError),

    #[error("Failed to connect to database: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Failed to prepare schema: {0}")]
    Schema(#[source] sqlx::Error),
}
