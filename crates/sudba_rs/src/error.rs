//! Error type for the facade.

use std::path::PathBuf;

use sudba_config::ConfigError;
use sudba_time::TimeError;
use thiserror::Error;

/// Errors surfaced by facade operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SudbaError {
    /// Date or timestamp could not be built.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Profile JSON could not be (de)serialized.
    #[error("profile JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Profile file could not be read or written.
    #[error("cannot access profile {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Operation needs a birth date and the profile has none.
    #[error("profile has no birth date")]
    MissingBirthDate,
}
