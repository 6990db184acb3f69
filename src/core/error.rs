use std::path::PathBuf;
use thiserror::Error;

/// Error types for loading country data and persisting settings.
///
/// The list transformation itself never fails; these only surface at the
/// file boundaries.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Dataset file could not be read
    #[error("Failed to read dataset {path}: {source}")]
    Dataset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be located or written
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Short message suitable for the status line in the GUI.
    pub fn user_message(&self) -> String {
        match self {
            Error::Dataset { path, .. } => format!(
                "Could not open {}, showing the built-in country list",
                path.display()
            ),
            Error::Serialization(_) => {
                "Dataset is not valid JSON, showing the built-in country list".to_string()
            }
            other => other.to_string(),
        }
    }
}
