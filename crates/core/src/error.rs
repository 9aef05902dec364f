use std::path::PathBuf;

/// Failures while reading the interface configuration document.
///
/// Every variant is fatal for a load run: nothing touches the database
/// until the document has been read successfully.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Missing key in document: {0}")]
    MissingKey(String),

    #[error("Invalid document shape: {0}")]
    InvalidShape(String),
}
