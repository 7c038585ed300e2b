//! Store error type

use std::path::PathBuf;

/// Error type for define store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read defines file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed defines file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Define index {index} out of range (list has {len} entries)")]
    Index { index: usize, len: usize },

    #[error("Failed to write defines file {}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to apply defines to build targets")]
    Apply(#[source] Box<dyn std::error::Error + Send + Sync>),
}
