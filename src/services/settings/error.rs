use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("no stored time settings")]
    Missing,

    #[error("failed to access preferences at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed time settings record: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl PreferencesError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
