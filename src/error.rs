use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the esc50-data crate.
#[derive(Debug, Error)]
pub enum DataError {
    // Generic fallback (wraps anyhow)
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),

    #[error("Could not create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid dataset reference `{0}`, expected `owner/dataset-name`")]
    InvalidDatasetRef(String),

    #[error(
        "Could not find kaggle.json (searched: {searched}). Set KAGGLE_USERNAME and KAGGLE_KEY or place kaggle.json there"
    )]
    MissingCredentials { searched: String },

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Unauthorized to download `{dataset}` (HTTP {status})")]
    Unauthorized { dataset: String, status: u16 },

    #[error("Dataset `{0}` not found")]
    DatasetNotFound(String),

    #[error("HTTP {status} while downloading `{dataset}`")]
    Http { dataset: String, status: u16 },

    #[error("Extraction failed: {0}")]
    Extract(String),
}

impl From<std::io::Error> for DataError {
    fn from(e: std::io::Error) -> Self {
        DataError::Anyhow(e.into())
    }
}

impl From<serde_json::Error> for DataError {
    fn from(e: serde_json::Error) -> Self {
        DataError::Anyhow(e.into())
    }
}

impl From<reqwest::Error> for DataError {
    fn from(e: reqwest::Error) -> Self {
        DataError::Anyhow(e.into())
    }
}

impl From<zip::result::ZipError> for DataError {
    fn from(e: zip::result::ZipError) -> Self {
        DataError::Extract(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
