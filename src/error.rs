use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigatorError {
    #[error("Configuration Error: {0}")]
    Configuration(String),

    #[error("Malformed Index: {0}")]
    MalformedIndex(String),

    #[error("Unknown Parameter Key: '{0}'")]
    UnknownParameterKey(String),

    #[error("Report Not Found: {}: {source}", path.display())]
    ReportNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed Report: {}: {reason}", path.display())]
    MalformedReport { path: PathBuf, reason: String },

    #[error("Invalid Parameter: {0}")]
    InvalidParameter(String),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type NavResult<T> = Result<T, NavigatorError>;
