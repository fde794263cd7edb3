//! Error types for geospan

use thiserror::Error;

/// Main error type for geospan operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Empty query")]
    EmptyQuery,

    #[error("No match found for '{0}'")]
    NotFound(String),

    #[error("Geocoding transport failure: {0}")]
    Transport(String),

    #[error("Calculation superseded by a newer request")]
    Superseded,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for geospan operations
pub type Result<T> = std::result::Result<T, Error>;
