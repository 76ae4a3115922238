// src/error.rs

//! Error types for feed loading and repository generation

use thiserror::Error;

/// Errors that can occur while turning a release feed into repository files
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse feed JSON: {0}")]
    FeedError(#[from] serde_json::Error),

    #[error("Malformed package URL '{url}': {reason}")]
    MalformedUrl { url: String, reason: String },

    #[error("Invalid release train '{0}': expected a major.minor decimal")]
    InvalidTrain(String),
}

/// Result type for repository generation
pub type Result<T> = std::result::Result<T, Error>;
