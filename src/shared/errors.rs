//! Error handling for the application

use crate::shared::types::ItemCategory;
use thiserror::Error;

/// Problems found while decoding snapshot documents. Always recovered by defaulting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataFormatError {
    #[error("Malformed snapshot document: {0}")]
    MalformedSnapshot(String),

    #[error("Category {category} is not a list")]
    MalformedCategory { category: ItemCategory },

    #[error("Malformed {category} item: {reason}")]
    MalformedItem { category: ItemCategory, reason: String },

    #[error("{category} item without a name")]
    MissingName { category: ItemCategory },
}

/// A single detector could not produce its list
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DetectorFailure {
    #[error("{detector}: non-finite score for {subject}")]
    NonFiniteScore { detector: &'static str, subject: String },

    #[error("{detector}: invalid input: {reason}")]
    InvalidInput { detector: &'static str, reason: String },
}

/// The merge of primary and historical snapshots failed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntegrationFailure {
    #[error("Non-finite historical change for {category} item {name}")]
    NonFiniteChange { category: ItemCategory, name: String },
}

/// Snapshot source errors
#[derive(Error, Debug)]
pub enum CollectorError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid snapshot data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Snapshot not found for league {0}")]
    NotFound(String),
}

/// General application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Collector error: {0}")]
    CollectorError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<CollectorError> for AppError {
    fn from(err: CollectorError) -> Self {
        AppError::CollectorError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}
