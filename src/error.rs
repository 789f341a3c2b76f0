//! Error types for the NBA stats collector

use thiserror::Error;


pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse integer: {0}")]
    InvalidInteger(#[from] std::num::ParseIntError),

    #[error("Unknown {catalog} data kind: {name}")]
    UnknownDataKind { catalog: &'static str, name: String },

    #[error("Result set index {index} out of range ({available} available)")]
    ResultSetOutOfRange { index: usize, available: usize },

    #[error("Malformed result set {name}: {message}")]
    MalformedResultSet { name: String, message: String },

    #[error("Missing value for key column {column}")]
    MissingColumn { column: String },

    #[error("Cannot store {value} in {column} ({expected})")]
    Coercion {
        column: String,
        expected: &'static str,
        value: String,
    },

    #[error("Unsupported database driver: {driver}")]
    UnsupportedDriver { driver: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}
