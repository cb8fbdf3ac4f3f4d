//! Error types for the people analytics engine.
//!
//! The hierarchy and payroll cores never fail: every malformed record
//! degrades to a documented default. Errors only arise at the outer edge,
//! when configuration or datasets are read from disk.

use thiserror::Error;

/// The error type for loading configuration and datasets.
///
/// # Example
///
/// ```
/// use people_analytics::error::AnalyticsError;
///
/// let error = AnalyticsError::ConfigNotFound {
///     path: "/missing/analytics.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/analytics.yaml");
/// ```
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value the engine cannot use.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// Dataset file was not found at the specified path.
    #[error("Dataset file not found: {path}")]
    DatasetNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Dataset file could not be parsed.
    #[error("Failed to parse dataset '{path}': {message}")]
    DatasetParseError {
        /// The path (or source label) of the dataset.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return AnalyticsError.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
