// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the error types that can occur when validating and
//! resolving environment configuration. All errors use `thiserror` for
//! proper error handling and conversion.

use thiserror::Error;

/// The main error type for configuration operations.
///
/// This enum represents all possible errors that can occur when validating
/// required keys or resolving configuration values. It is marked as
/// `#[non_exhaustive]` to allow for future additions without breaking
/// backwards compatibility.
///
/// # Examples
///
/// ```
/// use envreg::domain::errors::ConfigError;
///
/// fn validate() -> Result<(), ConfigError> {
///     Err(ConfigError::MissingRequiredKeys {
///         keys: vec!["CLIENT_URL".to_string()],
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// One or more required keys were absent from the known key set at
    /// construction time. The message enumerates every missing key.
    #[error("Missing required configuration keys: {}", .keys.join(", "))]
    MissingRequiredKeys {
        /// The required keys that were not found, in declaration order
        keys: Vec<String>,
    },

    /// A lookup requested default fallback for a key with no registered
    /// default value.
    #[error("No default value registered for configuration key: {key}")]
    DefaultNotRegistered {
        /// The key with no registered default
        key: String,
    },

    /// An error occurred in an environment source.
    #[error("Environment source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to load an environment-definition file.
    #[error("Failed to load environment file: {message}")]
    EnvFile {
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates a `MissingRequiredKeys` error from any iterable of keys.
    pub fn missing_required<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ConfigError::MissingRequiredKeys {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
