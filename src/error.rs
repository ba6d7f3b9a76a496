//! Error types for client configuration.
//!
//! This module contains the errors raised while validating configuration
//! values and while constructing the [`StackApi`](crate::StackApi) entry point.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use stackapi::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

use crate::clients::HttpError;

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid API key.")]
    EmptyApiKey,

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected a version such as '0.2'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Entrypoint URL is invalid.
    #[error("Invalid entrypoint URL '{url}'. Please provide a URL with scheme (e.g., 'https://api.stackdriver.com/').")]
    InvalidEntrypointUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Neither credentials, custom headers nor a custom transport were supplied.
    #[error("An API key must be specified unless custom headers or a custom transport are used.")]
    MissingCredentials,
}

/// Errors returned while constructing a [`StackApi`](crate::StackApi).
#[derive(Debug, Error)]
pub enum StackApiError {
    /// The configuration is insufficient.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The default HTTP transport could not be created.
    #[error(transparent)]
    Http(#[from] HttpError),
}
