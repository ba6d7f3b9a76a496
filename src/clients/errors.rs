//! HTTP-specific error types.
//!
//! This module contains error types for transport operations, including
//! response errors and request validation failures.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type returned by every [`Transport`](crate::clients::Transport)
//!
//! # Example
//!
//! ```rust,ignore
//! use stackapi::clients::HttpError;
//!
//! match transport.get("v0.2/metric/", None, None).await {
//!     Ok(body) => println!("Body: {}", body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(e) => println!("Transport failure: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The message field holds a JSON rendering of the `error`/`errors` fields
/// the server returned, plus an error reference when a request id is known.
///
/// # Example
///
/// ```rust
/// use stackapi::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"error":"Not found"}"#.to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert_eq!(error.to_string(), r#"{"error":"Not found"}"#);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The endpoint is empty.
    #[error("Cannot send a request without an endpoint.")]
    EmptyEndpoint,

    /// A header name or value cannot be sent over HTTP.
    #[error("Invalid header '{name}'.")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },
}

/// Unified error type for all transport errors.
///
/// The resource layer never interprets these further; they are passed to
/// the caller wrapped in [`ResourceError::Http`](crate::resource::ResourceError::Http).
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failure reported by a caller-supplied transport.
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl HttpError {
    /// Wraps an arbitrary error raised by a custom transport.
    pub fn transport(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Transport(error.into())
    }

    /// Returns the HTTP status code when the server answered with an error.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_displays_message() {
        let error = HttpResponseError {
            code: 404,
            message: r#"{"error":"Not Found"}"#.to_string(),
            error_reference: None,
        };
        assert_eq!(error.to_string(), r#"{"error":"Not Found"}"#);
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Cannot use post without specifying data."
        );
    }

    #[test]
    fn test_transport_error_wraps_custom_errors() {
        let error = HttpError::transport("socket closed");
        assert!(matches!(error, HttpError::Transport(_)));
        assert_eq!(error.to_string(), "Transport error: socket closed");
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_status_code_only_for_responses() {
        let response = HttpError::Response(HttpResponseError {
            code: 500,
            message: "{}".to_string(),
            error_reference: None,
        });
        assert_eq!(response.status_code(), Some(500));
        assert_eq!(
            HttpError::InvalidRequest(InvalidHttpRequestError::EmptyEndpoint).status_code(),
            None
        );
    }
}
