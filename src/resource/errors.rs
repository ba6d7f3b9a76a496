//! Error types for resource navigation and verbs.
//!
//! # Error Handling
//!
//! Every error surfaces immediately to the caller; nothing is retried or
//! recovered locally. The one tolerated irregularity, a response item
//! without a `resource` field, is not an error at all but a
//! [`WrapResult::RawUntyped`](crate::resource::WrapResult::RawUntyped).
//!
//! # Example
//!
//! ```rust,ignore
//! use stackapi::resource::ResourceError;
//!
//! match metric.update(None).await {
//!     Ok(_) => println!("updated"),
//!     Err(ResourceError::NotPersisted { operation }) => {
//!         println!("cannot {operation} an object that was never created");
//!     }
//!     Err(ResourceError::Http(e)) => println!("transport failed: {e}"),
//!     Err(e) => println!("other error: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Navigation to a name that is not a resource class.
    #[error("'{name}' is not a resource class; class names start with an uppercase letter")]
    NotFound {
        /// The name that was requested.
        name: String,
    },

    /// A payload that is not a JSON object was supplied.
    #[error("Object must be a JSON object, got {found}")]
    InvalidPayloadType {
        /// The JSON type that was supplied.
        found: &'static str,
    },

    /// `create` was called on an object that already has a `resource`.
    #[error("Can not create, this resource already exists at {resource}")]
    AlreadyPersisted {
        /// The existing resource URL.
        resource: String,
    },

    /// `update` or `delete` was called on an object without a `resource`.
    #[error("Can not {operation}, this is not a resource from the server")]
    NotPersisted {
        /// The verb that was attempted.
        operation: &'static str,
    },

    /// The server response has no `data` field.
    #[error("Result does not contain a data field")]
    InvalidEnvelope,

    /// The unwrapped data has an unexpected JSON type.
    #[error("Result data must be an object or an array: {found} was returned")]
    InvalidResponseShape {
        /// The JSON type that was returned.
        found: &'static str,
    },

    /// A `resource` URL has too few path segments to name a class.
    #[error("Malformed resource URL '{url}': cannot resolve a resource class")]
    MalformedResourceUrl {
        /// The URL that failed to parse.
        url: String,
    },

    /// A payload's `resource` URL names a different class than the interface.
    #[error("Resource class mismatch: expected {expected}, payload resource is a {found}")]
    TypeMismatch {
        /// The class of the interface.
        expected: String,
        /// The class resolved from the payload's `resource` URL.
        found: String,
    },

    /// A transport-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

/// Returns the JSON type name of a value, used in error messages.
#[must_use]
pub const fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
