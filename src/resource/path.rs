//! Versioned endpoint construction.
//!
//! Every relative endpoint has the shape `v{version}/{base}[{id}/][{action}/]`
//! where `base` is an interface prefix such as `metric/` or
//! `metric/threshold/` (always ending in `/`).
//!
//! # Example
//!
//! ```rust
//! use stackapi::resource::versioned_endpoint;
//! use stackapi::ApiVersion;
//!
//! let version = ApiVersion::default();
//! assert_eq!(
//!     versioned_endpoint(&version, "metric/", Some("123"), Some("snooze")),
//!     "v0.2/metric/123/snooze/"
//! );
//! ```

use serde_json::Value;

use crate::config::ApiVersion;

/// Builds a versioned endpoint from a base prefix, optional id and optional action.
#[must_use]
pub fn versioned_endpoint(
    version: &ApiVersion,
    base: &str,
    id: Option<&str>,
    action: Option<&str>,
) -> String {
    let mut uri = format!("v{version}/{base}");
    if let Some(id) = id {
        uri.push_str(id);
        uri.push('/');
    }
    append_action(uri, action)
}

/// Appends `{action}/` to an endpoint when an action is given.
#[must_use]
pub fn append_action(mut endpoint: String, action: Option<&str>) -> String {
    if let Some(action) = action {
        endpoint.push_str(action);
        endpoint.push('/');
    }
    endpoint
}

/// Renders an `id` payload value as a path segment.
///
/// Strings are used verbatim; numbers and other scalars use their JSON text.
#[must_use]
pub fn id_segment(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
