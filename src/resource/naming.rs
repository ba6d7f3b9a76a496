//! Resource class names and their URL forms.
//!
//! Two independent conversions live here:
//!
//! - [`to_rest_class`] / [`endpoint_segment`]: class name → path segment
//!   (`"ApiKey"` → `"Api_Key"` → `"api_key"`)
//! - [`parse_class_from_resource`]: resource URL → class name
//!   (`".../v0.2/api_key/3/"` → `"Api_key"`)
//!
//! They are not inverses of each other. Compare classes through
//! [`endpoint_segment`] when both sides matter.

use crate::resource::ResourceError;

/// Inserts `_` before each word boundary of a CamelCase class name.
///
/// Names that already contain `_`, or that have exactly one uppercase
/// character, are returned unchanged.
///
/// # Example
///
/// ```rust
/// use stackapi::resource::to_rest_class;
///
/// assert_eq!(to_rest_class("ApiKey"), "Api_Key");
/// assert_eq!(to_rest_class("Metric"), "Metric");
/// assert_eq!(to_rest_class("Api_key"), "Api_key");
/// ```
#[must_use]
pub fn to_rest_class(name: &str) -> String {
    let uppercase = name.chars().filter(|c| c.is_uppercase()).count();
    if name.contains('_') || uppercase == 1 {
        return name.to_string();
    }

    let mut chars = name.chars();
    let mut result = String::with_capacity(name.len() + uppercase);
    if let Some(first) = chars.next() {
        result.push(first);
    }
    for c in chars {
        if c.is_uppercase() {
            result.push('_');
        }
        result.push(c);
    }
    result
}

/// Returns the lowercase URL path segment for a class name.
///
/// # Example
///
/// ```rust
/// use stackapi::resource::endpoint_segment;
///
/// assert_eq!(endpoint_segment("ApiKey"), "api_key");
/// assert_eq!(endpoint_segment("Metric"), "metric");
/// ```
#[must_use]
pub fn endpoint_segment(name: &str) -> String {
    to_rest_class(name).to_lowercase()
}

/// Derives a class name from a canonical resource URL.
///
/// The class is the parent segment of the last one, after dropping a single
/// trailing empty segment; its first character is uppercased and the rest
/// lowercased.
///
/// # Errors
///
/// Returns [`ResourceError::MalformedResourceUrl`] when fewer than two
/// segments remain or the class segment is empty.
///
/// # Example
///
/// ```rust
/// use stackapi::resource::parse_class_from_resource;
///
/// let class = parse_class_from_resource("https://host/v0.2/metric/123/").unwrap();
/// assert_eq!(class, "Metric");
/// assert!(parse_class_from_resource("metric/").is_err());
/// ```
pub fn parse_class_from_resource(resource: &str) -> Result<String, ResourceError> {
    let malformed = || ResourceError::MalformedResourceUrl {
        url: resource.to_string(),
    };

    let mut parts: Vec<&str> = resource.split('/').collect();
    if parts.last().is_some_and(|last| last.trim_end().is_empty()) {
        parts.pop();
    }

    if parts.len() < 2 {
        return Err(malformed());
    }

    let mut chars = parts[parts.len() - 2].chars();
    let first = chars.next().ok_or_else(malformed)?;

    Ok(first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect())
}
