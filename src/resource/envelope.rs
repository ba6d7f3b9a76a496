//! Response envelope handling.
//!
//! Every server response is a JSON object of the form `{"data": ...}`.
//! [`unwind_result`] strips that envelope; [`wrap_data`] turns the payload
//! into [`ResourceObject`]s, resolving each item's class from its own
//! `resource` URL.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::clients::RestClient;
use crate::resource::errors::json_type_name;
use crate::resource::{
    parse_class_from_resource, ResourceError, ResourceInterface, ResourceObject,
};

/// Outcome of wrapping one response item.
#[derive(Clone, Debug)]
pub enum WrapResult {
    /// The item carried a `resource` URL and became a live object.
    Wrapped(ResourceObject),
    /// The item had no `resource` field and is returned as plain data.
    RawUntyped(Map<String, Value>),
}

impl WrapResult {
    /// Returns `true` if the item was wrapped as a [`ResourceObject`].
    #[must_use]
    pub const fn is_wrapped(&self) -> bool {
        matches!(self, Self::Wrapped(_))
    }

    /// Returns the wrapped object, if any.
    #[must_use]
    pub const fn as_object(&self) -> Option<&ResourceObject> {
        match self {
            Self::Wrapped(object) => Some(object),
            Self::RawUntyped(_) => None,
        }
    }

    /// Consumes the result, returning the wrapped object, if any.
    #[must_use]
    pub fn into_object(self) -> Option<ResourceObject> {
        match self {
            Self::Wrapped(object) => Some(object),
            Self::RawUntyped(_) => None,
        }
    }

    /// Returns the item's fields regardless of how it was wrapped.
    #[must_use]
    pub const fn payload(&self) -> &Map<String, Value> {
        match self {
            Self::Wrapped(object) => object.payload(),
            Self::RawUntyped(map) => map,
        }
    }
}

/// Wrapped response data: one item or a sequence of items.
#[derive(Clone, Debug)]
pub enum ResourceData {
    /// The server returned a single object.
    One(WrapResult),
    /// The server returned an array.
    Many(Vec<WrapResult>),
}

impl ResourceData {
    /// Flattens the data into a sequence.
    #[must_use]
    pub fn into_vec(self) -> Vec<WrapResult> {
        match self {
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        }
    }

    /// Returns the single item, or `None` for a sequence.
    #[must_use]
    pub fn into_one(self) -> Option<WrapResult> {
        match self {
            Self::One(item) => Some(item),
            Self::Many(_) => None,
        }
    }
}

/// Extracts the `data` field from a response envelope.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidEnvelope`] if the response is not an
/// object or has no `data` field.
pub fn unwind_result(response: Value) -> Result<Value, ResourceError> {
    let data = match response {
        Value::Object(mut map) => map.remove("data"),
        _ => None,
    };

    data.ok_or_else(|| {
        tracing::error!("Result does not contain a data field");
        ResourceError::InvalidEnvelope
    })
}

/// Wraps unwrapped response data as resource objects.
///
/// An object becomes [`ResourceData::One`]; an array is wrapped element by
/// element into [`ResourceData::Many`]. One bad element aborts the whole call.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidResponseShape`] if `data` (or one of its
/// elements) is not an object, and [`ResourceError::MalformedResourceUrl`]
/// if an item's `resource` URL cannot be resolved.
pub fn wrap_data(client: &Arc<RestClient>, data: Value) -> Result<ResourceData, ResourceError> {
    match data {
        Value::Object(_) => wrap_item(client, data).map(ResourceData::One),
        Value::Array(items) => items
            .into_iter()
            .map(|item| wrap_item(client, item))
            .collect::<Result<Vec<_>, _>>()
            .map(ResourceData::Many),
        other => Err(ResourceError::InvalidResponseShape {
            found: json_type_name(&other),
        }),
    }
}

fn wrap_item(client: &Arc<RestClient>, item: Value) -> Result<WrapResult, ResourceError> {
    let payload = match item {
        Value::Object(payload) => payload,
        other => {
            return Err(ResourceError::InvalidResponseShape {
                found: json_type_name(&other),
            })
        }
    };

    let class = match payload.get("resource") {
        None => {
            tracing::warn!(
                "Trying to wrap an object without a resource, returning the raw data instead"
            );
            return Ok(WrapResult::RawUntyped(payload));
        }
        Some(Value::String(resource)) => parse_class_from_resource(resource)?,
        Some(other) => {
            return Err(ResourceError::MalformedResourceUrl {
                url: other.to_string(),
            })
        }
    };

    let interface = ResourceInterface::new(&class, Arc::clone(client), "");
    Ok(WrapResult::Wrapped(ResourceObject::from_parts(interface, payload)))
}
