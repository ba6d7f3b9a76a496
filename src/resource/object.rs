//! Resource instances.
//!
//! A [`ResourceObject`] is a dynamic JSON object tied to the interface it
//! was constructed or fetched through. The object is *persisted* once its
//! payload holds a non-empty `resource` URL; verbs that need a server-side
//! identity check this before any request is made.
//!
//! # Instance Verbs
//!
//! | Verb | Precondition | Request | Payload afterwards |
//! |------|--------------|---------|--------------------|
//! | `create` | not persisted | `POST v{ver}/{prefix}` | merged with response |
//! | `update` | persisted | `PUT {resource}` | merged with response |
//! | `get` | none | `GET {instance}[{action}/]` | unchanged |
//! | `put` | none | `PUT {instance}[{action}/]` | unchanged |
//! | `delete` | persisted | `DELETE {resource}` | merged with response |
//!
//! `{instance}` is the `resource` URL when present, otherwise
//! `v{ver}/{prefix}{id}/`.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::clients::StringMap;
use crate::resource::errors::json_type_name;
use crate::resource::{
    append_action, id_segment, unwind_result, RequestOptions, ResourceError, ResourceInterface,
};

/// A resource instance: a JSON payload plus the interface it belongs to.
///
/// # Example
///
/// ```rust,ignore
/// use serde_json::json;
///
/// let metric = stack.navigate_class("Metric")?;
/// let mut object = metric.call(Some(json!({"name": "cpu", "group_id": 3})))?;
///
/// object.create(None).await?;
/// assert!(object.is_persisted());
///
/// object.set_field("name", "cpu-usage");
/// object.update(None).await?;
/// object.delete(None).await?;
/// ```
#[derive(Clone)]
pub struct ResourceObject {
    interface: ResourceInterface,
    payload: Map<String, Value>,
}

impl ResourceObject {
    pub(crate) const fn from_parts(interface: ResourceInterface, payload: Map<String, Value>) -> Self {
        Self { interface, payload }
    }

    /// Returns the interface this object belongs to.
    #[must_use]
    pub const fn interface(&self) -> &ResourceInterface {
        &self.interface
    }

    /// Returns the class name of this object.
    #[must_use]
    pub fn class_name(&self) -> &str {
        self.interface.class_name()
    }

    /// Navigates to a resource class nested under this object's interface.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] unless `name` starts with an
    /// uppercase letter.
    pub fn navigate_class(&self, name: &str) -> Result<ResourceInterface, ResourceError> {
        self.interface.navigate_class(name)
    }

    /// Returns a field of the payload.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.payload.get(name)
    }

    /// Returns a mutable reference to a field of the payload.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.payload.get_mut(name)
    }

    /// Sets a field, returning the previous value.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.payload.insert(name.into(), value.into())
    }

    /// Removes a field, returning its value.
    pub fn remove_field(&mut self, name: &str) -> Option<Value> {
        self.payload.remove(name)
    }

    /// Returns `true` if the payload has the field.
    #[must_use]
    pub fn contains_field(&self, name: &str) -> bool {
        self.payload.contains_key(name)
    }

    /// Iterates over the payload fields in order.
    pub fn fields(&self) -> serde_json::map::Iter<'_> {
        self.payload.iter()
    }

    /// Returns the whole payload.
    #[must_use]
    pub const fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    /// Consumes the object, returning its payload.
    #[must_use]
    pub fn into_payload(self) -> Map<String, Value> {
        self.payload
    }

    /// Returns the canonical `resource` URL, if the object has one.
    ///
    /// Empty strings and non-string values count as absent.
    #[must_use]
    pub fn resource(&self) -> Option<&str> {
        self.payload
            .get("resource")
            .and_then(Value::as_str)
            .filter(|resource| !resource.is_empty())
    }

    /// Returns the `id` field, if any.
    #[must_use]
    pub fn id(&self) -> Option<&Value> {
        self.payload.get("id")
    }

    /// Returns `true` if the object exists on the server.
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.resource().is_some()
    }

    /// Returns the endpoint instance verbs address, with an optional action.
    ///
    /// Prefers the `resource` URL; otherwise builds `v{ver}/{prefix}{id}/`,
    /// or the collection endpoint when there is no `id` either.
    #[must_use]
    pub fn instance_endpoint(&self, action: Option<&str>) -> String {
        match self.resource() {
            Some(resource) => append_action(resource.to_string(), action),
            None => {
                let id = self.id().map(id_segment);
                self.interface.versioned_endpoint(id.as_deref(), action)
            }
        }
    }

    /// Creates the object on the server and merges the response into it.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::AlreadyPersisted`] without sending a request
    /// if the object already has a `resource`. Transport, envelope and shape
    /// errors propagate; the payload is left untouched on failure.
    pub async fn create(&mut self, headers: Option<&StringMap>) -> Result<&mut Self, ResourceError> {
        if let Some(resource) = self.resource() {
            return Err(ResourceError::AlreadyPersisted {
                resource: resource.to_string(),
            });
        }

        let endpoint = self.interface.versioned_endpoint(None, None);
        tracing::debug!(class = %self.class_name(), endpoint = %endpoint, "Creating resource");

        let response = self
            .interface
            .client()
            .post(&endpoint, &Value::Object(self.payload.clone()), headers)
            .await?;
        self.merge(unwind_result(response)?)?;
        Ok(self)
    }

    /// Sends the whole payload to the `resource` URL and merges the response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotPersisted`] without sending a request if
    /// the object has no `resource`. Transport, envelope and shape errors
    /// propagate.
    pub async fn update(&mut self, headers: Option<&StringMap>) -> Result<&mut Self, ResourceError> {
        let endpoint = self.persisted_endpoint("update")?;
        tracing::debug!(class = %self.class_name(), endpoint = %endpoint, "Updating resource");

        let response = self
            .interface
            .client()
            .put(&endpoint, &Value::Object(self.payload.clone()), headers)
            .await?;
        self.merge(unwind_result(response)?)?;
        Ok(self)
    }

    /// Fetches the instance (or an action below it) and returns the
    /// unwrapped data. The payload is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport failure and
    /// [`ResourceError::InvalidEnvelope`] if the response has no `data`.
    pub async fn get(&self, options: &RequestOptions) -> Result<Value, ResourceError> {
        let endpoint = self.instance_endpoint(options.action_name());
        tracing::debug!(class = %self.class_name(), endpoint = %endpoint, "Fetching instance");

        let response = self
            .interface
            .client()
            .get(&endpoint, options.query_params(), options.extra_headers())
            .await?;
        unwind_result(response)
    }

    /// Sends `data` to the instance (or an action below it) and returns the
    /// unwrapped data. The payload is not modified.
    ///
    /// Query parameters in `options` are ignored; PUT carries no query.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport failure and
    /// [`ResourceError::InvalidEnvelope`] if the response has no `data`.
    pub async fn put(&self, data: &Value, options: &RequestOptions) -> Result<Value, ResourceError> {
        let endpoint = self.instance_endpoint(options.action_name());
        tracing::debug!(class = %self.class_name(), endpoint = %endpoint, "Putting to instance");

        let response = self
            .interface
            .client()
            .put(&endpoint, data, options.extra_headers())
            .await?;
        unwind_result(response)
    }

    /// Deletes the object on the server and merges the response into it.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotPersisted`] without sending a request if
    /// the object has no `resource`. Transport, envelope and shape errors
    /// propagate.
    pub async fn delete(&mut self, headers: Option<&StringMap>) -> Result<&mut Self, ResourceError> {
        let endpoint = self.persisted_endpoint("delete")?;
        tracing::debug!(class = %self.class_name(), endpoint = %endpoint, "Deleting resource");

        let response = self.interface.client().delete(&endpoint, headers).await?;
        self.merge(unwind_result(response)?)?;
        Ok(self)
    }

    fn persisted_endpoint(&self, operation: &'static str) -> Result<String, ResourceError> {
        self.resource()
            .map(str::to_string)
            .ok_or(ResourceError::NotPersisted { operation })
    }

    /// Merges response fields into the payload; response values win.
    ///
    /// `null` data merges nothing.
    fn merge(&mut self, data: Value) -> Result<(), ResourceError> {
        match data {
            Value::Object(fields) => {
                self.payload.extend(fields);
                Ok(())
            }
            Value::Null => Ok(()),
            other => Err(ResourceError::InvalidResponseShape {
                found: json_type_name(&other),
            }),
        }
    }
}

impl Serialize for ResourceObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.payload.serialize(serializer)
    }
}

impl fmt::Debug for ResourceObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceObject")
            .field("class_name", &self.class_name())
            .field("endpoint", &self.interface.endpoint())
            .field("payload", &self.payload)
            .finish()
    }
}

impl fmt::Display for ResourceObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.class_name(), Value::Object(self.payload.clone()))
    }
}
