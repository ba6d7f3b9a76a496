//! Resource class interfaces.
//!
//! A [`ResourceInterface`] stands for one resource class at one URL prefix.
//! It performs collection-level verbs and constructs [`ResourceObject`]s.
//! Navigating from an interface (or an object) to a further class yields a
//! nested interface whose prefix extends the parent's:
//!
//! ```text
//! Metric            -> metric/
//! Metric.Threshold  -> metric/threshold/
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::clients::RestClient;
use crate::resource::errors::json_type_name;
use crate::resource::{
    endpoint_segment, parse_class_from_resource, to_rest_class, unwind_result, versioned_endpoint,
    wrap_data, RequestOptions, ResourceData, ResourceError, ResourceObject, WrapResult,
};

/// Handle for one resource class at a given URL prefix.
///
/// Interfaces are cheap to clone; they share the [`RestClient`] of the entry
/// point they were navigated from.
///
/// # Example
///
/// ```rust,ignore
/// use stackapi::resource::RequestOptions;
///
/// let metric = stack.navigate_class("Metric")?;
/// for item in metric.list(&RequestOptions::default()).await? {
///     println!("{:?}", item.payload());
/// }
/// ```
#[derive(Clone)]
pub struct ResourceInterface {
    class_name: String,
    client: Arc<RestClient>,
    endpoint: String,
}

impl ResourceInterface {
    /// Creates an interface for `class_name` nested under `parent_prefix`.
    ///
    /// The class name is normalized with [`to_rest_class`] and the prefix
    /// becomes `{parent_prefix}{segment}/`. Pass `""` for a root interface.
    #[must_use]
    pub fn new(class_name: &str, client: Arc<RestClient>, parent_prefix: &str) -> Self {
        let class_name = to_rest_class(class_name);
        let endpoint = format!("{parent_prefix}{}/", class_name.to_lowercase());
        Self {
            class_name,
            client,
            endpoint,
        }
    }

    /// Creates a root interface after checking that `name` is a class name.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] unless `name` starts with an
    /// uppercase letter.
    pub fn root(name: &str, client: Arc<RestClient>) -> Result<Self, ResourceError> {
        check_class_name(name)?;
        Ok(Self::new(name, client, ""))
    }

    /// Returns the normalized class name, e.g. `"Api_Key"`.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Returns the URL prefix, e.g. `"metric/threshold/"`.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the shared REST client.
    #[must_use]
    pub const fn client(&self) -> &Arc<RestClient> {
        &self.client
    }

    /// Navigates to a nested resource class under this interface's prefix.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] unless `name` starts with an
    /// uppercase letter.
    pub fn navigate_class(&self, name: &str) -> Result<Self, ResourceError> {
        check_class_name(name)?;
        Ok(Self::new(name, Arc::clone(&self.client), &self.endpoint))
    }

    /// Builds the versioned endpoint for this interface.
    #[must_use]
    pub fn versioned_endpoint(&self, id: Option<&str>, action: Option<&str>) -> String {
        versioned_endpoint(self.client.api_version(), &self.endpoint, id, action)
    }

    /// Constructs a local object of this class. No request is made.
    ///
    /// `None` yields an empty payload. The object inherits this interface's
    /// prefix, so a later `create` posts to the nested collection.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidPayloadType`] if `data` is not an
    /// object, [`ResourceError::MalformedResourceUrl`] if its `resource` field
    /// is not a resolvable URL, and [`ResourceError::TypeMismatch`] if that
    /// URL names a different class.
    pub fn call(&self, data: Option<Value>) -> Result<ResourceObject, ResourceError> {
        let payload = match data {
            None => Map::new(),
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(ResourceError::InvalidPayloadType {
                    found: json_type_name(&other),
                })
            }
        };

        match payload.get("resource") {
            None => {}
            Some(Value::String(resource)) => {
                let found = parse_class_from_resource(resource)?;
                if endpoint_segment(&found) != endpoint_segment(&self.class_name) {
                    return Err(ResourceError::TypeMismatch {
                        expected: self.class_name.clone(),
                        found,
                    });
                }
            }
            Some(other) => {
                return Err(ResourceError::MalformedResourceUrl {
                    url: other.to_string(),
                })
            }
        }

        Ok(ResourceObject::from_parts(self.clone(), payload))
    }

    /// Lists the collection.
    ///
    /// Sends `GET v{version}/{prefix}[{action}/]` and wraps every item. A
    /// single-object response is returned as a one-element sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport failure, and the envelope
    /// and wrapping errors of [`unwind_result`] and [`wrap_data`].
    pub async fn list(&self, options: &RequestOptions) -> Result<Vec<WrapResult>, ResourceError> {
        self.get(None, options).await.map(ResourceData::into_vec)
    }

    /// Fetches the collection, or one instance when `id` is given.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport failure, and the envelope
    /// and wrapping errors of [`unwind_result`] and [`wrap_data`].
    pub async fn get(
        &self,
        id: Option<&str>,
        options: &RequestOptions,
    ) -> Result<ResourceData, ResourceError> {
        let endpoint = self.versioned_endpoint(id, options.action_name());
        tracing::debug!(class = %self.class_name, endpoint = %endpoint, "Fetching resource");

        let response = self
            .client
            .get(&endpoint, options.query_params(), options.extra_headers())
            .await?;
        wrap_data(&self.client, unwind_result(response)?)
    }

    /// Posts data to the collection and returns the unwrapped response data.
    ///
    /// The result is not wrapped as objects.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport failure and
    /// [`ResourceError::InvalidEnvelope`] if the response has no `data`.
    pub async fn post(
        &self,
        data: &Value,
        options: &RequestOptions,
    ) -> Result<Value, ResourceError> {
        let endpoint = self.versioned_endpoint(None, options.action_name());
        tracing::debug!(class = %self.class_name, endpoint = %endpoint, "Posting to collection");

        let response = self
            .client
            .post(&endpoint, data, options.extra_headers())
            .await?;
        unwind_result(response)
    }
}

fn check_class_name(name: &str) -> Result<(), ResourceError> {
    if name.starts_with(char::is_uppercase) {
        Ok(())
    } else {
        Err(ResourceError::NotFound {
            name: name.to_string(),
        })
    }
}

impl PartialEq for ResourceInterface {
    fn eq(&self, other: &Self) -> bool {
        self.class_name == other.class_name
            && self.endpoint == other.endpoint
            && Arc::ptr_eq(&self.client, &other.client)
    }
}

impl fmt::Debug for ResourceInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceInterface")
            .field("class_name", &self.class_name)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ResourceInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} interface ({})",
            self.class_name,
            self.client.entrypoint().join(&self.endpoint)
        )
    }
}
