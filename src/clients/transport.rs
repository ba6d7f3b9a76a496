//! The transport seam between resources and the network.
//!
//! Every resource verb ends in exactly one call to a [`Transport`]. The
//! default implementation is [`HttpClient`](crate::clients::HttpClient);
//! callers may plug in their own (a proxy, a recorder, an in-process fake)
//! through [`StackApi::with_transport`](crate::StackApi::with_transport).

use std::collections::HashMap;
use std::fmt::Debug;

use async_trait::async_trait;
use serde_json::Value;

use crate::clients::HttpError;

/// Query parameters or headers attached to a single call.
pub type StringMap = HashMap<String, String>;

/// Performs the four HTTP verbs and returns the decoded JSON body.
///
/// `endpoint` is either a versioned relative path (`v0.2/metric/1/`) or an
/// absolute resource URL returned by the server; implementations must accept
/// both. Errors are passed through to the caller untouched.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use serde_json::{json, Value};
/// use stackapi::clients::{HttpError, StringMap, Transport};
///
/// #[derive(Debug)]
/// struct Offline;
///
/// #[async_trait]
/// impl Transport for Offline {
///     async fn get(&self, _: &str, _: Option<&StringMap>, _: Option<&StringMap>) -> Result<Value, HttpError> {
///         Ok(json!({"data": []}))
///     }
///     async fn post(&self, _: &str, data: &Value, _: Option<&StringMap>) -> Result<Value, HttpError> {
///         Ok(json!({"data": data}))
///     }
///     async fn put(&self, _: &str, data: &Value, _: Option<&StringMap>) -> Result<Value, HttpError> {
///         Ok(json!({"data": data}))
///     }
///     async fn delete(&self, _: &str, _: Option<&StringMap>) -> Result<Value, HttpError> {
///         Ok(json!({"data": {}}))
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Debug + Send + Sync {
    /// Issues a GET request.
    async fn get(
        &self,
        endpoint: &str,
        params: Option<&StringMap>,
        headers: Option<&StringMap>,
    ) -> Result<Value, HttpError>;

    /// Issues a POST request with a JSON body.
    async fn post(
        &self,
        endpoint: &str,
        data: &Value,
        headers: Option<&StringMap>,
    ) -> Result<Value, HttpError>;

    /// Issues a PUT request with a JSON body.
    async fn put(
        &self,
        endpoint: &str,
        data: &Value,
        headers: Option<&StringMap>,
    ) -> Result<Value, HttpError>;

    /// Issues a DELETE request.
    async fn delete(&self, endpoint: &str, headers: Option<&StringMap>)
        -> Result<Value, HttpError>;
}
