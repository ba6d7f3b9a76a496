//! REST client handle shared across resources.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::clients::{HttpError, StringMap, Transport};
use crate::config::{ApiVersion, EntrypointUrl};

/// Transport plus the version and entrypoint it talks to.
///
/// The handle carries no mutable state, so one instance is shared through an
/// `Arc` by every interface and object of an entry point.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`; concurrent use is as safe as the
/// underlying transport.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use stackapi::clients::{HttpClient, RestClient};
/// use stackapi::StackConfig;
///
/// let config = StackConfig::builder().use_custom_headers(true).build();
/// let transport = Arc::new(HttpClient::new(&config)?);
/// let client = RestClient::new(transport, config.api_version().clone(), config.entrypoint().clone());
///
/// let body = client.get("v0.2/metric/", None, None).await?;
/// ```
#[derive(Clone)]
pub struct RestClient {
    transport: Arc<dyn Transport>,
    api_version: ApiVersion,
    entrypoint: EntrypointUrl,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new client handle over the given transport.
    #[must_use]
    pub fn new(
        transport: Arc<dyn Transport>,
        api_version: ApiVersion,
        entrypoint: EntrypointUrl,
    ) -> Self {
        Self {
            transport,
            api_version,
            entrypoint,
        }
    }

    /// Returns the API version used in versioned endpoints.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the entrypoint URL.
    #[must_use]
    pub const fn entrypoint(&self) -> &EntrypointUrl {
        &self.entrypoint
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// Returns whatever [`HttpError`] the transport reports.
    pub async fn get(
        &self,
        endpoint: &str,
        params: Option<&StringMap>,
        headers: Option<&StringMap>,
    ) -> Result<Value, HttpError> {
        self.transport.get(endpoint, params, headers).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns whatever [`HttpError`] the transport reports.
    pub async fn post(
        &self,
        endpoint: &str,
        data: &Value,
        headers: Option<&StringMap>,
    ) -> Result<Value, HttpError> {
        self.transport.post(endpoint, data, headers).await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns whatever [`HttpError`] the transport reports.
    pub async fn put(
        &self,
        endpoint: &str,
        data: &Value,
        headers: Option<&StringMap>,
    ) -> Result<Value, HttpError> {
        self.transport.put(endpoint, data, headers).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns whatever [`HttpError`] the transport reports.
    pub async fn delete(
        &self,
        endpoint: &str,
        headers: Option<&StringMap>,
    ) -> Result<Value, HttpError> {
        self.transport.delete(endpoint, headers).await
    }
}

impl fmt::Debug for RestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClient")
            .field("entrypoint", &self.entrypoint.as_ref())
            .field("api_version", &self.api_version.as_ref())
            .finish_non_exhaustive()
    }
}
