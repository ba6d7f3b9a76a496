//! The API entry point.

use std::fmt;
use std::sync::Arc;

use crate::clients::{HttpClient, RestClient, Transport};
use crate::config::{ApiVersion, EntrypointUrl, StackConfig};
use crate::error::{ConfigError, StackApiError};
use crate::resource::{ResourceError, ResourceInterface};

/// Entry point from which resource classes are navigated.
///
/// `StackApi` owns one shared [`RestClient`]; every interface and object
/// reached from it uses that client.
///
/// # Example
///
/// ```rust,ignore
/// use stackapi::{ApiKey, StackApi, StackConfig};
/// use stackapi::resource::RequestOptions;
///
/// let config = StackConfig::builder()
///     .api_key(ApiKey::new("my-api-key")?)
///     .build();
/// let stack = StackApi::new(config)?;
///
/// let groups = stack.navigate_class("Group")?;
/// for group in groups.list(&RequestOptions::default()).await? {
///     println!("{}", group.payload()["name"]);
/// }
/// ```
#[derive(Clone)]
pub struct StackApi {
    client: Arc<RestClient>,
}

// Verify StackApi is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StackApi>();
};

impl StackApi {
    /// Creates an entry point over the default HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns [`StackApiError::Config`] with
    /// [`ConfigError::MissingCredentials`] when the config has no API key and
    /// custom-header mode is off, and [`StackApiError::Http`] if the HTTP
    /// client cannot be created.
    pub fn new(config: StackConfig) -> Result<Self, StackApiError> {
        if config.api_key().is_none() && !config.use_custom_headers() {
            return Err(ConfigError::MissingCredentials.into());
        }

        let transport = Arc::new(HttpClient::new(&config)?);
        tracing::debug!(
            entrypoint = %config.entrypoint(),
            api_version = %config.api_version(),
            "Created API entry point"
        );
        Ok(Self::with_transport(config, transport))
    }

    /// Creates an entry point over a caller-supplied transport.
    ///
    /// No credential is required; the transport is responsible for
    /// authentication. The config only contributes the entrypoint and
    /// API version.
    #[must_use]
    pub fn with_transport(config: StackConfig, transport: Arc<dyn Transport>) -> Self {
        let client = RestClient::new(
            transport,
            config.api_version().clone(),
            config.entrypoint().clone(),
        );
        Self {
            client: Arc::new(client),
        }
    }

    /// Navigates to a top-level resource class, e.g. `"Metric"` or `"ApiKey"`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] unless `name` starts with an
    /// uppercase letter.
    pub fn navigate_class(&self, name: &str) -> Result<ResourceInterface, ResourceError> {
        ResourceInterface::root(name, Arc::clone(&self.client))
    }

    /// Returns the API version used in endpoint paths.
    #[must_use]
    pub fn api_version(&self) -> &ApiVersion {
        self.client.api_version()
    }

    /// Returns the entrypoint URL.
    #[must_use]
    pub fn entrypoint(&self) -> &EntrypointUrl {
        self.client.entrypoint()
    }

    /// Returns the shared REST client.
    #[must_use]
    pub const fn rest_client(&self) -> &Arc<RestClient> {
        &self.client
    }
}

impl fmt::Debug for StackApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackApi")
            .field("client", &self.client)
            .finish()
    }
}
