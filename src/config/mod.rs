//! Configuration types for the API client.
//!
//! This module provides the configuration used to construct a
//! [`StackApi`](crate::StackApi) entry point.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StackConfig`]: The configuration struct holding all client settings
//! - [`StackConfigBuilder`]: A builder for constructing [`StackConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`EntrypointUrl`]: A validated base URL for relative endpoints
//! - [`ApiVersion`]: The API version used in endpoint paths
//!
//! # Example
//!
//! ```rust
//! use stackapi::{StackConfig, ApiKey, ApiVersion};
//!
//! let config = StackConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .api_version(ApiVersion::default())
//!     .build();
//!
//! assert!(config.api_key().is_some());
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiKey, EntrypointUrl};
pub use version::ApiVersion;

/// Configuration for the API client.
///
/// Holds the entrypoint, API version and credential settings. Whether the
/// credentials are sufficient is decided when the entry point is built,
/// because a custom transport needs none.
///
/// # Thread Safety
///
/// `StackConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug, Default)]
pub struct StackConfig {
    entrypoint: EntrypointUrl,
    api_version: ApiVersion,
    api_key: Option<ApiKey>,
    use_custom_headers: bool,
    user_agent_prefix: Option<String>,
}

impl StackConfig {
    /// Creates a new builder for constructing a `StackConfig`.
    #[must_use]
    pub fn builder() -> StackConfigBuilder {
        StackConfigBuilder::new()
    }

    /// Returns the entrypoint URL.
    #[must_use]
    pub const fn entrypoint(&self) -> &EntrypointUrl {
        &self.entrypoint
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the API key, if configured.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    /// Returns whether callers supply their own authentication headers.
    #[must_use]
    pub const fn use_custom_headers(&self) -> bool {
        self.use_custom_headers
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify StackConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StackConfig>();
};

/// Builder for constructing [`StackConfig`] instances.
///
/// # Defaults
///
/// - `entrypoint`: `https://api.stackdriver.com/`
/// - `api_version`: `0.2`
/// - `api_key`: `None`
/// - `use_custom_headers`: `false`
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use stackapi::{StackConfig, ApiKey, EntrypointUrl};
///
/// let config = StackConfig::builder()
///     .entrypoint(EntrypointUrl::new("https://api.example.com/").unwrap())
///     .api_key(ApiKey::new("key").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct StackConfigBuilder {
    entrypoint: Option<EntrypointUrl>,
    api_version: Option<ApiVersion>,
    api_key: Option<ApiKey>,
    use_custom_headers: bool,
    user_agent_prefix: Option<String>,
}

impl StackConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the entrypoint URL.
    #[must_use]
    pub fn entrypoint(mut self, entrypoint: EntrypointUrl) -> Self {
        self.entrypoint = Some(entrypoint);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the API key sent with every request.
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Enables custom-header mode.
    ///
    /// In this mode no API key header is added; callers pass authentication
    /// headers with each request instead.
    #[must_use]
    pub const fn use_custom_headers(mut self, enabled: bool) -> Self {
        self.use_custom_headers = enabled;
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`StackConfig`].
    #[must_use]
    pub fn build(self) -> StackConfig {
        StackConfig {
            entrypoint: self.entrypoint.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_default(),
            api_key: self.api_key,
            use_custom_headers: self.use_custom_headers,
            user_agent_prefix: self.user_agent_prefix,
        }
    }
}
