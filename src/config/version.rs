//! API version definitions.
//!
//! This module provides the [`ApiVersion`] type naming the version segment
//! (`v{version}/`) that prefixes every relative endpoint.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// API version used to build versioned endpoints.
///
/// The version is stored without its `v` prefix; a leading `v` in the input
/// is stripped so that `"v0.2"` and `"0.2"` are equivalent.
///
/// # Example
///
/// ```rust
/// use stackapi::ApiVersion;
///
/// let version: ApiVersion = "v0.2".parse().unwrap();
/// assert_eq!(version, ApiVersion::default());
/// assert_eq!(version.to_string(), "0.2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiVersion(String);

impl ApiVersion {
    /// The version spoken by the public API.
    pub const DEFAULT: &'static str = "0.2";

    /// Creates a new validated API version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if the version is empty or
    /// contains `/` or whitespace.
    pub fn new(version: impl Into<String>) -> Result<Self, ConfigError> {
        let version = version.into();
        let trimmed = version.trim();
        let stripped = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);

        if stripped.is_empty()
            || stripped
                .chars()
                .any(|c| c == '/' || c.is_whitespace())
        {
            return Err(ConfigError::InvalidApiVersion { version });
        }

        Ok(Self(stripped.to_string()))
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl AsRef<str> for ApiVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ApiVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
