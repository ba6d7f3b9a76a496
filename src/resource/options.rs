//! Per-call options for resource verbs.

use crate::clients::StringMap;

/// Optional query parameters, headers and action for a single verb call.
///
/// # Example
///
/// ```rust
/// use stackapi::resource::RequestOptions;
///
/// let options = RequestOptions::new()
///     .action("snooze")
///     .param("duration", "3600")
///     .header("x-stackdriver-apikey", "per-call-key");
///
/// assert_eq!(options.action_name(), Some("snooze"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    params: Option<StringMap>,
    headers: Option<StringMap>,
    action: Option<String>,
}

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn params(mut self, params: StringMap) -> Self {
        self.params = Some(params);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params
            .get_or_insert_with(StringMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets all headers at once.
    #[must_use]
    pub fn headers(mut self, headers: StringMap) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Adds a single header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(StringMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets the trailing action segment.
    #[must_use]
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Returns the query parameters, if any.
    #[must_use]
    pub const fn query_params(&self) -> Option<&StringMap> {
        self.params.as_ref()
    }

    /// Returns the headers, if any.
    #[must_use]
    pub const fn extra_headers(&self) -> Option<&StringMap> {
        self.headers.as_ref()
    }

    /// Returns the action segment, if any.
    #[must_use]
    pub fn action_name(&self) -> Option<&str> {
        self.action.as_deref()
    }
}
