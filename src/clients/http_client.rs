//! HTTP client for API communication.
//!
//! This module provides the [`HttpClient`] type, the default
//! [`Transport`](crate::clients::Transport) backed by `reqwest`.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;

use crate::clients::errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
use crate::clients::http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::{StringMap, Transport};
use crate::config::{EntrypointUrl, StackConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-stackdriver-apikey";

/// HTTP client for making requests to the API.
///
/// The client handles:
/// - Resolving relative endpoints against the configured entrypoint
/// - Passing absolute resource URLs through unchanged
/// - Default headers including User-Agent and the API key
/// - Error serialization for non-2xx responses
///
/// Each call is a single request; there is no retry.
///
/// # Example
///
/// ```rust,ignore
/// use stackapi::{StackConfig, ApiKey};
/// use stackapi::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = StackConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .build();
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "v0.2/metric/")
///     .build()
///     .unwrap();
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL relative endpoints are joined onto.
    entrypoint: EntrypointUrl,
    /// Default headers to include in all requests.
    default_headers: StringMap,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// The API key header is only added when a key is configured and
    /// custom-header mode is off.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &StackConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}stackapi-rust v{SDK_VERSION}");

        let mut default_headers = StringMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        if !config.use_custom_headers() {
            if let Some(api_key) = config.api_key() {
                default_headers.insert(API_KEY_HEADER.to_string(), api_key.as_ref().to_string());
            }
        }

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            entrypoint: config.entrypoint().clone(),
            default_headers,
        })
    }

    /// Returns the entrypoint relative endpoints are resolved against.
    #[must_use]
    pub const fn entrypoint(&self) -> &EntrypointUrl {
        &self.entrypoint
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &StringMap {
        &self.default_headers
    }

    /// Resolves an endpoint to the URL that will be requested.
    #[must_use]
    pub fn url_for(&self, request: &HttpRequest) -> String {
        if request.is_absolute() {
            request.endpoint.clone()
        } else {
            self.entrypoint.join(&request.endpoint)
        }
    }

    /// Sends an HTTP request to the API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request);

        let headers = self.header_map(request.extra_headers.as_ref())?;

        tracing::debug!(method = %request.http_method, %url, "Sending API request");

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        }
        .headers(headers);

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.json(body);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or_else(|_| {
                if code >= 500 {
                    serde_json::json!({ "raw_body": body_text })
                } else {
                    serde_json::json!({})
                }
            })
        };

        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        tracing::debug!(code, %url, "API request failed");

        Err(HttpError::Response(HttpResponseError {
            code,
            message: response.serialize_error(),
            error_reference: response.request_id().map(String::from),
        }))
    }

    /// Merges the default headers with per-call headers.
    ///
    /// Header names are case-insensitive, so a per-call header replaces a
    /// default of the same name in any letter case.
    fn header_map(&self, extra: Option<&StringMap>) -> Result<HeaderMap, InvalidHttpRequestError> {
        let mut headers = HeaderMap::new();
        for (name, value) in self.default_headers.iter().chain(extra.into_iter().flatten()) {
            let invalid = || InvalidHttpRequestError::InvalidHeader { name: name.clone() };
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            headers.insert(name, value);
        }
        Ok(headers)
    }

    async fn send_for_body(&self, request: HttpRequest) -> Result<Value, HttpError> {
        self.request(request).await.map(|response| response.body)
    }

    fn builder(
        method: HttpMethod,
        endpoint: &str,
        headers: Option<&StringMap>,
    ) -> HttpRequestBuilder {
        let builder = HttpRequest::builder(method, endpoint);
        match headers {
            Some(headers) => builder.extra_headers(headers.clone()),
            None => builder,
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn get(
        &self,
        endpoint: &str,
        params: Option<&StringMap>,
        headers: Option<&StringMap>,
    ) -> Result<Value, HttpError> {
        let mut builder = Self::builder(HttpMethod::Get, endpoint, headers);
        if let Some(params) = params {
            builder = builder.query(params.clone());
        }
        self.send_for_body(builder.build()?).await
    }

    async fn post(
        &self,
        endpoint: &str,
        data: &Value,
        headers: Option<&StringMap>,
    ) -> Result<Value, HttpError> {
        let request = Self::builder(HttpMethod::Post, endpoint, headers)
            .body(data.clone())
            .build()?;
        self.send_for_body(request).await
    }

    async fn put(
        &self,
        endpoint: &str,
        data: &Value,
        headers: Option<&StringMap>,
    ) -> Result<Value, HttpError> {
        let request = Self::builder(HttpMethod::Put, endpoint, headers)
            .body(data.clone())
            .build()?;
        self.send_for_body(request).await
    }

    async fn delete(
        &self,
        endpoint: &str,
        headers: Option<&StringMap>,
    ) -> Result<Value, HttpError> {
        let request = Self::builder(HttpMethod::Delete, endpoint, headers).build()?;
        self.send_for_body(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(entrypoint: &str) -> StackConfig {
        StackConfig::builder()
            .entrypoint(EntrypointUrl::new(entrypoint).unwrap())
            .api_key(ApiKey::new("test-key").unwrap())
            .build()
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&StackConfig::builder().build()).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("stackapi-rust v"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = StackConfig::builder().user_agent_prefix("MyApp/1.0").build();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | stackapi-rust v"));
    }

    #[test]
    fn test_api_key_header_injection() {
        let client = HttpClient::new(&config_for("https://api.example.com/")).unwrap();

        assert_eq!(
            client.default_headers().get(API_KEY_HEADER),
            Some(&"test-key".to_string())
        );
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_custom_header_mode_omits_api_key() {
        let config = StackConfig::builder()
            .api_key(ApiKey::new("test-key").unwrap())
            .use_custom_headers(true)
            .build();
        let client = HttpClient::new(&config).unwrap();

        assert!(client.default_headers().get(API_KEY_HEADER).is_none());
    }

    #[test]
    fn test_per_call_headers_replace_defaults_in_any_case() {
        let client = HttpClient::new(&config_for("https://api.example.com/")).unwrap();
        let mut extra = StringMap::new();
        extra.insert("X-Stackdriver-Apikey".to_string(), "per-call-key".to_string());
        extra.insert("accept".to_string(), "text/plain".to_string());

        let headers = client.header_map(Some(&extra)).unwrap();

        let keys: Vec<_> = headers.get_all(API_KEY_HEADER).iter().collect();
        assert_eq!(keys, vec!["per-call-key"]);
        let accept: Vec<_> = headers.get_all("Accept").iter().collect();
        assert_eq!(accept, vec!["text/plain"]);
        assert_eq!(headers.get_all("user-agent").iter().count(), 1);
    }

    #[test]
    fn test_invalid_header_name_is_rejected() {
        let client = HttpClient::new(&config_for("https://api.example.com/")).unwrap();
        let mut extra = StringMap::new();
        extra.insert("bad header".to_string(), "v".to_string());

        assert!(matches!(
            client.header_map(Some(&extra)),
            Err(InvalidHttpRequestError::InvalidHeader { name }) if name == "bad header"
        ));
    }

    #[tokio::test]
    async fn test_per_call_api_key_is_sent_once() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v0.2/metric/"))
            .and(header(API_KEY_HEADER, "per-call-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new(&config_for(&server.uri())).unwrap();
        let mut headers = StringMap::new();
        headers.insert("X-Stackdriver-Apikey".to_string(), "per-call-key".to_string());

        let body = client
            .get("v0.2/metric/", None, Some(&headers))
            .await
            .unwrap();
        assert_eq!(body, json!({"data": []}));
    }

    #[test]
    fn test_url_resolution_for_relative_and_absolute_endpoints() {
        let client = HttpClient::new(&config_for("https://api.example.com/")).unwrap();

        let relative = HttpRequest::builder(HttpMethod::Get, "v0.2/metric/")
            .build()
            .unwrap();
        assert_eq!(client.url_for(&relative), "https://api.example.com/v0.2/metric/");

        let absolute = HttpRequest::builder(HttpMethod::Get, "https://other.example.com/v0.2/metric/9/")
            .build()
            .unwrap();
        assert_eq!(
            client.url_for(&absolute),
            "https://other.example.com/v0.2/metric/9/"
        );
    }

    #[tokio::test]
    async fn test_get_sends_api_key_and_query_params() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v0.2/metric/"))
            .and(header(API_KEY_HEADER, "test-key"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new(&config_for(&server.uri())).unwrap();
        let mut params = StringMap::new();
        params.insert("limit".to_string(), "5".to_string());

        let body = client
            .get("v0.2/metric/", Some(&params), None)
            .await
            .unwrap();
        assert_eq!(body, json!({"data": []}));
    }

    #[tokio::test]
    async fn test_post_sends_json_body_and_extra_headers() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v0.2/metric/"))
            .and(header("content-type", "application/json"))
            .and(header("x-custom", "yes"))
            .and(body_json(json!({"name": "cpu"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": {"id": 1}})))
            .mount(&server)
            .await;

        let client = HttpClient::new(&config_for(&server.uri())).unwrap();
        let mut headers = StringMap::new();
        headers.insert("x-custom".to_string(), "yes".to_string());

        let body = client
            .post("v0.2/metric/", &json!({"name": "cpu"}), Some(&headers))
            .await
            .unwrap();
        assert_eq!(body["data"]["id"], 1);
    }

    #[tokio::test]
    async fn test_absolute_resource_url_is_requested_verbatim() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/v0.2/metric/7/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
            .expect(1)
            .mount(&server)
            .await;

        // The entrypoint points elsewhere; only the absolute URL may be hit.
        let client = HttpClient::new(&config_for("http://127.0.0.1:1/")).unwrap();
        let resource = format!("{}/v0.2/metric/7/", server.uri());

        let body = client.delete(&resource, None).await.unwrap();
        assert_eq!(body, json!({"data": {}}));
    }

    #[tokio::test]
    async fn test_empty_body_decodes_to_empty_object() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/v0.2/metric/1/"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = HttpClient::new(&config_for(&server.uri())).unwrap();
        let body = client
            .put("v0.2/metric/1/", &json!({}), None)
            .await
            .unwrap();
        assert_eq!(body, json!({}));
    }

    #[tokio::test]
    async fn test_error_response_maps_to_http_response_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v0.2/metric/404/"))
            .respond_with(
                ResponseTemplate::new(404)
                    .insert_header("x-request-id", "req-404")
                    .set_body_json(json!({"error": "Not found"})),
            )
            .mount(&server)
            .await;

        let client = HttpClient::new(&config_for(&server.uri())).unwrap();
        let result = client.get("v0.2/metric/404/", None, None).await;

        match result {
            Err(HttpError::Response(e)) => {
                assert_eq!(e.code, 404);
                assert!(e.message.contains("Not found"));
                assert_eq!(e.error_reference.as_deref(), Some("req-404"));
            }
            other => panic!("Expected HttpError::Response, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_server_error_keeps_raw_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v0.2/metric/"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad gateway"))
            .mount(&server)
            .await;

        let client = HttpClient::new(&config_for(&server.uri())).unwrap();
        let error = client.get("v0.2/metric/", None, None).await.unwrap_err();

        assert_eq!(error.status_code(), Some(502));
        assert!(error.to_string().contains("Bad gateway"));
    }
}
