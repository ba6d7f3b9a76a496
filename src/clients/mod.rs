//! Transport layer for API communication.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Transport`]: The seam every resource verb goes through
//! - [`HttpClient`]: The default `reqwest`-backed transport
//! - [`RestClient`]: Transport bound to an API version, shared by resources
//! - [`HttpRequest`] / [`HttpResponse`]: A single request and its parsed response
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`HttpError`]: Unified transport error type
//!
//! # Example
//!
//! ```rust,ignore
//! use stackapi::clients::{HttpClient, HttpRequest, HttpMethod};
//! use stackapi::{StackConfig, ApiKey};
//!
//! let config = StackConfig::builder()
//!     .api_key(ApiKey::new("key").unwrap())
//!     .build();
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "v0.2/metric/")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. Every call is exactly one request; failures are returned to the caller.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;
mod transport;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, API_KEY_HEADER, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use transport::{StringMap, Transport};

pub use rest::RestClient;
