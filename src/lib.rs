//! # Stackdriver API Rust Client
//!
//! A dynamic client for the Stackdriver REST API. Resource classes are not
//! generated Rust types: they are navigated by name at runtime, and every
//! resource instance is an ordered JSON object bound to the interface it came
//! from.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`StackConfig`] and [`StackConfigBuilder`]
//! - Validated newtypes for the API key, entrypoint URL and API version
//! - The [`StackApi`] entry point and nested [`ResourceInterface`] navigation
//! - [`ResourceObject`] instances with create, update, get, put and delete verbs
//! - A pluggable [`Transport`] with a `reqwest`-backed default ([`HttpClient`])
//!
//! ## Quick Start
//!
//! ```rust
//! use stackapi::{ApiKey, StackApi, StackConfig};
//!
//! let config = StackConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build();
//! let stack = StackApi::new(config).unwrap();
//!
//! let threshold = stack
//!     .navigate_class("Metric")
//!     .unwrap()
//!     .navigate_class("Threshold")
//!     .unwrap();
//! assert_eq!(threshold.endpoint(), "metric/threshold/");
//! ```
//!
//! ## Working With Resources
//!
//! ```rust,ignore
//! use serde_json::json;
//! use stackapi::resource::RequestOptions;
//!
//! let metric = stack.navigate_class("Metric")?;
//!
//! // Collection verbs return wrapped objects
//! for item in metric.list(&RequestOptions::default()).await? {
//!     if let Some(object) = item.as_object() {
//!         println!("{object}");
//!     }
//! }
//!
//! // Local construction makes no request until `create`
//! let mut cpu = metric.call(Some(json!({"name": "cpu"})))?;
//! cpu.create(None).await?;
//!
//! // Actions hang off an instance
//! let history = cpu.get(&RequestOptions::new().action("history")).await?;
//! ```
//!
//! ## Custom Transports
//!
//! Anything implementing [`Transport`] can replace the HTTP layer, e.g. to
//! add authentication schemes or to record traffic in tests:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stackapi::{StackApi, StackConfig};
//!
//! let stack = StackApi::with_transport(StackConfig::default(), Arc::new(MyTransport::new()));
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Every verb is exactly one awaited round trip

pub mod clients;
pub mod config;
pub mod error;
pub mod resource;

mod client;

#[cfg(test)]
mod test_utils;

// Re-export public types at crate root for convenience
pub use client::StackApi;
pub use config::{ApiKey, ApiVersion, EntrypointUrl, StackConfig, StackConfigBuilder};
pub use error::{ConfigError, StackApiError};

// Re-export transport types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, RestClient, StringMap, Transport,
};

// Re-export resource types
pub use resource::{
    RequestOptions, ResourceData, ResourceError, ResourceInterface, ResourceObject, WrapResult,
};
