//! Integration tests for plugging a custom transport into the entry point.
//!
//! The transport here serves an in-memory collection, so these tests verify
//! that every verb goes through the public `Transport` seam with the expected
//! endpoints and bodies, without any network.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use stackapi::clients::{HttpError, HttpResponseError, StringMap, Transport};
use stackapi::resource::RequestOptions;
use stackapi::{ApiVersion, ResourceError, StackApi, StackConfig};

const BASE: &str = "https://stack.test/";

/// In-memory store of metrics keyed by id.
#[derive(Debug, Default)]
struct InMemoryTransport {
    metrics: Mutex<BTreeMap<u64, Value>>,
    next_id: Mutex<u64>,
    log: Mutex<Vec<String>>,
}

impl InMemoryTransport {
    fn record(&self, method: &str, endpoint: &str) {
        self.log.lock().unwrap().push(format!("{method} {endpoint}"));
    }

    fn log(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    fn id_from(endpoint: &str) -> Option<u64> {
        endpoint
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse().ok())
    }

    fn not_found() -> HttpError {
        HttpError::Response(HttpResponseError {
            code: 404,
            message: r#"{"error":"Not found"}"#.to_string(),
            error_reference: None,
        })
    }
}

#[async_trait]
impl Transport for InMemoryTransport {
    async fn get(
        &self,
        endpoint: &str,
        _params: Option<&StringMap>,
        _headers: Option<&StringMap>,
    ) -> Result<Value, HttpError> {
        self.record("GET", endpoint);
        let metrics = self.metrics.lock().unwrap();
        match Self::id_from(endpoint) {
            Some(id) => metrics
                .get(&id)
                .map(|metric| json!({ "data": metric }))
                .ok_or_else(Self::not_found),
            None => Ok(json!({ "data": metrics.values().cloned().collect::<Vec<_>>() })),
        }
    }

    async fn post(
        &self,
        endpoint: &str,
        data: &Value,
        _headers: Option<&StringMap>,
    ) -> Result<Value, HttpError> {
        self.record("POST", endpoint);
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let id = *next_id;

        let mut metric = data.clone();
        metric["id"] = json!(id);
        metric["resource"] = json!(format!("{BASE}v0.2/metric/{id}/"));
        self.metrics.lock().unwrap().insert(id, metric.clone());
        Ok(json!({ "data": metric }))
    }

    async fn put(
        &self,
        endpoint: &str,
        data: &Value,
        _headers: Option<&StringMap>,
    ) -> Result<Value, HttpError> {
        self.record("PUT", endpoint);
        let id = Self::id_from(endpoint).ok_or_else(Self::not_found)?;
        self.metrics.lock().unwrap().insert(id, data.clone());
        Ok(json!({ "data": data }))
    }

    async fn delete(
        &self,
        endpoint: &str,
        _headers: Option<&StringMap>,
    ) -> Result<Value, HttpError> {
        self.record("DELETE", endpoint);
        let id = Self::id_from(endpoint).ok_or_else(Self::not_found)?;
        self.metrics
            .lock()
            .unwrap()
            .remove(&id)
            .ok_or_else(Self::not_found)?;
        Ok(json!({ "data": {"deleted": true} }))
    }
}

fn create_stack() -> (Arc<InMemoryTransport>, StackApi) {
    let transport = Arc::new(InMemoryTransport::default());
    let stack = StackApi::with_transport(StackConfig::default(), transport.clone());
    (transport, stack)
}

#[tokio::test]
async fn test_round_trip_through_custom_transport() {
    let (transport, stack) = create_stack();
    let metric = stack.navigate_class("Metric").unwrap();

    let mut cpu = metric.call(Some(json!({"name": "cpu"}))).unwrap();
    cpu.create(None).await.unwrap();
    assert_eq!(cpu.resource(), Some("https://stack.test/v0.2/metric/1/"));

    let items = metric.list(&RequestOptions::default()).await.unwrap();
    assert_eq!(items.len(), 1);
    let listed = items[0].as_object().unwrap();
    assert_eq!(listed.field("name"), Some(&json!("cpu")));
    assert_eq!(listed.class_name(), "Metric");

    cpu.set_field("name", "cpu-total");
    cpu.update(None).await.unwrap();
    cpu.delete(None).await.unwrap();

    assert_eq!(
        transport.log(),
        vec![
            "POST v0.2/metric/",
            "GET v0.2/metric/",
            "PUT https://stack.test/v0.2/metric/1/",
            "DELETE https://stack.test/v0.2/metric/1/",
        ]
    );
}

#[tokio::test]
async fn test_custom_transport_errors_are_passed_through() {
    let (_, stack) = create_stack();
    let metric = stack.navigate_class("Metric").unwrap();

    let error = metric
        .get(Some("99"), &RequestOptions::default())
        .await
        .unwrap_err();

    match error {
        ResourceError::Http(http_error) => assert_eq!(http_error.status_code(), Some(404)),
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_api_version_is_used_in_paths() {
    let transport = Arc::new(InMemoryTransport::default());
    let config = StackConfig::builder()
        .api_version(ApiVersion::new("v1.0").unwrap())
        .build();
    let stack = StackApi::with_transport(config, transport.clone());

    stack
        .navigate_class("Alert")
        .unwrap()
        .list(&RequestOptions::default())
        .await
        .unwrap();

    assert_eq!(transport.log(), vec!["GET v1.0/alert/"]);
}
