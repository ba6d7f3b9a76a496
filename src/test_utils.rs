//! Shared helpers for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::clients::{HttpError, RestClient, StringMap, Transport};
use crate::config::{ApiVersion, EntrypointUrl};

/// One call observed by [`RecordingTransport`].
#[derive(Clone, Debug)]
pub struct RecordedCall {
    pub method: &'static str,
    pub endpoint: String,
    pub data: Option<Value>,
    pub params: Option<StringMap>,
    pub headers: Option<StringMap>,
}

/// Transport that records every call and replays queued responses in order.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<RecordedCall>>,
    responses: Mutex<VecDeque<Result<Value, HttpError>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, body: Value) {
        self.responses.lock().unwrap().push_back(Ok(body));
    }

    pub fn push_error(&self, error: HttpError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> RecordedCall {
        self.calls().pop().expect("no call recorded")
    }

    fn record(
        &self,
        method: &'static str,
        endpoint: &str,
        data: Option<&Value>,
        params: Option<&StringMap>,
        headers: Option<&StringMap>,
    ) -> Result<Value, HttpError> {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            endpoint: endpoint.to_string(),
            data: data.cloned(),
            params: params.cloned(),
            headers: headers.cloned(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(HttpError::transport("no response queued")))
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get(
        &self,
        endpoint: &str,
        params: Option<&StringMap>,
        headers: Option<&StringMap>,
    ) -> Result<Value, HttpError> {
        self.record("GET", endpoint, None, params, headers)
    }

    async fn post(
        &self,
        endpoint: &str,
        data: &Value,
        headers: Option<&StringMap>,
    ) -> Result<Value, HttpError> {
        self.record("POST", endpoint, Some(data), None, headers)
    }

    async fn put(
        &self,
        endpoint: &str,
        data: &Value,
        headers: Option<&StringMap>,
    ) -> Result<Value, HttpError> {
        self.record("PUT", endpoint, Some(data), None, headers)
    }

    async fn delete(
        &self,
        endpoint: &str,
        headers: Option<&StringMap>,
    ) -> Result<Value, HttpError> {
        self.record("DELETE", endpoint, None, None, headers)
    }
}

/// Builds a shared client over a fresh [`RecordingTransport`].
pub fn recording_client() -> (Arc<RecordingTransport>, Arc<RestClient>) {
    let transport = Arc::new(RecordingTransport::new());
    let client = Arc::new(RestClient::new(
        transport.clone(),
        ApiVersion::default(),
        EntrypointUrl::default(),
    ));
    (transport, client)
}
