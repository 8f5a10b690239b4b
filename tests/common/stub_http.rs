/*!
 * Stub HTTP collaborator
 *
 * Returns a canned `HttpResponse` and records every request so tests can
 * check what would have been sent over the wire.
 */

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use lexivariant::http::{HttpClient, HttpResponse};

/// A recorded GET request
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub url: String,
    pub params: Vec<(String, String)>,
}

impl RecordedRequest {
    /// Value of a query parameter
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// HTTP collaborator returning a fixed response
#[derive(Debug, Clone)]
pub struct StubHttp {
    response: HttpResponse,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubHttp {
    /// Stub answering every request with `response`
    pub fn new(response: HttpResponse) -> Self {
        Self {
            response,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Stub answering with a JSON body and status 200
    pub fn json(data: serde_json::Value) -> Self {
        Self::new(HttpResponse::json(data))
    }

    /// Stub failing every request
    pub fn failing(error: &str) -> Self {
        Self::new(HttpResponse::error(error))
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for StubHttp {
    async fn get(&self, url: &str, params: &[(String, String)]) -> HttpResponse {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            params: params.to_vec(),
        });
        self.response.clone()
    }
}
