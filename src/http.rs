/*!
 * HTTP collaborator used by providers.
 *
 * Providers never build requests themselves; they go through the
 * `HttpClient` capability so transports can be swapped (a `reqwest`
 * client in production, canned payloads in tests).
 */

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::fmt::Debug;
use std::time::Duration;

/// Outcome of a GET request
#[derive(Debug, Clone, PartialEq)]
pub enum HttpResponse {
    /// The request completed and the body parsed as JSON
    Ok {
        /// HTTP status code
        status: u16,
        /// Parsed JSON body
        data: serde_json::Value,
    },
    /// The request could not be completed
    Err {
        /// Short description of the failure
        error: String,
        /// Extra diagnostic text, if any
        details: Option<String>,
    },
}

impl HttpResponse {
    /// Successful response with status 200
    pub fn json(data: serde_json::Value) -> Self {
        Self::Ok { status: 200, data }
    }

    /// Failed request without details
    pub fn error(error: impl Into<String>) -> Self {
        Self::Err {
            error: error.into(),
            details: None,
        }
    }
}

/// Capability for issuing GET requests that return JSON
#[async_trait]
pub trait HttpClient: Send + Sync + Debug {
    /// Send a GET request with the given query parameters
    async fn get(&self, url: &str, params: &[(String, String)]) -> HttpResponse;
}

/// `HttpClient` backed by a `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Create a client with a request timeout and user agent
    pub fn new(timeout: Duration, user_agent: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .user_agent(user_agent)
                .build()
                .unwrap_or_default(),
        }
    }

    /// Wrap an existing `reqwest::Client`
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, params: &[(String, String)]) -> HttpResponse {
        debug!("GET {} with {} query parameters", url, params.len());

        let response = match self.client.get(url).query(params).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                return HttpResponse::Err {
                    error: "Request timeout".to_string(),
                    details: Some(e.to_string()),
                };
            }
            Err(e) if e.is_connect() => {
                return HttpResponse::Err {
                    error: "Connection failed".to_string(),
                    details: Some(e.to_string()),
                };
            }
            Err(e) => return HttpResponse::error(e.to_string()),
        };

        let status = response.status().as_u16();
        match response.json::<serde_json::Value>().await {
            Ok(data) => HttpResponse::Ok { status, data },
            Err(e) => HttpResponse::Err {
                error: format!("Invalid JSON response (HTTP {})", status),
                details: Some(e.to_string()),
            },
        }
    }
}
