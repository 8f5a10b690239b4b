/*!
 * Integration tests for the reqwest HTTP client against a local mock server
 */

use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lexivariant::http::{HttpClient, HttpResponse, ReqwestHttpClient};
use lexivariant::providers::{MyMemoryProvider, Provider};

use crate::common::onion_payload;

fn client(timeout: Duration) -> ReqwestHttpClient {
    ReqwestHttpClient::new(timeout, "lexivariant-tests")
}

/// Test a full lookup over HTTP with the expected query string
#[tokio::test]
async fn test_mymemory_overHttp_withMatchingQuery_shouldTranslate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get"))
        .and(query_param("q", "лук"))
        .and(query_param("langpair", "ru|en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(onion_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let provider = MyMemoryProvider::new(Arc::new(client(Duration::from_secs(5))))
        .with_endpoint(format!("{}/get", server.uri()));

    let result = provider.translate("лук", "russian", "english").await;

    assert!(result.ok, "unexpected error: {:?}", result.error);
    assert_eq!(result.variants, vec!["bow", "leek", "onion", "bow and arrows"]);
}

#[tokio::test]
async fn test_reqwest_client_withJsonBody_shouldReturnStatusAndData() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({ "responseStatus": 429 })))
        .mount(&server)
        .await;

    let response = client(Duration::from_secs(5))
        .get(&format!("{}/get", server.uri()), &[("q".to_string(), "a".to_string())])
        .await;

    assert_eq!(response, HttpResponse::Ok { status: 429, data: json!({ "responseStatus": 429 }) });
}

#[tokio::test]
async fn test_reqwest_client_withPrebuiltClient_shouldSendItsUserAgent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("user-agent", "custom-agent/2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(onion_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let inner = reqwest::Client::builder()
        .user_agent("custom-agent/2.0")
        .build()
        .unwrap();
    let provider = MyMemoryProvider::new(Arc::new(ReqwestHttpClient::with_client(inner)))
        .with_endpoint(format!("{}/get", server.uri()));

    let result = provider.translate("лук", "ru", "en").await;

    assert!(result.ok, "unexpected error: {:?}", result.error);
}

#[tokio::test]
async fn test_reqwest_client_withSlowServer_shouldReportTimeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(onion_payload())
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let provider = MyMemoryProvider::new(Arc::new(client(Duration::from_millis(100))))
        .with_endpoint(format!("{}/get", server.uri()));

    let result = provider.translate("лук", "russian", "english").await;

    assert!(!result.ok);
    assert_eq!(result.error_message(), "API request failed: Request timeout");
    assert!(result.details.is_some());
}

#[tokio::test]
async fn test_reqwest_client_withHtmlBody_shouldReportInvalidJson() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let response = client(Duration::from_secs(5)).get(&format!("{}/get", server.uri()), &[]).await;

    match response {
        HttpResponse::Err { error, details } => {
            assert_eq!(error, "Invalid JSON response (HTTP 502)");
            assert!(details.is_some());
        }
        other => panic!("expected an error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_reqwest_client_withUnreachableHost_shouldReturnError() {
    let response = client(Duration::from_secs(2))
        .get("http://127.0.0.1:1/get", &[])
        .await;

    assert!(matches!(response, HttpResponse::Err { .. }));
}
