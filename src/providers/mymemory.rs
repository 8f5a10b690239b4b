/*!
 * MyMemory translation memory provider.
 *
 * Looks a word up with a single GET (`q`, `langpair`, optional `de`) and
 * reshapes the payload into ranked variants and usage contexts. Every
 * failure, including a panic in the transport, comes back as an
 * `ok == false` result tagged with the provider name.
 */

use async_trait::async_trait;
use futures::FutureExt;
use log::{debug, error};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use crate::app_config::Config;
use crate::errors::{ProviderError, TranslationError};
use crate::http::{HttpClient, HttpResponse, ReqwestHttpClient};
use crate::language_utils::normalize_language;
use crate::providers::{Provider, panic_message};
use crate::translation::{
    TranslationRequest, TranslationResult, extract_contexts, extract_variants, validate_payload,
};

/// Public MyMemory lookup endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.mymemory.translated.net/get";

/// Name reported for results from this provider
pub const PROVIDER_NAME: &str = "mymemory";

/// MyMemory client for word lookups
#[derive(Debug, Clone)]
pub struct MyMemoryProvider {
    /// Transport used for the GET request
    http: Arc<dyn HttpClient>,
    /// Lookup endpoint URL
    endpoint: String,
    /// Contact email sent as `de`, which raises the daily quota
    email: Option<String>,
}

impl MyMemoryProvider {
    /// Create a provider on the default endpoint
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self {
            http,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            email: None,
        }
    }

    /// Create a provider with a `reqwest` transport configured from `config`
    pub fn from_config(config: &Config) -> Self {
        let http = ReqwestHttpClient::new(Duration::from_secs(config.timeout_secs), &config.user_agent);
        Self::new(Arc::new(http))
            .with_endpoint(config.endpoint.clone())
            .with_email(config.email.clone())
    }

    /// Use a different endpoint, e.g. a local test server
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set or clear the contact email
    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email.filter(|e| !e.trim().is_empty());
        self
    }

    /// Endpoint requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Query string for a lookup with already normalized codes
    pub fn query_params(&self, word: &str, source_code: &str, target_code: &str) -> Vec<(String, String)> {
        let mut params = vec![
            ("q".to_string(), word.to_string()),
            ("langpair".to_string(), format!("{}|{}", source_code, target_code)),
        ];
        if let Some(email) = &self.email {
            params.push(("de".to_string(), email.clone()));
        }
        params
    }

    async fn lookup(&self, word: &str, source_language: &str, target_language: &str) -> Result<TranslationResult, TranslationError> {
        let request = TranslationRequest::new(word, source_language, target_language)?;

        let source_code = normalize_language(&request.source_language)
            .ok_or_else(|| TranslationError::UnsupportedSourceLanguage(request.source_language.clone()))?;
        let target_code = normalize_language(&request.target_language)
            .ok_or_else(|| TranslationError::UnsupportedTargetLanguage(request.target_language.clone()))?;

        debug!("Looking up '{}' ({} -> {}) on {}", request.word, source_code, target_code, self.endpoint);

        let params = self.query_params(&request.word, source_code, target_code);
        let payload = match self.http.get(&self.endpoint, &params).await {
            HttpResponse::Ok { data, .. } => data,
            HttpResponse::Err { error, details } => {
                return Err(ProviderError::RequestFailed { error, details }.into());
            }
        };

        validate_payload(&payload)?;

        let variants = extract_variants(&payload);
        let contexts = extract_contexts(&payload);
        debug!("Extracted {} variants and {} contexts for '{}'", variants.len(), contexts.len(), request.word);

        Ok(TranslationResult::success(&request, variants, contexts, self.name()))
    }
}

#[async_trait]
impl Provider for MyMemoryProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn translate(&self, word: &str, source_language: &str, target_language: &str) -> TranslationResult {
        let outcome = AssertUnwindSafe(self.lookup(word, source_language, target_language))
            .catch_unwind()
            .await;

        let failure = match outcome {
            Ok(Ok(result)) => return result,
            Ok(Err(e)) => {
                let details = e.details().map(str::to_string);
                TranslationResult::failure(e.to_string(), word, source_language, target_language)
                    .with_details(details)
            }
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                error!("MyMemory lookup for '{}' panicked: {}", word, message);
                TranslationResult::failure(format!("Unexpected error: {}", message), word, source_language, target_language)
            }
        };

        failure.with_provider(self.name())
    }
}
