/*!
 * Multi-provider translation service.
 *
 * Providers are registered as named factories and tried strictly in
 * registration order. The first successful result is returned; failures
 * are recorded in `providers_tried` so a caller can see what happened.
 * A single registered provider is not scanned: its own result, or its
 * fault as `Unexpected error: ...`, is the answer.
 */

use anyhow::anyhow;
use futures::FutureExt;
use log::{debug, error, info, warn};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tokio::runtime::Handle;

use crate::app_config::{Config, TranslationProvider};
use crate::errors::AppError;
use crate::providers::{MyMemoryProvider, Provider, panic_message};
use crate::translation::{TranslationRequest, TranslationResult};

/// Builds a provider right before it is used
pub type ProviderFactory = Box<dyn Fn() -> anyhow::Result<Arc<dyn Provider>> + Send + Sync>;

struct ProviderEntry {
    name: String,
    factory: ProviderFactory,
}

enum Attempt {
    /// The provider ran and produced a result, successful or not
    Finished(TranslationResult),
    /// Construction failed or the provider panicked
    Faulted(String),
}

/// Ordered best-effort scan over translation providers
#[derive(Default)]
pub struct TranslationService {
    providers: Vec<ProviderEntry>,
}

impl std::fmt::Debug for TranslationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationService")
            .field("providers", &self.provider_names())
            .finish()
    }
}

impl TranslationService {
    /// Create a service with no providers
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the provider list from configuration
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        config.validate()?;

        let mut service = Self::new();
        for provider_config in &config.providers {
            let name = provider_config.display_name();
            let provider_type = provider_config.provider_type.clone();
            let endpoint = provider_config.endpoint_or(&config.endpoint).to_string();
            let shared = config.clone();

            service = service.with_factory(name, move || {
                match provider_type.parse::<TranslationProvider>()? {
                    TranslationProvider::MyMemory => {
                        let provider = MyMemoryProvider::from_config(&shared).with_endpoint(endpoint.clone());
                        Ok(Arc::new(provider) as Arc<dyn Provider>)
                    }
                }
            });
        }

        Ok(service)
    }

    /// Register a provider factory under a name
    pub fn with_factory<F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> anyhow::Result<Arc<dyn Provider>> + Send + Sync + 'static,
    {
        self.providers.push(ProviderEntry {
            name: name.into(),
            factory: Box::new(factory),
        });
        self
    }

    /// Register an already constructed provider under its own name
    pub fn with_provider<P>(self, provider: P) -> Self
    where
        P: Provider + 'static,
    {
        let name = provider.name().to_string();
        let provider: Arc<dyn Provider> = Arc::new(provider);
        self.with_factory(name, move || Ok(Arc::clone(&provider)))
    }

    /// Names of the registered providers, in order
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name.as_str()).collect()
    }

    /// Translate a word
    ///
    /// With a single provider its result is returned as is. With several,
    /// each is tried in order until one succeeds.
    pub async fn translate(&self, word: &str, source_language: &str, target_language: &str) -> TranslationResult {
        if let Err(e) = TranslationRequest::new(word, source_language, target_language) {
            debug!("Rejected request for '{}': {}", word, e);
            return TranslationResult::failure(e.to_string(), word, source_language, target_language);
        }

        let total = self.providers.len();
        if let [entry] = self.providers.as_slice() {
            return match Self::attempt(entry, word, source_language, target_language).await {
                Attempt::Finished(result) => TranslationResult {
                    providers_tried: vec![entry.name.clone()],
                    total_providers: Some(total),
                    ..result
                },
                Attempt::Faulted(message) => TranslationResult {
                    providers_tried: vec![format!("{}_error", entry.name)],
                    total_providers: Some(total),
                    ..TranslationResult::failure(message, word, source_language, target_language)
                        .with_provider(entry.name.clone())
                },
            };
        }

        let mut providers_tried: Vec<String> = Vec::with_capacity(total);
        let mut last_error: Option<String> = None;

        for entry in &self.providers {
            match Self::attempt(entry, word, source_language, target_language).await {
                Attempt::Finished(result) if result.ok => {
                    providers_tried.push(entry.name.clone());
                    info!("Translated '{}' with provider '{}'", word, entry.name);
                    return TranslationResult {
                        providers_tried,
                        total_providers: Some(total),
                        ..result
                    };
                }
                Attempt::Finished(result) => {
                    warn!("Provider '{}' failed for '{}': {}", entry.name, word, result.error_message());
                    providers_tried.push(entry.name.clone());
                    last_error = Some(result.error_message().to_string());
                }
                Attempt::Faulted(message) => {
                    providers_tried.push(format!("{}_error", entry.name));
                    last_error = Some(message);
                }
            }
        }

        warn!("All {} providers failed for '{}'", total, word);
        TranslationResult {
            last_error,
            providers_tried,
            total_providers: Some(total),
            ..TranslationResult::failure("All providers failed", word, source_language, target_language)
        }
    }

    /// Build one provider and run it, containing construction errors and panics
    async fn attempt(
        entry: &ProviderEntry,
        word: &str,
        source_language: &str,
        target_language: &str,
    ) -> Attempt {
        let provider = match panic::catch_unwind(AssertUnwindSafe(|| (entry.factory)())) {
            Ok(Ok(provider)) => provider,
            Ok(Err(e)) => {
                warn!("Could not construct provider '{}': {}", entry.name, e);
                return Attempt::Faulted(format!("Unexpected error: {}", e));
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                error!("Constructing provider '{}' panicked: {}", entry.name, message);
                return Attempt::Faulted(format!("Unexpected error: {}", message));
            }
        };

        match AssertUnwindSafe(provider.translate(word, source_language, target_language))
            .catch_unwind()
            .await
        {
            Ok(result) => Attempt::Finished(result),
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                error!("Provider '{}' panicked for '{}': {}", entry.name, word, message);
                Attempt::Faulted(format!("Unexpected error: {}", message))
            }
        }
    }

    /// Blocking variant of `translate` for callers without an async runtime
    ///
    /// Called from inside a Tokio runtime it returns a failed result.
    pub fn translate_blocking(&self, word: &str, source_language: &str, target_language: &str) -> TranslationResult {
        if Handle::try_current().is_ok() {
            warn!("translate_blocking called from inside an async runtime");
            return TranslationResult::failure(
                "Unexpected error: cannot block inside an async runtime, use translate instead",
                word,
                source_language,
                target_language,
            );
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| anyhow!("Failed to start runtime: {}", e));

        match runtime {
            Ok(runtime) => runtime.block_on(self.translate(word, source_language, target_language)),
            Err(e) => TranslationResult::failure(
                format!("Unexpected error: {}", e),
                word,
                source_language,
                target_language,
            ),
        }
    }
}
