/*!
 * Mock provider implementations for testing.
 *
 * This module provides mock providers that simulate different behaviors:
 * - `MockProvider::working()` - Always succeeds with the given variants
 * - `MockProvider::failing()` - Always returns an `ok == false` result
 * - `MockProvider::panicking()` - Panics inside `translate`
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::providers::Provider;
use crate::translation::{TranslationRequest, TranslationResult};

/// Behavior mode for the mock provider
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with these variants
    Working { variants: Vec<String> },
    /// Always fails with this error message
    Failing { error: String },
    /// Panics on every call
    Panicking,
}

/// Mock provider for testing fallback behavior
#[derive(Debug, Clone)]
pub struct MockProvider {
    name: String,
    behavior: MockBehavior,
    /// Shared between clones so tests can count calls after handing a clone out
    request_count: Arc<AtomicUsize>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(name: impl Into<String>, behavior: MockBehavior) -> Self {
        Self {
            name: name.into(),
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a mock provider that always succeeds
    pub fn working(name: impl Into<String>, variants: &[&str]) -> Self {
        Self::new(name, MockBehavior::Working {
            variants: variants.iter().map(|v| v.to_string()).collect(),
        })
    }

    /// Create a mock provider that always fails
    pub fn failing(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self::new(name, MockBehavior::Failing { error: error.into() })
    }

    /// Create a mock provider that panics when called
    pub fn panicking(name: impl Into<String>) -> Self {
        Self::new(name, MockBehavior::Panicking)
    }

    /// Number of `translate` calls made so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn translate(&self, word: &str, source_language: &str, target_language: &str) -> TranslationResult {
        self.request_count.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Working { variants } => match TranslationRequest::new(word, source_language, target_language) {
                Ok(request) => TranslationResult::success(&request, variants.clone(), Vec::new(), &self.name),
                Err(e) => TranslationResult::failure(e.to_string(), word, source_language, target_language)
                    .with_provider(self.name.clone()),
            },
            MockBehavior::Failing { error } => {
                TranslationResult::failure(error.clone(), word, source_language, target_language)
                    .with_provider(self.name.clone())
            }
            MockBehavior::Panicking => panic!("mock provider '{}' panicked", self.name),
        }
    }
}
