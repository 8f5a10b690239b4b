/*!
 * Request and result records shared by providers and the service.
 */

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::TranslationError;
use crate::translation::extract::{rank_contexts, rank_variants};

/// A validated translation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    /// Word or phrase to translate, trimmed
    pub word: String,
    /// Source language exactly as the caller gave it
    pub source_language: String,
    /// Target language exactly as the caller gave it
    pub target_language: String,
}

impl TranslationRequest {
    /// Build a request, rejecting blank fields
    ///
    /// Fields are checked in order (word, source, target) and the first
    /// blank one is reported.
    pub fn new(word: &str, source_language: &str, target_language: &str) -> Result<Self, TranslationError> {
        if word.trim().is_empty() {
            return Err(TranslationError::EmptyWord);
        }
        if source_language.trim().is_empty() {
            return Err(TranslationError::EmptySourceLanguage);
        }
        if target_language.trim().is_empty() {
            return Err(TranslationError::EmptyTargetLanguage);
        }

        Ok(Self {
            word: word.trim().to_string(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
        })
    }
}

/// An example sentence pair taken from the provider's translation memory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextExample {
    /// Text in the source language
    pub source: String,
    /// Text in the target language
    pub target: String,
    /// Match quality, 0 when unknown
    pub quality: u8,
    /// How often the pair was used
    pub usage_count: u64,
    /// Domain of the example, if the provider gave one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

/// Outcome of a translation call
///
/// Success and failure share one shape; callers branch on `ok`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub ok: bool,
    pub word: String,
    pub source_language: String,
    pub target_language: String,
    #[serde(default)]
    pub variants: Vec<String>,
    #[serde(default)]
    pub contexts: Vec<ContextExample>,
    #[serde(default)]
    pub providers_used: Vec<String>,
    /// Error message for failed calls
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Provider that produced the failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Transport diagnostics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Last provider error seen during a multi-provider scan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
    /// Providers tried during a multi-provider scan, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub providers_tried: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_providers: Option<usize>,
}

impl TranslationResult {
    /// Successful result for one provider
    pub fn success(
        request: &TranslationRequest,
        variants: Vec<String>,
        contexts: Vec<ContextExample>,
        provider: &str,
    ) -> Self {
        Self {
            ok: true,
            word: request.word.clone(),
            source_language: request.source_language.clone(),
            target_language: request.target_language.clone(),
            variants,
            contexts,
            providers_used: vec![provider.to_string()],
            ..Default::default()
        }
    }

    /// Failed result carrying the caller's inputs
    pub fn failure(
        error: impl Into<String>,
        word: &str,
        source_language: &str,
        target_language: &str,
    ) -> Self {
        Self {
            ok: false,
            word: word.to_string(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            error: Some(error.into()),
            ..Default::default()
        }
    }

    /// Attach the provider that produced this result
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Attach transport diagnostics
    pub fn with_details(mut self, details: Option<String>) -> Self {
        self.details = details;
        self
    }

    /// Error message, or an empty string for successful results
    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or_default()
    }
}

/// Combine several results into one
///
/// Only successful results contribute. Variants and contexts are unioned
/// and re-ranked; provider names keep the order they first appear in.
/// When nothing succeeded the first input is returned as is.
pub fn merge_results(results: &[TranslationResult]) -> TranslationResult {
    let Some(first) = results.first() else {
        return TranslationResult::failure("No results to merge", "", "", "");
    };

    let successes: Vec<&TranslationResult> = results.iter().filter(|r| r.ok).collect();
    let Some(base) = successes.first() else {
        return first.clone();
    };

    let variants = rank_variants(
        successes.iter().flat_map(|r| r.variants.iter().cloned()).collect(),
    );

    let mut seen_pairs: HashSet<(String, String)> = HashSet::new();
    let contexts = rank_contexts(
        successes
            .iter()
            .flat_map(|r| r.contexts.iter())
            .filter(|c| seen_pairs.insert((c.source.clone(), c.target.clone())))
            .cloned()
            .collect(),
    );

    let mut providers_used: Vec<String> = Vec::new();
    for name in successes.iter().flat_map(|r| r.providers_used.iter()) {
        if !providers_used.contains(name) {
            providers_used.push(name.clone());
        }
    }

    TranslationResult {
        ok: true,
        word: base.word.clone(),
        source_language: base.source_language.clone(),
        target_language: base.target_language.clone(),
        variants,
        contexts,
        providers_used,
        ..Default::default()
    }
}
