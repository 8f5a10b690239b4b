/*!
 * Provider implementations for different translation services.
 *
 * This module contains:
 * - MyMemory: the public MyMemory translation memory API
 * - Mock: deterministic provider used for testing fallback behavior
 */

use async_trait::async_trait;
use std::any::Any;
use std::fmt::Debug;

use crate::translation::TranslationResult;

/// Common trait for all translation providers
///
/// Implementations never fail with an `Err`: every problem, including a
/// panic inside the provider, is reported as a `TranslationResult` with
/// `ok == false`.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Name reported in `providers_used` and error results
    fn name(&self) -> &str;

    /// Translate a single word or short phrase
    ///
    /// # Arguments
    /// * `word` - The text to translate
    /// * `source_language` - Source language name, alias or code
    /// * `target_language` - Target language name, alias or code
    async fn translate(&self, word: &str, source_language: &str, target_language: &str) -> TranslationResult;
}

/// Best-effort text for a caught panic payload
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

pub mod mock;
pub mod mymemory;

pub use mock::MockProvider;
pub use mymemory::MyMemoryProvider;
