/*!
 * # lexivariant - word translation variants from the MyMemory API
 *
 * A small client library that looks up a word in the MyMemory translation
 * memory and reshapes the answer into:
 * - a list of candidate translations, shortest first
 * - example sentence pairs ranked by match quality and usage
 *
 * ## Features
 *
 * - Language input by name, alias or ISO code ("russian", "rus", "ru")
 * - Ordered fallback over several providers, first success wins
 * - Merging of several successful results
 * - Errors reported as `ok == false` results, never as panics
 *
 * ## Architecture
 *
 * - `language_utils`: language name/alias/code normalization
 * - `translation`: request/result records and payload extraction
 * - `http`: HTTP collaborator trait and its `reqwest` implementation
 * - `providers`: the `Provider` trait and the MyMemory provider
 * - `translation_service`: multi-provider fallback
 * - `app_config`: configuration loading and validation
 * - `errors`: custom error types for the library
 *
 * ## Example
 *
 * ```no_run
 * use lexivariant::{Config, TranslationService};
 *
 * # async fn run() -> Result<(), lexivariant::AppError> {
 * let service = TranslationService::from_config(&Config::default())?;
 * let result = service.translate("лук", "russian", "english").await;
 * if result.ok {
 *     println!("{:?}", result.variants);
 * }
 * # Ok(())
 * # }
 * ```
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

pub mod app_config;
pub mod errors;
pub mod http;
pub mod language_utils;
pub mod providers;
pub mod translation;
pub mod translation_service;

pub use app_config::Config;
pub use errors::{AppError, ConfigError, ProviderError, TranslationError};
pub use http::{HttpClient, HttpResponse, ReqwestHttpClient};
pub use language_utils::{canonical_name, normalize_language, supported_codes, supported_languages};
pub use providers::{MyMemoryProvider, Provider};
pub use translation::{ContextExample, TranslationRequest, TranslationResult, merge_results};
pub use translation_service::TranslationService;
