/*!
 * Translation records and response extraction.
 *
 * - `extract`: turns a provider payload into ranked variants and contexts
 * - `result`: request/result records and result merging
 */

pub mod extract;
pub mod result;

pub use extract::{extract_contexts, extract_variants, validate_payload};
pub use result::{ContextExample, TranslationRequest, TranslationResult, merge_results};
