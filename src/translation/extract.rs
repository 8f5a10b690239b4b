/*!
 * Extraction of variants and usage contexts from a MyMemory payload.
 *
 * The payload is handled as a generic JSON tree because the API is loose
 * about types: `quality` and `usage-count` arrive as numbers or strings,
 * and `subject` is sometimes `false`.
 *
 * Expected shape:
 *
 * ```json
 * {
 *   "responseStatus": 200,
 *   "responseData": { "translatedText": "onion" },
 *   "matches": [
 *     { "segment": "лук", "translation": "bow", "quality": "74", "usage-count": 2, "subject": "All" }
 *   ]
 * }
 * ```
 */

use serde_json::Value;

use crate::errors::ProviderError;
use crate::translation::result::ContextExample;

/// `responseStatus` value for a successful lookup
pub const SUCCESS_STATUS: i64 = 200;

/// Matches with a known quality below this are dropped
pub const MIN_CONTEXT_QUALITY: u8 = 50;

/// Check that a payload is an object reporting success
pub fn validate_payload(payload: &Value) -> Result<(), ProviderError> {
    let object = payload
        .as_object()
        .ok_or_else(|| ProviderError::InvalidResponse("expected a JSON object".to_string()))?;

    let status = object
        .get("responseStatus")
        .and_then(parse_integer)
        .ok_or_else(|| ProviderError::InvalidResponse("missing responseStatus".to_string()))?;

    if status != SUCCESS_STATUS {
        let message = object
            .get("responseDetails")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|details| !details.is_empty())
            .unwrap_or("Unknown error")
            .to_string();
        return Err(ProviderError::ApiError { status_code: status, message });
    }

    Ok(())
}

/// Collect candidate translations, shortest first
///
/// The main `translatedText` comes first, then each match translation that
/// is not a case-insensitive repeat of an earlier candidate.
pub fn extract_variants(payload: &Value) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();
    let mut seen_lowercase: Vec<String> = Vec::new();

    let primary = payload
        .pointer("/responseData/translatedText")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty());

    let alternates = matches(payload)
        .filter_map(|m| m.get("translation").and_then(Value::as_str))
        .map(str::trim)
        .filter(|text| !text.is_empty());

    for text in primary.into_iter().chain(alternates) {
        let lowered = text.to_lowercase();
        if !seen_lowercase.contains(&lowered) {
            seen_lowercase.push(lowered);
            candidates.push(text.to_string());
        }
    }

    rank_variants(candidates)
}

/// Collect example pairs, best first
///
/// Matches with a known quality in 1..=49 are dropped; an absent or
/// unreadable quality counts as 0 and is kept.
pub fn extract_contexts(payload: &Value) -> Vec<ContextExample> {
    let contexts = matches(payload)
        .filter_map(|m| {
            let source = non_empty_str(m.get("segment"))?;
            let target = non_empty_str(m.get("translation"))?;

            let quality = m
                .get("quality")
                .and_then(parse_integer)
                .map_or(0, |q| q.clamp(0, 100) as u8);
            if (1..MIN_CONTEXT_QUALITY).contains(&quality) {
                return None;
            }

            let usage_count = m
                .get("usage-count")
                .and_then(parse_integer)
                .map_or(0, |count| count.max(0) as u64);

            Some(ContextExample {
                source: source.to_string(),
                target: target.to_string(),
                quality,
                usage_count,
                subject: non_empty_str(m.get("subject")).map(str::to_string),
            })
        })
        .collect();

    rank_contexts(contexts)
}

/// Drop exact duplicates and order by length in characters
///
/// The sort is stable, so equal lengths keep their incoming order.
pub fn rank_variants(variants: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(variants.len());
    for variant in variants {
        if !unique.contains(&variant) {
            unique.push(variant);
        }
    }
    unique.sort_by_key(|v| v.chars().count());
    unique
}

/// Order contexts by quality, then usage count, both descending
pub fn rank_contexts(mut contexts: Vec<ContextExample>) -> Vec<ContextExample> {
    contexts.sort_by(|a, b| {
        b.quality
            .cmp(&a.quality)
            .then_with(|| b.usage_count.cmp(&a.usage_count))
    });
    contexts
}

fn matches(payload: &Value) -> impl Iterator<Item = &Value> {
    payload
        .get("matches")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty())
}

/// Read an integer from a JSON integer or integer string; fractions are malformed
fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}
