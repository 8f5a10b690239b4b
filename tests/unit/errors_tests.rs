/*!
 * Tests for error types and conversions
 */

use lexivariant::errors::{AppError, ConfigError, ProviderError, TranslationError};

#[test]
fn test_providerError_requestFailed_shouldDisplayCorrectly() {
    let error = ProviderError::RequestFailed {
        error: "Connection timeout".to_string(),
        details: None,
    };
    assert_eq!(error.to_string(), "API request failed: Connection timeout");
}

#[test]
fn test_providerError_apiError_shouldDisplayMessageOnly() {
    let error = ProviderError::ApiError {
        status_code: 400,
        message: "Bad request".to_string(),
    };
    assert_eq!(error.to_string(), "API error: Bad request");
}

#[test]
fn test_translationError_unsupportedLanguages_shouldIncludeInput() {
    assert_eq!(
        TranslationError::UnsupportedSourceLanguage("klingon".to_string()).to_string(),
        "Unsupported source language: klingon"
    );
    assert_eq!(
        TranslationError::UnsupportedTargetLanguage("Elvish".to_string()).to_string(),
        "Unsupported target language: Elvish"
    );
}

#[test]
fn test_translationError_fromProviderError_shouldKeepProviderMessage() {
    let provider_error = ProviderError::InvalidResponse("expected a JSON object".to_string());
    let translation_error: TranslationError = provider_error.into();
    assert_eq!(translation_error.to_string(), "Invalid API response: expected a JSON object");
}

#[test]
fn test_translationError_details_shouldComeFromRequestFailures() {
    let with_details: TranslationError = ProviderError::RequestFailed {
        error: "Request timeout".to_string(),
        details: Some("operation timed out".to_string()),
    }
    .into();
    assert_eq!(with_details.details(), Some("operation timed out"));
    assert_eq!(TranslationError::EmptyWord.details(), None);
}

#[test]
fn test_appError_fromProviderError_shouldWrapCorrectly() {
    let app_error: AppError = ProviderError::InvalidResponse("bad".to_string()).into();
    assert!(app_error.to_string().contains("Provider error"));
}

#[test]
fn test_appError_fromConfigError_shouldWrapCorrectly() {
    let app_error: AppError = ConfigError::NoProviders.into();
    assert_eq!(app_error.to_string(), "Config error: At least one provider must be configured");
}

#[test]
fn test_appError_fromIoError_shouldWrapAsFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
    let app_error: AppError = io_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("File error"));
    assert!(display.contains("File not found"));
}

#[test]
fn test_appError_fromAnyhow_shouldWrapAsUnknown() {
    let app_error: AppError = anyhow::anyhow!("something odd").into();
    assert_eq!(app_error.to_string(), "Unknown error: something odd");
}
