/*!
 * Error types for the lexivariant library.
 *
 * This module contains custom error types for the different layers of the
 * library, using the thiserror crate for ergonomic error definitions.
 * The `Display` text of each variant is the message reported to callers
 * in a failed `TranslationResult`.
 */

use thiserror::Error;

/// Errors that can occur when talking to a translation API
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// The HTTP collaborator could not complete the request
    #[error("API request failed: {error}")]
    RequestFailed {
        /// Transport error as reported by the collaborator
        error: String,
        /// Extra diagnostics from the collaborator
        details: Option<String>,
    },

    /// The payload did not have the expected shape
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// The API answered with a non-success status
    #[error("API error: {message}")]
    ApiError {
        /// Status reported in the payload
        status_code: i64,
        /// Detail message from the API
        message: String,
    },
}

/// Errors raised before any provider is contacted
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranslationError {
    #[error("Word cannot be empty")]
    EmptyWord,

    #[error("Source language cannot be empty")]
    EmptySourceLanguage,

    #[error("Target language cannot be empty")]
    EmptyTargetLanguage,

    /// The source language did not resolve to a supported code
    #[error("Unsupported source language: {0}")]
    UnsupportedSourceLanguage(String),

    /// The target language did not resolve to a supported code
    #[error("Unsupported target language: {0}")]
    UnsupportedTargetLanguage(String),

    /// Error from the provider API
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl TranslationError {
    /// Transport diagnostics carried by the error, if any
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::Provider(ProviderError::RequestFailed { details, .. }) => details.as_deref(),
            _ => None,
        }
    }
}

/// Errors found while validating configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Timeout must be greater than zero")]
    ZeroTimeout,

    #[error("At least one provider must be configured")]
    NoProviders,

    #[error("Provider entry {0} has an empty type")]
    EmptyProviderType(usize),
}

/// Main library error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Error from configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
