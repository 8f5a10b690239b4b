/*!
 * Tests for configuration functionality
 */

use anyhow::Result;
use lexivariant::app_config::{Config, LogLevel, ProviderConfig, TranslationProvider};
use lexivariant::errors::{AppError, ConfigError};
use lexivariant::providers::mymemory::DEFAULT_ENDPOINT;
use lexivariant::TranslationService;

use crate::common::{create_temp_dir, create_test_file};

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.timeout_secs, 15);
    assert!(config.user_agent.starts_with("lexivariant/"));
    assert_eq!(config.email, None);
    assert_eq!(config.providers, vec![ProviderConfig::new(TranslationProvider::MyMemory)]);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// An empty JSON object is a complete configuration
#[test]
fn test_from_json_withEmptyObject_shouldUseDefaults() -> Result<()> {
    let config = Config::from_json("{}")?;
    assert_eq!(config, Config::default());
    Ok(())
}

#[test]
fn test_from_json_withProviderList_shouldKeepOrder() -> Result<()> {
    let config = Config::from_json(r#"{
        "timeout_secs": 5,
        "email": "dev@example.com",
        "log_level": "debug",
        "providers": [
            { "type": "mymemory", "name": "primary" },
            { "type": "mymemory", "name": "mirror", "endpoint": "http://localhost:8080/get" }
        ]
    }"#)?;

    assert_eq!(config.timeout_secs, 5);
    assert_eq!(config.email.as_deref(), Some("dev@example.com"));
    assert_eq!(config.log_level.to_level_filter(), log::LevelFilter::Debug);
    assert_eq!(config.providers[0].display_name(), "primary");
    assert_eq!(config.providers[1].endpoint_or(&config.endpoint), "http://localhost:8080/get");
    assert_eq!(config.providers[0].endpoint_or(&config.endpoint), DEFAULT_ENDPOINT);

    let service = TranslationService::from_config(&config).map_err(|e| anyhow::anyhow!(e.to_string()))?;
    assert_eq!(service.provider_names(), vec!["primary", "mirror"]);
    Ok(())
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();

    config.timeout_secs = 0;
    assert_eq!(config.validate(), Err(ConfigError::ZeroTimeout));
    config.timeout_secs = 10;

    config.endpoint = "not a url".to_string();
    assert!(matches!(config.validate(), Err(ConfigError::InvalidEndpoint { .. })));
    config.endpoint = "ftp://example.com/get".to_string();
    assert!(matches!(config.validate(), Err(ConfigError::InvalidEndpoint { .. })));
    config.endpoint = DEFAULT_ENDPOINT.to_string();

    config.providers.clear();
    assert_eq!(config.validate(), Err(ConfigError::NoProviders));

    config.providers.push(ProviderConfig {
        provider_type: "  ".to_string(),
        name: None,
        endpoint: String::new(),
    });
    assert_eq!(config.validate(), Err(ConfigError::EmptyProviderType(0)));
}

#[test]
fn test_from_file_withValidFile_shouldLoad() -> Result<()> {
    let dir = create_temp_dir()?;
    let path = create_test_file(dir.path(), "conf.json", r#"{ "timeout_secs": 30 }"#)?;

    let config = Config::from_file(&path).map_err(|e| anyhow::anyhow!(e.to_string()))?;
    assert_eq!(config.timeout_secs, 30);
    Ok(())
}

#[test]
fn test_from_file_withMissingFile_shouldReturnFileError() -> Result<()> {
    let dir = create_temp_dir()?;
    let result = Config::from_file(dir.path().join("missing.json"));
    assert!(matches!(result, Err(AppError::File(_))));
    Ok(())
}

#[test]
fn test_from_file_withInvalidJson_shouldMentionPath() -> Result<()> {
    let dir = create_temp_dir()?;
    let path = create_test_file(dir.path(), "broken.json", "{ not json")?;

    let err = Config::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("broken.json"), "got: {}", err);
    Ok(())
}

#[test]
fn test_from_json_withInvalidValues_shouldReturnConfigError() {
    let result = Config::from_json(r#"{ "timeout_secs": 0 }"#);
    assert!(matches!(result, Err(AppError::Config(ConfigError::ZeroTimeout))));
}

#[test]
fn test_translation_provider_fromStr_shouldParseKnownTypes() {
    assert_eq!(" MyMemory ".parse::<TranslationProvider>().unwrap(), TranslationProvider::MyMemory);
    assert!("deepl".parse::<TranslationProvider>().is_err());
    assert_eq!(TranslationProvider::MyMemory.display_name(), "MyMemory");
    assert_eq!(TranslationProvider::MyMemory.to_string(), "mymemory");
}

/// Unknown provider types surface as `_error` entries during a scan
#[tokio::test]
async fn test_from_config_withUnknownProviderType_shouldFailAtConstruction() {
    let config = Config::from_json(r#"{ "providers": [ { "type": "deepl" } ] }"#).unwrap();
    let service = TranslationService::from_config(&config).unwrap();

    let result = service.translate("лук", "ru", "en").await;

    assert!(!result.ok);
    assert_eq!(result.providers_tried, vec!["deepl_error"]);
    assert_eq!(result.last_error.as_deref(), Some("Invalid provider type: deepl"));
}
