//! Application configuration module
//!
//! Configuration is loaded from environment variables using the `config` and
//! `dotenvy` crates. Variables carry the `DIALOG_GATE` prefix and nested
//! values are separated by double underscores. Every section has defaults, so
//! an empty environment yields a usable configuration.
//!
//! # Example
//!
//! ```no_run
//! use dialog_gate::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Turn cache TTL: {}s", config.cache.ttl_secs);
//! ```

mod cache;
mod error;
mod logging;
mod rules;
mod validation;

pub use cache::{CacheConfig, MAX_TTL_SECS};
pub use error::{ConfigError, ValidationError};
pub use logging::{init_tracing, LoggingConfig};
pub use rules::RulesConfig;
pub use validation::ValidationConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Per-turn record cache
    #[serde(default)]
    pub cache: CacheConfig,

    /// Validation engine (intent path, recovery prompts)
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Log level and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Rule catalog source
    #[serde(default)]
    pub rules: RulesConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `DIALOG_GATE__CACHE__TTL_SECS=120` -> `cache.ttl_secs = 120`
    /// - `DIALOG_GATE__VALIDATION__PROMPTS__CONFIRMATION=...` -> `validation.prompts.confirmation`
    /// - `DIALOG_GATE__RULES__PATH=rules.yaml` -> `rules.path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its expected type.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DIALOG_GATE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.cache.validate()?;
        self.validation.validate()?;
        self.logging.validate()?;
        self.rules.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "DIALOG_GATE__CACHE__TTL_SECS",
        "DIALOG_GATE__VALIDATION__INTENT_PATH",
        "DIALOG_GATE__VALIDATION__PROMPTS__CONFIRMATION",
        "DIALOG_GATE__LOGGING__LEVEL",
        "DIALOG_GATE__RULES__PATH",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.cache.ttl_secs, 300);
        assert_eq!(config.validation.intent_path, "nlu.intent");
        assert_eq!(config.logging.level, "info");
        assert!(config.rules.path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DIALOG_GATE__CACHE__TTL_SECS", "120");
        env::set_var("DIALOG_GATE__VALIDATION__INTENT_PATH", "intent.name");
        env::set_var(
            "DIALOG_GATE__VALIDATION__PROMPTS__CONFIRMATION",
            "Haan ya nahi?",
        );
        env::set_var("DIALOG_GATE__LOGGING__LEVEL", "debug");
        env::set_var("DIALOG_GATE__RULES__PATH", "flows/rules.yaml");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.cache.ttl_secs, 120);
        assert_eq!(config.validation.intent_path, "intent.name");
        assert_eq!(config.validation.prompts.confirmation, "Haan ya nahi?");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.rules.path, Some(PathBuf::from("flows/rules.yaml")));
    }

    #[test]
    fn test_load_validated_rejects_zero_ttl() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DIALOG_GATE__CACHE__TTL_SECS", "0");
        let result = AppConfig::load_validated();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::InvalidCacheTtl))
        ));
    }

    #[test]
    fn test_load_validated_rejects_oversized_ttl() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DIALOG_GATE__CACHE__TTL_SECS", "100000000000000000");
        let result = AppConfig::load_validated();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::CacheTtlTooLong { .. }))
        ));
    }

    #[test]
    fn test_unparseable_ttl_is_a_load_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DIALOG_GATE__CACHE__TTL_SECS", "soon");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_reports_first_bad_section() {
        let mut config = AppConfig::default();
        config.logging.level = "loud".to_string();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidLogLevel("loud".to_string()))
        );
    }
}
