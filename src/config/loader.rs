use crate::config::config::{AppConfig, DatabaseType};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the default locations
    ///
    /// Precedence, lowest first:
    /// 1. development defaults
    /// 2. ./config.toml
    /// 3. `MON_BONDHU_` environment variables (`__` separates sections)
    /// 4. `OPENAI_API_KEY`
    pub fn load() -> Result<AppConfig, figment::Error> {
        Self::load_from(default_config_path())
    }

    /// Load configuration from the given file
    pub fn load_from(path: impl AsRef<Path>) -> Result<AppConfig, figment::Error> {
        Self::figment(path).extract()
    }

    fn figment(path: impl AsRef<Path>) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::development()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("MON_BONDHU_").split("__"))
            .merge(
                Env::raw()
                    .only(&["OPENAI_API_KEY"])
                    .map(|_| "ai.api_key".into()),
            )
    }

    /// Validate configuration
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if config.database.db_type == DatabaseType::SurrealDB && config.database.url.is_empty() {
            return Err(ConfigValidationError::MissingDatabaseUrl);
        }

        if config.ai.is_enabled() && config.ai.base_url.is_empty() {
            return Err(ConfigValidationError::MissingAiBaseUrl);
        }

        if config.chat.history_limit == 0 {
            return Err(ConfigValidationError::InvalidHistoryLimit);
        }

        if config.chat.max_message_chars == 0 {
            return Err(ConfigValidationError::InvalidMaxMessageChars);
        }

        Ok(())
    }
}

/// Configuration validation errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("server port must be greater than 0")]
    InvalidPort,

    #[error("database url is required for the surrealdb backend")]
    MissingDatabaseUrl,

    #[error("ai.base_url is required when an API key is configured")]
    MissingAiBaseUrl,

    #[error("chat.history_limit must be greater than 0")]
    InvalidHistoryLimit,

    #[error("chat.max_message_chars must be greater than 0")]
    InvalidMaxMessageChars,
}

/// Default configuration file path
pub fn default_config_path() -> PathBuf {
    PathBuf::from("config.toml")
}
