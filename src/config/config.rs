use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Storage backend selection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    /// In-process store, lost on restart
    #[default]
    Memory,
    /// SurrealDB server
    SurrealDB,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Backend type
    pub db_type: DatabaseType,
    /// SurrealDB connection URL
    pub url: String,
    /// Namespace
    pub namespace: String,
    /// Database name
    pub database: String,
    /// Username
    pub username: String,
    /// Password
    pub password: String,
    /// TOML file of facilities and health tips loaded into an empty directory at startup
    pub seed_file: Option<PathBuf>,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
}

/// External text-generation service configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AiConfig {
    /// API key; empty disables the service and every AI path uses its fallback
    pub api_key: String,
    /// OpenAI-compatible API base URL
    pub base_url: String,
    /// Chat completion model
    pub model: String,
    /// Request timeout (seconds)
    pub timeout_secs: u64,
}

impl AiConfig {
    pub fn is_enabled(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level filter, overridden by RUST_LOG
    pub level: String,
    /// JSON output
    pub structured: bool,
    /// Directory for daily rolling log files
    pub log_dir: Option<PathBuf>,
}

/// Chat configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChatConfig {
    /// Number of exchanges replayed by default
    pub history_limit: usize,
    /// Maximum accepted message length (characters)
    pub max_message_chars: usize,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub ai: AiConfig,
    pub logging: LoggingConfig,
    pub chat: ChatConfig,
    /// Application name
    pub app_name: String,
    /// Environment
    pub environment: String,
}

impl AppConfig {
    /// Development defaults
    pub fn development() -> Self {
        Self {
            database: DatabaseConfig {
                db_type: DatabaseType::Memory,
                url: "ws://localhost:8000".into(),
                namespace: "mon_bondhu".into(),
                database: "health".into(),
                username: "root".into(),
                password: "root".into(),
                seed_file: None,
            },
            server: ServerConfig {
                host: "0.0.0.0".into(),
                port: 8080,
            },
            ai: AiConfig {
                api_key: String::new(),
                base_url: "https://api.openai.com/v1".into(),
                model: "gpt-3.5-turbo".into(),
                timeout_secs: 30,
            },
            logging: LoggingConfig {
                level: "debug".into(),
                structured: false,
                log_dir: None,
            },
            chat: ChatConfig {
                history_limit: 20,
                max_message_chars: 1000,
            },
            app_name: "mon-bondhu".into(),
            environment: "development".into(),
        }
    }

    /// Production defaults
    pub fn production() -> Self {
        let mut config = Self::development();
        config.environment = "production".into();
        config.logging.level = "info".into();
        config.logging.structured = true;
        config.database.db_type = DatabaseType::SurrealDB;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_disabled_without_key() {
        let config = AppConfig::development();
        assert!(!config.ai.is_enabled());

        let mut ai = config.ai.clone();
        ai.api_key = "   ".into();
        assert!(!ai.is_enabled());
        ai.api_key = "sk-test".into();
        assert!(ai.is_enabled());
    }

    #[test]
    fn test_production_overrides() {
        let config = AppConfig::production();
        assert_eq!(config.environment, "production");
        assert_eq!(config.database.db_type, DatabaseType::SurrealDB);
        assert_eq!(config.chat.history_limit, 20);
    }
}
