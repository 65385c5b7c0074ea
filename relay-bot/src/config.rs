//! Bot configuration: one structure, three loading strategies
//! (process environment, env file, literal values).

use openrouter_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use relay_core::{RelayError, Result};
use std::env;
use std::path::Path;

pub const DEFAULT_REFERER: &str = "https://t.me/relay_ai_bot";
pub const DEFAULT_TITLE: &str = "relay-bot";
pub const DEFAULT_THINKING_MESSAGE: &str = "⌛ Thinking...";

/// All values the relay needs, constructed once at process entry and threaded
/// into the components. Credentials are required; everything else defaults.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram_bot_token: String,
    pub openrouter_api_key: String,
    pub openrouter_base_url: String,
    pub model: String,
    /// HTTP-Referer attribution header value.
    pub app_referer: String,
    /// X-Title attribution header value.
    pub app_title: String,
    /// Placeholder text shown while a completion is in flight.
    pub thinking_message: String,
}

impl BotConfig {
    /// Builds a config from literal credential values, with defaults for the
    /// rest. Rejects empty credentials.
    pub fn new(
        telegram_bot_token: impl Into<String>,
        openrouter_api_key: impl Into<String>,
    ) -> Result<Self> {
        let config = Self {
            telegram_bot_token: telegram_bot_token.into(),
            openrouter_api_key: openrouter_api_key.into(),
            openrouter_base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            app_referer: DEFAULT_REFERER.to_string(),
            app_title: DEFAULT_TITLE.to_string(),
            thinking_message: DEFAULT_THINKING_MESSAGE.to_string(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads from the process environment. `TELEGRAM_BOT_TOKEN` and
    /// `OPENROUTER_API_KEY` are required; `OPENROUTER_BASE_URL`, `MODEL`,
    /// `APP_REFERER`, `APP_TITLE` and `THINKING_MESSAGE` override defaults.
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN").unwrap_or_default();
        let api_key = env::var("OPENROUTER_API_KEY").unwrap_or_default();
        let mut config = Self::new(token, api_key)?;

        if let Ok(base_url) = env::var("OPENROUTER_BASE_URL") {
            config.openrouter_base_url = base_url;
        }
        if let Ok(model) = env::var("MODEL") {
            config.model = model;
        }
        if let Ok(referer) = env::var("APP_REFERER") {
            config.app_referer = referer;
        }
        if let Ok(title) = env::var("APP_TITLE") {
            config.app_title = title;
        }
        if let Ok(thinking) = env::var("THINKING_MESSAGE") {
            config.thinking_message = thinking;
        }
        Ok(config)
    }

    /// Loads the given env file into the process environment (existing
    /// variables win), then reads the environment.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        dotenvy::from_filename(path.as_ref())
            .map_err(|e| RelayError::Config(format!("Failed to load env file: {}", e)))?;
        Self::from_env()
    }

    fn validate(&self) -> Result<()> {
        if self.telegram_bot_token.trim().is_empty() {
            return Err(RelayError::Config("TELEGRAM_BOT_TOKEN not set".to_string()));
        }
        if self.openrouter_api_key.trim().is_empty() {
            return Err(RelayError::Config("OPENROUTER_API_KEY not set".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    const ALL_VARS: [&str; 7] = [
        "TELEGRAM_BOT_TOKEN",
        "OPENROUTER_API_KEY",
        "OPENROUTER_BASE_URL",
        "MODEL",
        "APP_REFERER",
        "APP_TITLE",
        "THINKING_MESSAGE",
    ];

    fn clear_env() {
        for var in ALL_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_new_literal_defaults() {
        let config = BotConfig::new("token", "key").unwrap();
        assert_eq!(config.openrouter_base_url, "https://openrouter.ai/api/v1");
        assert_eq!(config.model, "qwen/qwq-32b:free");
        assert_eq!(config.thinking_message, DEFAULT_THINKING_MESSAGE);
    }

    #[test]
    fn test_new_rejects_empty_credentials() {
        assert!(BotConfig::new("", "key").is_err());
        assert!(BotConfig::new("token", "").is_err());
        assert!(BotConfig::new("  ", "key").is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_missing_credentials_is_config_error() {
        clear_env();
        let err = BotConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("TELEGRAM_BOT_TOKEN"));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_overrides() {
        clear_env();
        env::set_var("TELEGRAM_BOT_TOKEN", "tg-token");
        env::set_var("OPENROUTER_API_KEY", "or-key");
        env::set_var("MODEL", "deepseek/deepseek-chat");
        env::set_var("THINKING_MESSAGE", "hold on");

        let config = BotConfig::from_env().unwrap();
        assert_eq!(config.telegram_bot_token, "tg-token");
        assert_eq!(config.openrouter_api_key, "or-key");
        assert_eq!(config.model, "deepseek/deepseek-chat");
        assert_eq!(config.thinking_message, "hold on");
        assert_eq!(config.openrouter_base_url, "https://openrouter.ai/api/v1");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_file_loads_credentials() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let env_path = dir.path().join(".env");
        let mut file = std::fs::File::create(&env_path).unwrap();
        writeln!(file, "TELEGRAM_BOT_TOKEN=file-token").unwrap();
        writeln!(file, "OPENROUTER_API_KEY=file-key").unwrap();
        writeln!(file, "APP_TITLE=file-bot").unwrap();

        let config = BotConfig::from_env_file(&env_path).unwrap();
        assert_eq!(config.telegram_bot_token, "file-token");
        assert_eq!(config.openrouter_api_key, "file-key");
        assert_eq!(config.app_title, "file-bot");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_file_missing_file_is_config_error() {
        clear_env();
        assert!(BotConfig::from_env_file("/nonexistent/.env").is_err());
    }
}
