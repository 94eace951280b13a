
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::HwbotError;

/// Environment variables that must be set before the watcher starts.
const REQUIRED_VARS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

/// Top-level hwbot configuration (non-secret settings).
///
/// Credentials never live here; they are read from the environment via
/// [`Credentials::from_env`].
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
}

/// Review API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Endpoint returning homework review statuses.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Seconds between polls.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            poll_interval_secs: default_poll_interval(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Telegram Bot API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Bot API host. Overridable for proxies and tests.
    #[serde(default = "default_telegram_api_base")]
    pub api_base: String,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            api_base: default_telegram_api_base(),
        }
    }
}

fn default_endpoint() -> String {
    "https://practicum.yandex.ru/api/user_api/homework_statuses/".to_string()
}

fn default_poll_interval() -> u64 {
    600
}

fn default_request_timeout() -> u64 {
    30
}

fn default_telegram_api_base() -> String {
    "https://api.telegram.org".to_string()
}

/// The three required credentials, read once at startup.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Bearer token for the review API.
    pub practicum_token: String,
    /// Telegram bot token.
    pub telegram_token: String,
    /// The one chat that receives notifications.
    pub telegram_chat_id: String,
}

impl Credentials {
    /// Read credentials from the process environment.
    ///
    /// Collects every missing variable into a single error so the operator
    /// fixes them all at once. An empty value counts as missing.
    pub fn from_env() -> Result<Self, HwbotError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env), with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HwbotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut values = Vec::with_capacity(REQUIRED_VARS.len());
        let mut missing = Vec::new();
        for name in REQUIRED_VARS {
            match lookup(name) {
                Some(v) if !v.is_empty() => values.push(v),
                _ => missing.push(name),
            }
        }
        if !missing.is_empty() {
            return Err(HwbotError::Config(format!(
                "missing required environment variables: {}",
                missing.join(", ")
            )));
        }
        let mut values = values.into_iter();
        Ok(Self {
            practicum_token: values.next().unwrap_or_default(),
            telegram_token: values.next().unwrap_or_default(),
            telegram_chat_id: values.next().unwrap_or_default(),
        })
    }
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, HwbotError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| HwbotError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| HwbotError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}
