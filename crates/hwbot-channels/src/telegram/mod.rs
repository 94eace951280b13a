//! Telegram Bot API channel.
//!
//! Uses `sendMessage` for notifications and `getMe` for the startup
//! self-check. Docs: <https://core.telegram.org/bots/api>

mod send;
pub(crate) mod types;


use hwbot_core::config::TelegramConfig;

/// Telegram channel delivering to one fixed chat.
pub struct TelegramChannel {
    client: reqwest::Client,
    base_url: String,
    chat_id: String,
}

impl TelegramChannel {
    /// Create a new Telegram channel from config, bot token, and chat id.
    pub fn new(config: &TelegramConfig, bot_token: &str, chat_id: String) -> Self {
        let base_url = format!("{}/bot{}", config.api_base, bot_token);
        Self {
            client: reqwest::Client::new(),
            base_url,
            chat_id,
        }
    }
}
