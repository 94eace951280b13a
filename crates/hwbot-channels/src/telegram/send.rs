//! Outbound Bot API calls and the Notifier implementation.

use super::types::{TgMessage, TgResponse, TgUser};
use super::TelegramChannel;
use async_trait::async_trait;
use hwbot_core::{error::HwbotError, traits::Notifier};
use tracing::{debug, info};

#[async_trait]
impl Notifier for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn notify(&self, text: &str) -> Result<(), HwbotError> {
        debug!("sending message to chat {}", self.chat_id);

        let url = format!("{}/sendMessage", self.base_url);
        let body: TgResponse<TgMessage> = self
            .client
            .post(&url)
            .json(&serde_json::json!({
                "chat_id": self.chat_id,
                "text": text,
            }))
            .send()
            .await
            .map_err(|e| HwbotError::Channel(format!("telegram sendMessage failed: {e}")))?
            .json()
            .await
            .map_err(|e| HwbotError::Channel(format!("telegram sendMessage parse failed: {e}")))?;

        if !body.ok {
            return Err(HwbotError::Channel(format!(
                "telegram API error: {}",
                body.description.unwrap_or_default()
            )));
        }

        info!("message delivered to chat {}", self.chat_id);
        Ok(())
    }
}

impl TelegramChannel {
    /// Call `getMe` and return the bot's username. Startup self-check.
    pub async fn get_me(&self) -> Result<String, HwbotError> {
        let url = format!("{}/getMe", self.base_url);
        let body: TgResponse<TgUser> = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| HwbotError::Channel(format!("telegram getMe failed: {e}")))?
            .json()
            .await
            .map_err(|e| HwbotError::Channel(format!("telegram getMe parse failed: {e}")))?;

        if !body.ok {
            return Err(HwbotError::Channel(format!(
                "telegram API error: {}",
                body.description.unwrap_or_default()
            )));
        }

        let user = body
            .result
            .ok_or_else(|| HwbotError::Channel("telegram getMe returned no user".into()))?;
        Ok(user.username.unwrap_or(user.first_name))
    }
}
