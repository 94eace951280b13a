use crate::error::HwbotError;
use async_trait::async_trait;
use serde_json::Value;

/// Review status source — where homework verdicts come from.
///
/// The production implementation talks to the Practicum API over HTTP;
/// tests substitute canned payloads.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch the raw status payload for submissions at or after `from_date`
    /// (Unix seconds). Returns the decoded JSON body verbatim; shape
    /// validation happens at the caller.
    async fn homework_statuses(&self, from_date: i64) -> Result<Value, HwbotError>;
}

/// Messaging channel for outbound notifications.
///
/// One fixed recipient, configured at construction time.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Human-readable channel name.
    fn name(&self) -> &str;

    /// Deliver `text` to the configured chat. No internal retry; the
    /// watcher owns retry policy.
    async fn notify(&self, text: &str) -> Result<(), HwbotError>;
}
