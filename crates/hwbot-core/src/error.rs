use thiserror::Error;

/// Top-level error type for hwbot.
#[derive(Debug, Error)]
pub enum HwbotError {
    /// Configuration error. Fatal at startup; never produced mid-cycle.
    #[error("config error: {0}")]
    Config(String),

    /// Transport-level failure reaching the review API (DNS, connect,
    /// timeout). Recoverable: the watcher logs it and retries next cycle.
    #[error("connection error: {0}")]
    Connection(String),

    /// The review API answered with a non-success HTTP status.
    #[error("API returned status {0}")]
    Api(u16),

    /// The API payload has the wrong shape (not an object, missing key,
    /// mistyped field).
    #[error("bad API payload: {0}")]
    Payload(String),

    /// A homework record carries a status code outside the known set.
    #[error("unknown homework status: {0}")]
    UnknownStatus(String),

    /// Error from the messaging channel.
    #[error("channel error: {0}")]
    Channel(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
