//! Error types for the bot service.
//!
//! Uses `thiserror` for typed errors; the binary wraps them in `anyhow`
//! at the top level only.

use luna_clock::ClockError;

/// Configuration is missing or malformed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required env var {0}")]
    Missing(&'static str),

    /// An environment variable is set but cannot be parsed.
    #[error("invalid {name}={value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Errors raised while running the bot.
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    /// Configuration problem detected at startup.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Telegram Bot API request failed.
    #[error("telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// Lunar clock could not produce a reading.
    #[error("clock error: {0}")]
    Clock(#[from] ClockError),

    /// The liveness server failed to bind or serve.
    #[error("liveness server error: {0}")]
    Server(#[from] std::io::Error),
}
