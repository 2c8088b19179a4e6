//! Telegram bot that reports the current lunar day and moon phase.
//!
//! The binary runs two tasks: a long-polling Telegram dispatcher and a
//! liveness HTTP server. Both share one [`AppState`].

pub mod almanac;
pub mod assets;
pub mod config;
pub mod error;
pub mod handlers;
pub mod health;
pub mod reply;
pub mod stats;

use chrono::{DateTime, Utc};
use luna_clock::{ClockError, LunarClock};

use crate::assets::AssetResolver;
use crate::reply::Reply;
use crate::stats::UserRegistry;

pub use config::BotConfig;
pub use error::{BotError, ConfigError};

/// Shared, read-mostly state handed to every handler.
pub struct AppState {
    clock: LunarClock,
    assets: Box<dyn AssetResolver>,
    registry: Box<dyn UserRegistry>,
}

impl AppState {
    pub fn new(
        clock: LunarClock,
        assets: Box<dyn AssetResolver>,
        registry: Box<dyn UserRegistry>,
    ) -> Self {
        Self {
            clock,
            assets,
            registry,
        }
    }

    pub fn clock(&self) -> &LunarClock {
        &self.clock
    }

    pub fn registry(&self) -> &dyn UserRegistry {
        self.registry.as_ref()
    }

    /// Reading reply for instant `at`.
    pub fn reply_for(&self, at: DateTime<Utc>) -> Result<Reply, ClockError> {
        let reading = self.clock.reading(at)?;
        Ok(Reply::reading(&reading, self.assets.as_ref()))
    }
}
