//! Bot configuration loaded from the environment.
//!
//! Variables:
//! - `TOKEN` -- Telegram bot token (required to serve)
//! - `HOST` -- liveness server bind address (default `0.0.0.0`)
//! - `PORT` -- liveness server port (default `3000`)
//! - `IMAGES_DIR` -- directory holding `<day>.<ext>` illustrations (default `images`)
//! - `LUNAR_LAT` / `LUNAR_LON` -- observer site in degrees (default 45.0 / 34.0)

use std::net::SocketAddr;
use std::path::PathBuf;

use luna_clock::GeoLocation;

use crate::error::ConfigError;

/// Default observer latitude, degrees north.
pub const DEFAULT_LATITUDE_DEG: f64 = 45.0;

/// Default observer longitude, degrees east.
pub const DEFAULT_LONGITUDE_DEG: f64 = 34.0;

/// Default liveness port.
pub const DEFAULT_PORT: u16 = 3000;

/// Complete bot configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct BotConfig {
    /// Telegram bot token. Only `serve` needs it.
    pub token: Option<String>,
    /// Liveness server host.
    pub host: String,
    /// Liveness server port.
    pub port: u16,
    /// Directory with per-day images.
    pub images_dir: PathBuf,
    /// Observer site for the lunar clock.
    pub location: GeoLocation,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token: None,
            host: String::from("0.0.0.0"),
            port: DEFAULT_PORT,
            images_dir: PathBuf::from("images"),
            location: GeoLocation::new(DEFAULT_LATITUDE_DEG, DEFAULT_LONGITUDE_DEG, 0.0),
        }
    }
}

impl BotConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let token = lookup("TOKEN").filter(|t| !t.trim().is_empty());
        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = parse_or("PORT", lookup("PORT"), defaults.port)?;
        let images_dir = lookup("IMAGES_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.images_dir);
        let latitude = parse_or("LUNAR_LAT", lookup("LUNAR_LAT"), DEFAULT_LATITUDE_DEG)?;
        let longitude = parse_or("LUNAR_LON", lookup("LUNAR_LON"), DEFAULT_LONGITUDE_DEG)?;

        let location = GeoLocation::new(latitude, longitude, 0.0);
        location.check().map_err(|reason| ConfigError::Invalid {
            name: "LUNAR_LAT/LUNAR_LON",
            value: format!("{latitude},{longitude}"),
            reason: reason.to_owned(),
        })?;

        Ok(Self {
            token,
            host,
            port,
            images_dir,
            location,
        })
    }

    /// The bot token, or an error naming the missing variable.
    pub fn require_token(&self) -> Result<&str, ConfigError> {
        self.token.as_deref().ok_or(ConfigError::Missing("TOKEN"))
    }

    /// Socket address for the liveness server.
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
            name: "HOST",
            value: self.host.clone(),
            reason: e.to_string(),
        })
    }
}

fn parse_or<T>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
            value,
        }),
    }
}
