use std::sync::Arc;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use luna_bot::assets::DirectoryAssets;
use luna_bot::reply::{self, Markup};
use luna_bot::stats::InMemoryRegistry;
use luna_bot::{AppState, BotConfig, handlers, health};
use luna_clock::{GeoLocation, LunarClock};
use teloxide::Bot;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "luna-bot", about = "Lunar day Telegram bot")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the Telegram dispatcher and liveness server (default)
    Serve,
    /// Print the lunar day and phase for one instant
    Today {
        /// Instant in RFC 3339 (default: now)
        #[arg(long)]
        at: Option<String>,
        /// Observer latitude in degrees (default: LUNAR_LAT or 45.0)
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Observer longitude in degrees (default: LUNAR_LON or 34.0)
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve().await,
        Commands::Today { at, lat, lon } => today(at.as_deref(), lat, lon),
    }
}

async fn serve() -> anyhow::Result<()> {
    let config = BotConfig::from_env()?;
    let token = config.require_token()?.to_owned();
    let addr = config.listen_addr()?;

    let assets = DirectoryAssets::scan(&config.images_dir);
    info!(
        images = assets.len(),
        lat = config.location.latitude_deg,
        lon = config.location.longitude_deg,
        "starting lunar bot"
    );

    let state = Arc::new(AppState::new(
        LunarClock::new(config.location),
        Box::new(assets),
        Box::new(InMemoryRegistry::new()),
    ));
    let bot = Bot::new(token);

    tokio::select! {
        result = health::serve(addr) => result.context("liveness server stopped")?,
        () = handlers::run_dispatcher(bot, state) => info!("dispatcher stopped"),
    }
    Ok(())
}

fn today(at: Option<&str>, lat: Option<f64>, lon: Option<f64>) -> anyhow::Result<()> {
    let config = BotConfig::from_env()?;
    let at: DateTime<Utc> = match at {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .with_context(|| format!("invalid --at value {raw:?}"))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };
    let location = GeoLocation::new(
        lat.unwrap_or(config.location.latitude_deg),
        lon.unwrap_or(config.location.longitude_deg),
        0.0,
    );
    location.check().map_err(anyhow::Error::msg)?;

    let reading = LunarClock::new(location).reading(at)?;
    println!("{}", reply::headline(&reading, Markup::Plain));
    println!("{}", reply::almanac_line(reading.day));
    println!("Элонгация: {:.2}°", reading.elongation_deg);
    Ok(())
}
