//! Liveness HTTP endpoint for hosting platforms that probe the process.

use std::net::SocketAddr;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tracing::info;

use crate::error::BotError;

/// Body returned by `GET /`.
pub const ALIVE_BODY: &str = "Bot is alive!";

/// Router with the single liveness route.
pub fn router() -> Router {
    Router::new().route("/", get(alive))
}

async fn alive() -> &'static str {
    ALIVE_BODY
}

/// Bind `addr` and serve the liveness router until the task is dropped.
pub async fn serve(addr: SocketAddr) -> Result<(), BotError> {
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "liveness server listening");
    axum::serve(listener, router()).await?;
    Ok(())
}
