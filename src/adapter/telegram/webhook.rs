//! Webhook listener served by axum.

use std::net::SocketAddr;

use axum::routing::get;
use axum::Router;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks::{axum_to_router, Options};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use url::Url;

use crate::application::bot::DepositBot;
use crate::error::{Error, Result};

use super::dispatch::{dispatcher, register_bot_commands};

/// Body of the keep-alive routes.
pub const HEALTH_TEXT: &str = "Bot is running";

async fn health() -> &'static str {
    HEALTH_TEXT
}

/// Keep-alive routes for hosting platforms that ping the service.
pub fn health_router() -> Router {
    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
}

/// Register the webhook with Telegram and serve updates on `port` until
/// Ctrl-C.
///
/// # Errors
///
/// Returns an error when the webhook cannot be set or the port cannot be
/// bound.
pub async fn run_webhook(bot: Bot, service: DepositBot, endpoint: Url, port: u16) -> Result<()> {
    if let Err(e) = register_bot_commands(&bot).await {
        warn!(error = %e, "Failed to register bot commands with Telegram");
    }

    let address = SocketAddr::from(([0, 0, 0, 0], port));
    info!(url = %endpoint, %address, "Setting webhook");

    let (listener, stop_flag, router) = axum_to_router(bot.clone(), Options::new(address, endpoint))
        .await
        .map_err(|e| Error::Webhook(e.to_string()))?;
    let app = router.merge(health_router());

    let tcp = TcpListener::bind(address).await?;
    let server = tokio::spawn(async move {
        if let Err(e) = axum::serve(tcp, app)
            .with_graceful_shutdown(stop_flag)
            .await
        {
            error!(error = %e, "Webhook server failed");
        }
    });

    info!(port, "Bot started in webhook mode");
    dispatcher(bot, service)
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    if let Err(e) = server.await {
        error!(error = %e, "Webhook server task panicked");
    }
    info!("Webhook stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_handler_reports_running() {
        assert_eq!(health().await, "Bot is running");
    }
}
