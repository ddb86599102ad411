mod error;
mod handlers;

use crate::update::Updater;
use anyhow::Result;
use axum::{extract::DefaultBodyLimit, routing::post, Router};
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Clone)]
pub struct AppState {
    updater: Arc<Updater>,
}

impl AppState {
    pub fn new(updater: Updater) -> Self {
        AppState {
            updater: Arc::new(updater),
        }
    }

    pub fn updater(&self) -> &Updater {
        &self.updater
    }
}

/// Mounts the update endpoint at `endpoint`. Any method other than POST gets a 405.
/// Bodies larger than `max_body_bytes` are answered with the usual 500 failure body.
pub fn router(endpoint: &str, max_body_bytes: usize, state: AppState) -> Router {
    Router::new()
        .route(
            endpoint,
            post(handlers::update_data)
                .fallback(handlers::method_not_allowed)
                .layer(DefaultBodyLimit::max(max_body_bytes)),
        )
        .with_state(state)
}

pub async fn serve(listener: TcpListener, router: Router) -> Result<()> {
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("Cannot listen for shutdown signal: {}", err);
        return;
    }

    log::info!("Shutting down");
}
