mod config;
mod github;
mod http;
mod logger;
mod percent_encoding;
mod server;
mod update;

use anyhow::{Context, Result};
use config::Config;
use github::GithubClient;
use server::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use update::{Settings, Updater};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().await.context("Cannot load config")?;
    logger::init(config.level_filter()?)?;

    log::info!("Starting");
    let github = GithubClient::new(&config.api_url, &config.github_token, config.request_timeout())
        .context("Cannot create the github client")?;

    let updater = Updater::new(Arc::new(github), Settings::from(&config));
    let app = server::router(
        &config.endpoint,
        config.max_body_bytes,
        AppState::new(updater),
    );

    let listener = TcpListener::bind(&config.address)
        .await
        .with_context(|| format!("Cannot bind {}", config.address))?;

    log::info!("Listening on {}{}", config.address, config.endpoint);
    server::serve(listener, app).await
}
