//! # Chat Sidebar
//!
//! Serves the server sidebar of a Discord-style chat application.
//!
//! This is the application entry point that initializes:
//! - Configuration loading
//! - Tracing/logging subsystem
//! - Database connection pool and migrations
//! - HTTP server

use anyhow::Result;
use tracing::info;

use chat_sidebar::config::Settings;
use chat_sidebar::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Settings first: they decide the log format
    let settings = Settings::load()?;
    chat_sidebar::telemetry::init_tracing(&settings.telemetry);

    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
