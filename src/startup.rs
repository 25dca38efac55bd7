//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;

use crate::config::Settings;
use crate::domain::{ProfileRepository, ServerRepository};
use crate::infrastructure::database;
use crate::infrastructure::repositories::{PgProfileRepository, PgServerRepository};
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub profiles: Arc<dyn ProfileRepository>,
    pub servers: Arc<dyn ServerRepository>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// State backed by PostgreSQL repositories on `db`.
    pub fn new(db: PgPool, settings: Settings) -> Self {
        Self {
            profiles: Arc::new(PgProfileRepository::new(db.clone())),
            servers: Arc::new(PgServerRepository::new(db.clone())),
            db,
            settings: Arc::new(settings),
        }
    }
}

/// Router with all middleware applied.
pub fn build_router(state: AppState) -> Router {
    let cors_layer = cors::create_cors_layer(&state.settings.cors);
    routes::create_router(state)
        .layer(CompressionLayer::new())
        .layer(logging::create_trace_layer())
        .layer(cors_layer)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let db = database::create_pool(&settings.database).await?;
        tracing::info!("Database connection pool created");

        if settings.database.run_migrations {
            database::run_migrations(&db).await?;
            tracing::info!("Database migrations applied");
        }

        handlers::health::init_server_start();

        let addr: SocketAddr = settings.server_addr().parse()?;
        let router = build_router(AppState::new(db, settings));

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
