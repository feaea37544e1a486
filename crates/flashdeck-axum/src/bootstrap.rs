//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. The concrete repository is instantiated here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use flashdeck_core::ports::FlashcardRepository;
use flashdeck_store::StoreFactory;

/// Default port for the HTTP server.
pub const DEFAULT_PORT: u16 = 5000;

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Optional path to static assets for SPA serving.
    pub static_dir: Option<PathBuf>,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ServerConfig {
    /// Create config with default values.
    pub fn with_defaults() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: None,
            cors: CorsConfig::default(),
        }
    }

    /// Set the bind address.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the static directory for SPA serving.
    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(path.into());
        self
    }

    /// Set CORS to allow specific origins.
    ///
    /// An empty list keeps the current setting.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        if !origins.is_empty() {
            self.cors = CorsConfig::AllowOrigins(origins);
        }
        self
    }
}

/// Application context for the Axum adapter.
///
/// Holds the one repository instance for the process; every handler
/// reaches storage through it.
pub struct AxumContext {
    /// Deck and card storage.
    pub repo: Arc<dyn FlashcardRepository>,
}

impl AxumContext {
    /// Wrap an existing repository.
    pub fn new(repo: Arc<dyn FlashcardRepository>) -> Self {
        Self { repo }
    }
}

/// Bootstrap the Axum context with a fresh in-memory store.
pub fn bootstrap() -> AxumContext {
    tracing::info!(target: "flashdeck.store", backend = "memory", "Initialized flashcard store");
    AxumContext::new(StoreFactory::build_repository())
}

/// Start the web server.
///
/// If `config.static_dir` is set, serves static assets with SPA fallback.
/// Otherwise, serves only the API endpoints. Returns after Ctrl+C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap();
    let repo = Arc::clone(&ctx.repo);

    // Choose router based on whether static serving is configured
    let app = if let Some(ref static_dir) = config.static_dir {
        info!("Serving static assets from: {}", static_dir.display());
        crate::routes::create_spa_router(ctx, static_dir, &config.cors)
    } else {
        crate::routes::create_router(ctx, &config.cors)
    };

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;
    let local_addr = listener.local_addr()?;

    if config.static_dir.is_some() {
        info!("flashdeck web server (with UI) listening on http://{}", local_addr);
    } else {
        info!("flashdeck web server (API only) listening on http://{}", local_addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(
        decks = repo.deck_count().await?,
        cards = repo.card_count().await?,
        "Server stopped; in-memory data discarded"
    );
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
