//! Web layer module
//!
//! HTTP interface for the catalog addon. Three consumer-facing routes
//! (manifest, catalog, refresh trigger) plus a liveness check. Handlers are
//! thin: they read the cache snapshot or spawn a refresh run and never
//! surface an error status to the catalog consumer.

use anyhow::Result;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::cache::MovieCache;
use crate::config::Config;
use crate::refresher::CatalogRefresher;

pub mod handlers;

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub fn new(config: &Config, cache: MovieCache, refresher: CatalogRefresher) -> Result<Self> {
        let app = Self::create_router(AppState { cache, refresher });
        let addr: SocketAddr = format!("{}:{}", config.web.host, config.web.port).parse()?;

        Ok(Self { app, addr })
    }

    fn create_router(state: AppState) -> Router {
        Router::new()
            .route("/manifest.json", get(handlers::manifest))
            .route("/catalog/movie/malayalam.json", get(handlers::catalog))
            .route("/refresh", get(handlers::refresh))
            .route("/health", get(handlers::health))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(state)
    }

    /// Start the web server
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, self.app).await?;
        Ok(())
    }

    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub cache: MovieCache,
    pub refresher: CatalogRefresher,
}
