//! API Server - HTTP server for the analyze REST API

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::api::analyze::{self, AppState};
use crate::config::ShieldConfig;
use crate::error::Result;
use crate::scoring::ScamScorer;

/// API server over the scoring engine
pub struct ApiServer {
    state: Arc<AppState>,
    addr: String,
}

impl ApiServer {
    /// Create a new API server from configuration
    pub fn new(config: &ShieldConfig) -> Self {
        let state = Arc::new(AppState {
            scorer: ScamScorer::new(config.analyzer.scam_threshold),
        });

        Self {
            state,
            addr: config.server.listen_addr.clone(),
        }
    }

    /// Build the router with all routes
    pub fn router(&self) -> Router {
        // CORS configuration
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/health", get(analyze::health))
            .route("/api/analyze", post(analyze::analyze))
            .layer(cors)
            .with_state(self.state.clone())
    }

    /// Bind and serve until shutdown
    pub async fn run(&self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        info!("Analyze API listening on {}", self.addr);

        axum::serve(listener, self.router()).await?;

        Ok(())
    }
}
