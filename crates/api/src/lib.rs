//! `api` crate — HTTP REST API layer.
//!
//! Exposes:
//!   GET    /                                       → redirect to /static/index.html
//!   GET    /activities
//!   POST   /activities/{activity_name}/signup?email=…
//!   DELETE /activities/{activity_name}/unregister?email=…
//!   GET    /static/*                               → front-end assets

pub mod error;
pub mod handlers;

use std::path::{Path, PathBuf};

use axum::{
    response::Redirect,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use db::DbPool;

pub use error::ApiError;
pub use handlers::AppState;

/// Where to listen and what to serve.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address, e.g. `0.0.0.0:8000`.
    pub bind: String,
    /// Directory mounted under `/static`.
    pub static_dir: PathBuf,
}

/// Build the application router around an explicit store handle.
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        .route("/activities", get(handlers::activities::list))
        .route(
            "/activities/:activity_name/signup",
            post(handlers::activities::signup),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(handlers::activities::unregister),
        )
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind `config.bind` and serve until Ctrl-C.
pub async fn serve(config: ServerConfig, pool: DbPool) -> std::io::Result<()> {
    let app = router(AppState::new(pool), &config.static_dir);

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    info!(
        "API listening on http://{} (static assets from {})",
        listener.local_addr()?,
        config.static_dir.display()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}

#[cfg(test)]
mod router_tests;
