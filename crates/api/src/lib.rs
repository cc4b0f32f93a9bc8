//! `api` crate — the HTTP health service.
//!
//! Exposes:
//!   GET /health  →  200 {"status": "ok"}
//!
//! [`router`] only builds the service; [`serve`] is the one place that binds
//! a socket.

pub mod error;
pub mod handlers;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use error::ApiError;

/// Build the application router.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .layer(TraceLayer::new_for_http())
}

/// Bind `bind` and serve [`router`] until the process is stopped.
pub async fn serve(bind: &str) -> Result<(), ApiError> {
    let listener = TcpListener::bind(bind).await.map_err(|source| ApiError::Bind {
        addr: bind.to_owned(),
        source,
    })?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router()).await?;
    Ok(())
}
