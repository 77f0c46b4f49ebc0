//! HTTP Routes
//!
//! - `/api/*-requests`, `/api/*-changes`: one forwarding endpoint per request kind
//! - `/api/health`, `/api/portal-config`: read-only helpers for the browser
//! - everything else: the built frontend, when a static directory exists

use axum::{
    routing::{get, post},
    Router,
};
use intake_domain::{DesignRequest, LsmRequest, PriceChange, RequestKind, StoreHoursChange};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

mod portal;
mod submissions;

#[cfg(test)]
mod tests;

pub use submissions::forward_submission;

pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/api/health", get(portal::health))
        .route("/api/portal-config", get(portal::portal_config))
        .route(
            DesignRequest::ENDPOINT,
            post(forward_submission::<DesignRequest>),
        )
        .route(LsmRequest::ENDPOINT, post(forward_submission::<LsmRequest>))
        .route(PriceChange::ENDPOINT, post(forward_submission::<PriceChange>))
        .route(
            StoreHoursChange::ENDPOINT,
            post(forward_submission::<StoreHoursChange>),
        );

    if let Some(dir) = state.config.static_dir.as_ref().filter(|d| d.is_dir()) {
        tracing::info!("Serving frontend from {}", dir.display());
        let index = ServeFile::new(dir.join("index.html"));
        router = router.fallback_service(ServeDir::new(dir).not_found_service(index));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
