use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{lookup, today};
use super::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/lookup", get(lookup))
        .route("/api/today", get(today))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
