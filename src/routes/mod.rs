/// Application routes configuration
use crate::handlers::{
    apod, apod_page, epic, epic_page, health, mars_page, mars_photos, neos, neos_page, AppState,
};
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/api/health", get(health))
        // NASA relay endpoints
        .route("/api/apod", get(apod))
        .route("/api/mars-photos", get(mars_photos))
        .route("/api/epic", get(epic))
        .route("/api/neos", get(neos))
        // Rendered views
        .route("/", get(apod_page))
        .route("/apod", get(apod_page))
        .route("/mars", get(mars_page))
        .route("/epic", get(epic_page))
        .route("/neos", get(neos_page))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
