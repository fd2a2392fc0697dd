use super::handlers;
use super::state::AppState;
use crate::config::HttpConfig;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState, http: &HttpConfig) -> Router {
    let router = Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Page
        .route("/", get(handlers::index))
        .route("/meetings", post(handlers::submit_meeting))
        .route("/meetings/list", get(handlers::meeting_list_fragment))
        // Delegated stop control, keyed by the posted meeting id
        .route("/meetings/stop", post(handlers::stop_meeting))
        // JSON view of the meeting list
        .route("/api/meetings", get(handlers::list_meetings))
        .nest_service("/static", ServeDir::new(&http.static_dir));

    let router = if http.cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
