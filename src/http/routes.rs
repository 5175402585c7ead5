use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Reference data
        .route("/languages", get(handlers::list_languages))
        // Transcription control
        .route(
            "/sessions/transcription/start",
            post(handlers::start_transcription),
        )
        .route(
            "/sessions/transcription/stop/:session_id",
            post(handlers::stop_transcription),
        )
        .route(
            "/sessions/transcription/:session_id/transcript",
            get(handlers::get_transcript),
        )
        // Translation control
        .route(
            "/sessions/translation/start",
            post(handlers::start_translation),
        )
        .route(
            "/sessions/translation/stop/:session_id",
            post(handlers::stop_translation),
        )
        .route(
            "/sessions/translation/:session_id/results",
            get(handlers::get_translation_results),
        )
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
