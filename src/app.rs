use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/health", get(handlers::health))
        .route(
            "/api/generate-episode",
            post(handlers::generate_episode).fallback(handlers::method_not_allowed),
        )
        .with_state(state)
}
