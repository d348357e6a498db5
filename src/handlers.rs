use crate::errors::AppError;
use crate::models::{EpisodeResponse, HealthResponse};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};
use tracing::{error, info};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(state.daily_limit))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn generate_episode(
    State(state): State<AppState>,
) -> Result<Json<EpisodeResponse>, AppError> {
    match state.provider.generate(&state.prompt).await {
        Ok(episode) => {
            info!(chars = episode.chars().count(), "episode generated");
            Ok(Json(EpisodeResponse { episode }))
        }
        Err(err) => {
            error!(error = %err, "episode generation failed");
            Err(AppError::generation_failed())
        }
    }
}

pub async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed()
}
