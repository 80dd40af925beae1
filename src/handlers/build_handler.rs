use crate::error::AppError;
use crate::models::BuildInfo;
use crate::state::AppState;
use axum::{extract::State, response::Json};

/// Deployment version and seat usage for the frontend about screen.
pub async fn get_build(State(app_state): State<AppState>) -> Result<Json<BuildInfo>, AppError> {
    let editor_count = app_state.iam_service.count_editors().await?;
    Ok(Json(BuildInfo::compute(&app_state.build, editor_count)))
}
