use crate::error::AppError;
use crate::models::{
    CreateStudyRequest, PaginatedStudiesResponse, PaginationInfo, StudyQueryParams, StudyResponse,
    UpdateStudyRequest,
};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;

pub async fn create_study(
    State(app_state): State<AppState>,
    Json(request): Json<CreateStudyRequest>,
) -> Result<(StatusCode, Json<StudyResponse>), AppError> {
    let study = app_state.study_service.create_study(request).await?;
    Ok((StatusCode::CREATED, Json(study)))
}

/// List studies with pagination, search, and filter support
pub async fn list_studies(
    State(app_state): State<AppState>,
    Query(params): Query<StudyQueryParams>,
) -> Result<Json<PaginatedStudiesResponse>, AppError> {
    let (studies, total) = app_state
        .study_service
        .get_studies_paginated(params.page, params.page_size, params.search, params.status)
        .await?;

    let page = params.page.unwrap_or(1).max(1);
    let page_size = params.page_size.unwrap_or(10).clamp(1, 100);
    let total_pages = ((total as f64) / (page_size as f64)).ceil() as u32;

    Ok(Json(PaginatedStudiesResponse {
        studies,
        pagination: PaginationInfo {
            page,
            page_size,
            total,
            total_pages,
        },
    }))
}

pub async fn get_study(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StudyResponse>, AppError> {
    let study = app_state
        .study_service
        .get_study_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Study not found".to_string()))?;

    Ok(Json(study.into()))
}

pub async fn update_study(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStudyRequest>,
) -> Result<Json<StudyResponse>, AppError> {
    let study = app_state.study_service.update_study(id, request).await?;
    Ok(Json(study))
}

pub async fn delete_study(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    app_state.study_service.delete_study(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
