use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::models::{
    BrandingKind, ClientSettingsResponse, ImagePayload, UpdateClientSettingsRequest,
};
use crate::state::AppState;
use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::Json,
    Extension,
};
use uuid::Uuid;

pub async fn list_settings(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<ClientSettingsResponse>>, AppError> {
    let settings = app_state.settings_service.list().await?;
    Ok(Json(settings.into_iter().map(Into::into).collect()))
}

pub async fn get_settings(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClientSettingsResponse>, AppError> {
    let settings = app_state
        .settings_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Client settings not found".to_string()))?;

    Ok(Json(settings.into()))
}

/// The settings record is provisioned at startup and cannot be created
/// over the API.
pub async fn create_settings() -> Result<StatusCode, AppError> {
    Err(AppError::MethodNotAllowed(
        "Client settings object cannot be created outside of startup.".to_string(),
    ))
}

pub async fn delete_settings() -> Result<StatusCode, AppError> {
    Err(AppError::MethodNotAllowed(
        "Client settings object cannot be deleted.".to_string(),
    ))
}

pub async fn update_settings(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateClientSettingsRequest>,
) -> Result<Json<ClientSettingsResponse>, AppError> {
    let settings = app_state.settings_service.update(id, request).await?;
    Ok(Json(settings))
}

/// Public branding snapshot for login and error pages.
pub async fn get_info(
    State(app_state): State<AppState>,
) -> Result<Json<ClientSettingsResponse>, AppError> {
    let settings = app_state
        .settings_service
        .get_singleton()
        .await?
        .ok_or_else(|| AppError::NotFound("Client settings not found".to_string()))?;

    Ok(Json(settings.into()))
}

pub async fn get_logo(
    State(app_state): State<AppState>,
) -> Result<Json<ImagePayload>, AppError> {
    let payload = app_state
        .settings_service
        .image_payload(BrandingKind::Logo)
        .await?;
    Ok(Json(payload))
}

pub async fn get_favicon(
    State(app_state): State<AppState>,
) -> Result<Json<ImagePayload>, AppError> {
    let payload = app_state
        .settings_service
        .image_payload(BrandingKind::Favicon)
        .await?;
    Ok(Json(payload))
}

pub async fn upload_logo(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<StatusCode, AppError> {
    handle_file_upload(app_state, id, BrandingKind::Logo, multipart).await
}

pub async fn upload_favicon(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<StatusCode, AppError> {
    handle_file_upload(app_state, id, BrandingKind::Favicon, multipart).await
}

pub async fn delete_logo(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Extension(user): Extension<CurrentUser>,
) -> Result<StatusCode, AppError> {
    handle_image_delete(app_state, id, user, BrandingKind::Logo).await
}

pub async fn delete_favicon(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Extension(user): Extension<CurrentUser>,
) -> Result<StatusCode, AppError> {
    handle_image_delete(app_state, id, user, BrandingKind::Favicon).await
}

/// Shared upload path for both branding slots. Rejections the client
/// can act on (missing record, refused content) keep their status;
/// anything unexpected is logged and flattened to a generic 400.
async fn handle_file_upload(
    app_state: AppState,
    id: Uuid,
    kind: BrandingKind,
    mut multipart: Multipart,
) -> Result<StatusCode, AppError> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            let filename = field
                .file_name()
                .map(|s| s.to_string())
                .unwrap_or_else(|| kind.field_name().to_string());
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            upload = Some((filename, data.to_vec()));
            break;
        }
    }

    let Some((filename, data)) = upload else {
        return Err(AppError::BadRequest("No file provided".to_string()));
    };

    match app_state
        .settings_service
        .attach_image(id, kind, &filename, data)
        .await
    {
        Ok(()) => Ok(StatusCode::OK),
        Err(e @ (AppError::NotFound(_) | AppError::InvalidFileType { .. })) => Err(e),
        Err(e) => {
            tracing::error!("Error uploading file: {}", e);
            Err(AppError::BadRequest("Error uploading file".to_string()))
        }
    }
}

async fn handle_image_delete(
    app_state: AppState,
    id: Uuid,
    user: CurrentUser,
    kind: BrandingKind,
) -> Result<StatusCode, AppError> {
    let viewable = app_state.iam_service.viewable_settings_ids(user.id).await?;
    if !viewable.contains(&id) {
        return Err(AppError::Forbidden);
    }

    let settings = match app_state.settings_service.get_by_id(id).await? {
        Some(settings) => settings,
        None => return Err(AppError::Forbidden),
    };

    // An authorized caller with nothing uploaded still gets the 403
    if settings.image_key(kind).is_none() {
        return Err(AppError::Forbidden);
    }

    app_state
        .settings_service
        .clear_image(&settings, kind)
        .await?;

    Ok(StatusCode::OK)
}
