use crate::handlers::{
    create_settings, delete_favicon, delete_logo, delete_settings, get_favicon, get_info, get_logo,
    get_settings, list_settings, update_settings, upload_favicon, upload_logo,
};
use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};

/// Routes that require an authenticated caller.
pub fn create_settings_routes() -> Router<AppState> {
    Router::new()
        .route("/client-settings", get(list_settings).post(create_settings))
        .route(
            "/client-settings/{id}",
            get(get_settings)
                .put(update_settings)
                .patch(update_settings)
                .delete(delete_settings),
        )
        .route("/client-settings/{id}/logo/upload", post(upload_logo))
        .route("/client-settings/{id}/favicon/upload", post(upload_favicon))
        .route("/client-settings/{id}/logo/delete", put(delete_logo))
        .route("/client-settings/{id}/favicon/delete", put(delete_favicon))
}

/// Branding endpoints the frontend reads before anyone logs in.
pub fn create_settings_public_routes() -> Router<AppState> {
    Router::new()
        .route("/client-settings/info", get(get_info))
        .route("/client-settings/logo", get(get_logo))
        .route("/client-settings/favicon", get(get_favicon))
}
