use crate::handlers::{create_study, delete_study, get_study, list_studies, update_study};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_study_routes() -> Router<AppState> {
    Router::new()
        // Study management routes
        .route("/ebios-rm-studies", post(create_study).get(list_studies))
        .route(
            "/ebios-rm-studies/{id}",
            get(get_study)
                .put(update_study)
                .patch(update_study)
                .delete(delete_study),
        )
}
