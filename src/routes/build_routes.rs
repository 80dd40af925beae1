use crate::handlers::get_build;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_build_routes() -> Router<AppState> {
    Router::new().route("/build", get(get_build))
}
