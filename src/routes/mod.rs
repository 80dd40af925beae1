pub mod build_routes;
pub mod health_routes;
pub mod settings_routes;
pub mod study_routes;

pub use build_routes::*;
pub use health_routes::*;
pub use settings_routes::*;
pub use study_routes::*;

use crate::middleware::require_auth;
use crate::state::AppState;
use axum::{middleware, Router};

/// Assemble the full route table. Branding reads, build info and health
/// stay public; everything else sits behind token auth.
pub fn create_app_router(state: AppState) -> Router {
    let public = Router::new()
        .merge(create_health_routes())
        .merge(create_build_routes())
        .merge(create_settings_public_routes());

    let protected = Router::new()
        .merge(create_study_routes())
        .merge(create_settings_routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    public.merge(protected).with_state(state)
}
