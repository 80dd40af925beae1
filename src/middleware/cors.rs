use tower_http::cors::{Any, CorsLayer};

/// Permissive CORS for browser frontends served from another origin.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
