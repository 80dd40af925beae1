use axum::{body::Body, http::Request, middleware::Next, response::IntoResponse};
use std::time::Instant;
use tracing::{error, info};

/// Middleware function to log all incoming requests
pub async fn log_requests(req: Request<Body>, next: Next) -> impl IntoResponse {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let latency = start.elapsed();
    info!("{} {} -> {} in {:?}", method, uri, status, latency);

    if status.is_server_error() {
        error!("Error response for {} {}: {}", method, uri, status);
    }

    response
}
