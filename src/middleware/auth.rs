use crate::error::AppError;
use crate::state::AppState;
use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Authenticated principal, inserted into request extensions for handlers.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
}

/// Check the bearer token against stored digests and reject the request
/// if it does not resolve to an active user.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Missing bearer token".to_string()))?;

    let digest = token_digest(token);

    let user = state
        .iam_service
        .user_by_token_digest(&digest)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Rejected request carrying an unknown API token");
            AppError::Unauthorized("Invalid or expired token".to_string())
        })?;

    req.extensions_mut().insert(CurrentUser {
        id: user.id,
        email: user.email,
    });

    Ok(next.run(req).await)
}

/// API tokens are never stored in clear; only their SHA-256 hex digest is.
pub fn token_digest(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_digest_is_hex_sha256() {
        let digest = token_digest("some-api-token");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        // deterministic, and sensitive to the input
        assert_eq!(digest, token_digest("some-api-token"));
        assert_ne!(digest, token_digest("other-api-token"));
    }
}
