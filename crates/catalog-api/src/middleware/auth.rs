//! Bearer-token gate for protected endpoints

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Identity injected into request extensions once the token checks out.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub username: String,
}

/// Validates the `Authorization: Bearer <token>` signature before the handler
/// runs. Signature validation uses the same symmetric secret as issuance;
/// lifetime is not checked because issued tokens carry no expiry.
pub async fn require_bearer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|t| t.to_string())
        .ok_or_else(|| ApiError::Unauthorized("Missing authorization token".to_string()))?;

    let claims = state
        .tokens
        .validate(&token)
        .map_err(|_| ApiError::Unauthorized("Invalid token".to_string()))?;

    req.extensions_mut().insert(AuthenticatedUser {
        username: claims.sub,
    });

    Ok(next.run(req).await)
}
