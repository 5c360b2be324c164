//! Registration and login handlers
//!
//! Both endpoints answer a bare signed token string on success.

use axum::{extract::State, Json};
use validator::Validate;

use catalog_core::domain::{LoginUser, RegisterUser};

use crate::error::ApiError;
use crate::state::AppState;

/// POST /register (anonymous)
pub async fn register(
    State(state): State<AppState>,
    payload: Option<Json<RegisterUser>>,
) -> Result<Json<String>, ApiError> {
    let Some(Json(payload)) = payload else {
        return Err(ApiError::BadRequest("User not informed".to_string()));
    };
    payload.validate()?;

    let token = state.auth.register(&payload).await?;
    Ok(Json(token))
}

/// POST /login (anonymous)
pub async fn login(
    State(state): State<AppState>,
    payload: Option<Json<LoginUser>>,
) -> Result<Json<String>, ApiError> {
    let Some(Json(payload)) = payload else {
        return Err(ApiError::BadRequest(
            "Username or Password not informed".to_string(),
        ));
    };
    payload.validate()?;

    let token = state.auth.login(&payload).await?;
    Ok(Json(token))
}
