//! API error type and its HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use catalog_core::error::DomainError;
use catalog_security::password::IdentityError;

use crate::response::ValidationProblem;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(ValidationErrors),

    #[error("Account creation failed")]
    Identity(Vec<IdentityError>),

    #[error("Not found")]
    NotFound,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                tracing::warn!("Validation failed: {}", errors);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationProblem::from(&errors)),
                )
                    .into_response()
            }
            ApiError::Identity(errors) => {
                tracing::warn!("Account creation failed: {} error(s)", errors.len());
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Unauthorized(message) => {
                tracing::warn!("Unauthorized: {}", message);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorResponse {
                        error: "Unauthorized".to_string(),
                        message,
                    }),
                )
                    .into_response()
            }
            ApiError::BadRequest(message) => {
                tracing::warn!("Bad request: {}", message);
                (StatusCode::BAD_REQUEST, Json(message)).into_response()
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidCredentials => {
                ApiError::BadRequest("Invalid Username or Password".to_string())
            }
            DomainError::UserLockedOut => ApiError::BadRequest("Blocked user".to_string()),
            DomainError::IdentityErrors(errors) => ApiError::Identity(errors),
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}
