//! Error types for the gateway layer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gymcheck_auth::AuthError;
use gymcheck_check_ins::CheckInError;
use gymcheck_gyms::GymError;
use gymcheck_users::UserError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

/// Body of every error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{0}")]
    Validation(String),

    #[error("Unauthorized.")]
    Unauthorized,

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Validation(_) | GatewayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::Unauthorized => StatusCode::UNAUTHORIZED,
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::Conflict(_) => StatusCode::CONFLICT,
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            GatewayError::Internal(detail) => {
                error!(error = %detail, "request failed");
                "Internal server error.".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

impl From<UserError> for GatewayError {
    fn from(error: UserError) -> Self {
        match error {
            UserError::UserAlreadyExists => GatewayError::Conflict(error.to_string()),
            UserError::InvalidCredentials => GatewayError::BadRequest(error.to_string()),
            UserError::ResourceNotFound => GatewayError::NotFound(error.to_string()),
            UserError::Hashing(_) | UserError::Repository(_) => {
                GatewayError::Internal(error.to_string())
            }
        }
    }
}

impl From<GymError> for GatewayError {
    fn from(error: GymError) -> Self {
        match error {
            GymError::Repository(_) => GatewayError::Internal(error.to_string()),
        }
    }
}

impl From<CheckInError> for GatewayError {
    fn from(error: CheckInError) -> Self {
        match error {
            CheckInError::ResourceNotFound => GatewayError::NotFound(error.to_string()),
            CheckInError::MaxDistance | CheckInError::LateCheckInValidation => {
                GatewayError::BadRequest(error.to_string())
            }
            CheckInError::MaxNumberOfCheckIns | CheckInError::AlreadyValidated => {
                GatewayError::Conflict(error.to_string())
            }
            CheckInError::Repository(_) => GatewayError::Internal(error.to_string()),
        }
    }
}

impl From<AuthError> for GatewayError {
    fn from(error: AuthError) -> Self {
        GatewayError::Internal(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_statuses() {
        let cases: Vec<(GatewayError, StatusCode)> = vec![
            (UserError::UserAlreadyExists.into(), StatusCode::CONFLICT),
            (UserError::InvalidCredentials.into(), StatusCode::BAD_REQUEST),
            (UserError::ResourceNotFound.into(), StatusCode::NOT_FOUND),
            (CheckInError::MaxDistance.into(), StatusCode::BAD_REQUEST),
            (CheckInError::MaxNumberOfCheckIns.into(), StatusCode::CONFLICT),
            (CheckInError::LateCheckInValidation.into(), StatusCode::BAD_REQUEST),
            (CheckInError::AlreadyValidated.into(), StatusCode::CONFLICT),
            (CheckInError::ResourceNotFound.into(), StatusCode::NOT_FOUND),
            (GatewayError::Unauthorized, StatusCode::UNAUTHORIZED),
        ];

        for (error, status) in cases {
            assert_eq!(error.status_code(), status, "{error}");
        }
    }

    #[test]
    fn internal_details_are_not_exposed() {
        let response = GatewayError::Internal("pool timed out".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
