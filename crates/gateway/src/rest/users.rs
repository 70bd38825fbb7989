//! Registration and profile endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use gymcheck_database::User;
use gymcheck_users::RegisterRequest;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::{GatewayError, GatewayResult};
use crate::middleware::AuthUser;
use crate::state::AppState;
use crate::validation::{validate_email, validate_name, validate_password};

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterBody {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Public view of a user; never carries the password hash
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role.to_string(),
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub user: UserResponse,
}

pub fn create_user_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", post(register))
        .route("/me", get(profile))
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = RegisterBody,
    responses(
        (status = 201, description = "User registered", body = ProfileResponse),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 409, description = "Email already registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegisterBody>, JsonRejection>,
) -> GatewayResult<(StatusCode, Json<ProfileResponse>)> {
    let Json(body) = payload.map_err(|e| GatewayError::Validation(e.body_text()))?;
    validate_name(&body.name)?;
    validate_email(&body.email)?;
    validate_password(&body.password)?;

    let user = state
        .register_use_case()
        .execute(RegisterRequest {
            name: body.name,
            email: body.email,
            password: body.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ProfileResponse { user: user.into() }),
    ))
}

#[utoipa::path(
    get,
    path = "/me",
    tag = "Users",
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Authenticated user's profile", body = ProfileResponse),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorResponse),
        (status = 404, description = "User no longer exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn profile(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> GatewayResult<Json<ProfileResponse>> {
    let user = state
        .get_user_profile_use_case()
        .execute(&user.user_id)
        .await?;

    Ok(Json(ProfileResponse { user: user.into() }))
}
