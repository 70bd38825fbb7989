//! Session endpoints: password login and refresh-token rotation

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{patch, post},
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use gymcheck_auth::TokenKind;
use gymcheck_users::AuthenticateRequest;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use utoipa::ToSchema;

use crate::error::{GatewayError, GatewayResult};
use crate::state::AppState;
use crate::validation::{validate_email, validate_password};

pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

#[derive(Debug, Deserialize, ToSchema)]
pub struct AuthenticateBody {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

pub fn create_session_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sessions", post(authenticate))
        .route("/token/refresh", patch(refresh))
}

fn refresh_cookie(token: String) -> Cookie<'static> {
    Cookie::build((REFRESH_TOKEN_COOKIE, token))
        .path("/")
        .secure(true)
        .same_site(SameSite::Strict)
        .http_only(true)
        .build()
}

#[utoipa::path(
    post,
    path = "/sessions",
    tag = "Sessions",
    request_body = AuthenticateBody,
    responses(
        (status = 200, description = "Access token; refresh token set as cookie", body = TokenResponse),
        (status = 400, description = "Invalid credentials", body = crate::error::ErrorResponse)
    )
)]
pub async fn authenticate(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    payload: Result<Json<AuthenticateBody>, JsonRejection>,
) -> GatewayResult<(CookieJar, Json<TokenResponse>)> {
    let Json(body) = payload.map_err(|e| GatewayError::Validation(e.body_text()))?;
    validate_email(&body.email)?;
    validate_password(&body.password)?;

    let user = state
        .authenticate_use_case()
        .execute(AuthenticateRequest {
            email: body.email,
            password: body.password,
        })
        .await?;

    let pair = state.token_issuer().issue_pair(&user.id, user.role)?;
    info!(user_id = %user.id, "session opened");

    Ok((
        jar.add(refresh_cookie(pair.refresh_token)),
        Json(TokenResponse {
            token: pair.access_token,
        }),
    ))
}

#[utoipa::path(
    patch,
    path = "/token/refresh",
    tag = "Sessions",
    responses(
        (status = 200, description = "Rotated access token; new refresh cookie", body = TokenResponse),
        (status = 401, description = "Missing or invalid refresh cookie", body = crate::error::ErrorResponse)
    )
)]
pub async fn refresh(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> GatewayResult<(CookieJar, Json<TokenResponse>)> {
    let token = jar
        .get(REFRESH_TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or(GatewayError::Unauthorized)?;

    let claims = state
        .token_issuer()
        .verify(&token, TokenKind::Refresh)
        .map_err(|_| GatewayError::Unauthorized)?;

    let pair = state.token_issuer().issue_pair(&claims.sub, claims.role)?;

    Ok((
        jar.add(refresh_cookie(pair.refresh_token)),
        Json(TokenResponse {
            token: pair.access_token,
        }),
    ))
}
