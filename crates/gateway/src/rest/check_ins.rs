//! Check-in endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use gymcheck_check_ins::CheckInRequest;
use gymcheck_database::CheckIn;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::error::{GatewayError, GatewayResult};
use crate::middleware::{AdminUser, AuthUser};
use crate::state::AppState;
use crate::validation::{validate_coordinate, validate_page};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckInBody {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckInResponse {
    pub id: String,
    pub user_id: String,
    pub gym_id: String,
    pub created_at: String,
    pub validated_at: Option<String>,
}

impl From<CheckIn> for CheckInResponse {
    fn from(check_in: CheckIn) -> Self {
        Self {
            id: check_in.id,
            user_id: check_in.user_id,
            gym_id: check_in.gym_id,
            created_at: check_in.created_at.to_rfc3339(),
            validated_at: check_in.validated_at.map(|at| at.to_rfc3339()),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckInEnvelope {
    #[serde(rename = "checkIn")]
    pub check_in: CheckInResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckInHistoryResponse {
    #[serde(rename = "checkIns")]
    pub check_ins: Vec<CheckInResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MetricsResponse {
    #[serde(rename = "checkInsCount")]
    pub check_ins_count: u64,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HistoryQuery {
    /// 1-based page number, 20 check-ins per page
    pub page: Option<u32>,
}

pub fn create_check_in_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/gyms/:gym_id/check-ins", post(create_check_in))
        .route("/check-ins/history", get(history))
        .route("/check-ins/metrics", get(metrics))
        .route("/check-ins/:check_in_id/validate", patch(validate_check_in))
}

#[utoipa::path(
    post,
    path = "/gyms/{gym_id}/check-ins",
    tag = "Check-ins",
    security(("bearerAuth" = [])),
    params(("gym_id" = String, Path, description = "Gym id")),
    request_body = CheckInBody,
    responses(
        (status = 201, description = "Check-in created", body = CheckInEnvelope),
        (status = 400, description = "Too far from the gym", body = crate::error::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorResponse),
        (status = 404, description = "Gym not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Already checked in today", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_check_in(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(gym_id): Path<String>,
    payload: Result<Json<CheckInBody>, JsonRejection>,
) -> GatewayResult<(StatusCode, Json<CheckInEnvelope>)> {
    let Json(body) = payload.map_err(|e| GatewayError::Validation(e.body_text()))?;
    validate_coordinate(body.latitude, body.longitude)?;

    let check_in = state
        .check_in_use_case()
        .execute(CheckInRequest {
            user_id: user.user_id,
            gym_id,
            user_latitude: body.latitude,
            user_longitude: body.longitude,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CheckInEnvelope {
            check_in: check_in.into(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/check-ins/history",
    tag = "Check-ins",
    security(("bearerAuth" = [])),
    params(HistoryQuery),
    responses(
        (status = 200, description = "The caller's check-ins, oldest first", body = CheckInHistoryResponse),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorResponse)
    )
)]
pub async fn history(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> GatewayResult<Json<CheckInHistoryResponse>> {
    let Query(query) = query.map_err(|e| GatewayError::Validation(e.body_text()))?;
    let page = query.page.unwrap_or(1);
    validate_page(page)?;

    let check_ins = state
        .fetch_user_check_in_history_use_case()
        .execute(&user.user_id, page)
        .await?;

    Ok(Json(CheckInHistoryResponse {
        check_ins: check_ins.into_iter().map(CheckInResponse::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/check-ins/metrics",
    tag = "Check-ins",
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Total check-ins of the caller", body = MetricsResponse),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorResponse)
    )
)]
pub async fn metrics(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> GatewayResult<Json<MetricsResponse>> {
    let check_ins_count = state
        .get_user_metrics_use_case()
        .execute(&user.user_id)
        .await?;

    Ok(Json(MetricsResponse { check_ins_count }))
}

#[utoipa::path(
    patch,
    path = "/check-ins/{check_in_id}/validate",
    tag = "Check-ins",
    security(("bearerAuth" = [])),
    params(("check_in_id" = String, Path, description = "Check-in id")),
    responses(
        (status = 204, description = "Check-in validated"),
        (status = 400, description = "Validation window elapsed", body = crate::error::ErrorResponse),
        (status = 401, description = "Caller is not an admin", body = crate::error::ErrorResponse),
        (status = 404, description = "Check-in not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Already validated", body = crate::error::ErrorResponse)
    )
)]
pub async fn validate_check_in(
    State(state): State<Arc<AppState>>,
    AdminUser(_admin): AdminUser,
    Path(check_in_id): Path<String>,
) -> GatewayResult<StatusCode> {
    state
        .validate_check_in_use_case()
        .execute(&check_in_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
