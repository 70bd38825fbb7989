//! Gym registry, search and proximity endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use gymcheck_database::Gym;
use gymcheck_gyms::{Coordinate, CreateGymRequest};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::error::{GatewayError, GatewayResult};
use crate::middleware::{AdminUser, AuthUser};
use crate::state::AppState;
use crate::validation::{validate_coordinate, validate_page, validate_title};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateGymBody {
    pub title: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GymResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: String,
}

impl From<Gym> for GymResponse {
    fn from(gym: Gym) -> Self {
        Self {
            id: gym.id,
            title: gym.title,
            description: gym.description,
            phone: gym.phone,
            latitude: gym.latitude.to_f64().unwrap_or_default(),
            longitude: gym.longitude.to_f64().unwrap_or_default(),
            created_at: gym.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GymEnvelope {
    pub gym: GymResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GymsResponse {
    pub gyms: Vec<GymResponse>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchGymsQuery {
    /// Substring of the gym title, case-insensitive
    pub query: String,
    /// 1-based page number, 20 gyms per page
    pub page: Option<u32>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NearbyGymsQuery {
    pub latitude: f64,
    pub longitude: f64,
}

pub fn create_gym_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/gyms", post(create_gym))
        .route("/gyms/search", get(search_gyms))
        .route("/gyms/nearby", get(nearby_gyms))
}

fn to_decimal(value: f64, field: &str) -> GatewayResult<Decimal> {
    Decimal::from_f64(value)
        .ok_or_else(|| GatewayError::Validation(format!("{field} is not a valid number")))
}

fn query_error(rejection: QueryRejection) -> GatewayError {
    GatewayError::Validation(rejection.body_text())
}

#[utoipa::path(
    post,
    path = "/gyms",
    tag = "Gyms",
    security(("bearerAuth" = [])),
    request_body = CreateGymBody,
    responses(
        (status = 201, description = "Gym created", body = GymEnvelope),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 401, description = "Caller is not an admin", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_gym(
    State(state): State<Arc<AppState>>,
    AdminUser(_admin): AdminUser,
    payload: Result<Json<CreateGymBody>, JsonRejection>,
) -> GatewayResult<(StatusCode, Json<GymEnvelope>)> {
    let Json(body) = payload.map_err(|e| GatewayError::Validation(e.body_text()))?;
    validate_title(&body.title)?;
    validate_coordinate(body.latitude, body.longitude)?;

    let gym = state
        .create_gym_use_case()
        .execute(CreateGymRequest {
            title: body.title,
            description: body.description,
            phone: body.phone,
            latitude: to_decimal(body.latitude, "latitude")?,
            longitude: to_decimal(body.longitude, "longitude")?,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(GymEnvelope { gym: gym.into() })))
}

#[utoipa::path(
    get,
    path = "/gyms/search",
    tag = "Gyms",
    security(("bearerAuth" = [])),
    params(SearchGymsQuery),
    responses(
        (status = 200, description = "Matching gyms", body = GymsResponse),
        (status = 400, description = "Invalid query", body = crate::error::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorResponse)
    )
)]
pub async fn search_gyms(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    params: Result<Query<SearchGymsQuery>, QueryRejection>,
) -> GatewayResult<Json<GymsResponse>> {
    let Query(params) = params.map_err(query_error)?;
    let page = params.page.unwrap_or(1);
    validate_page(page)?;

    let gyms = state
        .search_gyms_use_case()
        .execute(&params.query, page)
        .await?;

    Ok(Json(GymsResponse {
        gyms: gyms.into_iter().map(GymResponse::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/gyms/nearby",
    tag = "Gyms",
    security(("bearerAuth" = [])),
    params(NearbyGymsQuery),
    responses(
        (status = 200, description = "Gyms within 10 km", body = GymsResponse),
        (status = 400, description = "Invalid coordinates", body = crate::error::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorResponse)
    )
)]
pub async fn nearby_gyms(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    query: Result<Query<NearbyGymsQuery>, QueryRejection>,
) -> GatewayResult<Json<GymsResponse>> {
    let Query(query) = query.map_err(query_error)?;
    validate_coordinate(query.latitude, query.longitude)?;

    let gyms = state
        .fetch_nearby_gyms_use_case()
        .execute(Coordinate::new(query.latitude, query.longitude))
        .await?;

    Ok(Json(GymsResponse {
        gyms: gyms.into_iter().map(GymResponse::from).collect(),
    }))
}
