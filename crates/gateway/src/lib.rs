//! # Gymcheck Gateway Crate
//!
//! HTTP surface of the gym check-in backend. Handlers validate input, pull a
//! use-case from [`AppState`] and map domain errors onto status codes.
//!
//! - **REST**: endpoints with OpenAPI documentation
//! - **State**: the composition root holding repositories and capabilities
//! - **Middleware**: bearer-token extractors, tracing and CORS layers
//!
//! ## Usage
//!
//! ```no_run
//! use gymcheck_gateway::{create_router, AppState};
//!
//! # async fn run() -> std::io::Result<()> {
//! let app = create_router(AppState::builder().build());
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3333").await?;
//! axum::serve(listener, app).await
//! # }
//! ```

pub mod error;
pub mod middleware;
pub mod rest;
pub mod state;
pub mod validation;

pub use error::{ErrorResponse, GatewayError, GatewayResult};
pub use middleware::{AdminUser, AuthUser};
pub use state::{AppState, AppStateBuilder};

use axum::Router;
use std::sync::Arc;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        rest::health::health_check,
        rest::users::register,
        rest::users::profile,
        rest::sessions::authenticate,
        rest::sessions::refresh,
        rest::gyms::create_gym,
        rest::gyms::search_gyms,
        rest::gyms::nearby_gyms,
        rest::check_ins::create_check_in,
        rest::check_ins::history,
        rest::check_ins::metrics,
        rest::check_ins::validate_check_in,
    ),
    components(
        schemas(
            ErrorResponse,
            rest::health::HealthResponse,
            rest::users::RegisterBody,
            rest::users::UserResponse,
            rest::users::ProfileResponse,
            rest::sessions::AuthenticateBody,
            rest::sessions::TokenResponse,
            rest::gyms::CreateGymBody,
            rest::gyms::GymResponse,
            rest::gyms::GymEnvelope,
            rest::gyms::GymsResponse,
            rest::check_ins::CheckInBody,
            rest::check_ins::CheckInResponse,
            rest::check_ins::CheckInEnvelope,
            rest::check_ins::CheckInHistoryResponse,
            rest::check_ins::MetricsResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Users", description = "Registration and profile"),
        (name = "Sessions", description = "Login and token refresh"),
        (name = "Gyms", description = "Gym registry and discovery"),
        (name = "Check-ins", description = "Check-in lifecycle and metrics"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Create the main application router with all routes
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .merge(rest::create_rest_routes().with_state(Arc::new(state)))
        .layer(middleware::create_cors_layer())
        .layer(middleware::create_trace_layer());

    #[cfg(debug_assertions)]
    {
        use utoipa_swagger_ui::SwaggerUi;

        router = router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    router
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/users",
            "/me",
            "/sessions",
            "/token/refresh",
            "/gyms",
            "/gyms/search",
            "/gyms/nearby",
            "/gyms/{gym_id}/check-ins",
            "/check-ins/history",
            "/check-ins/metrics",
            "/check-ins/{check_in_id}/validate",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
        let schemes = doc.components.map(|c| c.security_schemes).unwrap_or_default();
        assert!(schemes.contains_key("bearerAuth"));
    }
}
