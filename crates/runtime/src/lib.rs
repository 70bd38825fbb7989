use std::sync::Arc;

use anyhow::{Context, Result};
use gymcheck_auth::{Argon2Hasher, JwtTokenIssuer};
use gymcheck_check_ins::CheckInPolicy;
use gymcheck_config::AppConfig;
use gymcheck_database::{
    initialize_database, CheckInRepository, GymRepository, SqlitePool, UserRepository,
};
use gymcheck_gateway::AppState;
use mockable::DefaultClock;
use tracing::info;

pub mod telemetry {
    use anyhow::Result;
    use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

    pub fn init_tracing() -> Result<()> {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let subscriber = SubscriberBuilder::default()
            .with_env_filter(env_filter)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|error| anyhow::anyhow!("failed to set tracing subscriber: {error}"))
    }
}

/// Long-lived handles shared by every entrypoint of the binary
#[derive(Clone)]
pub struct BackendServices {
    pub db_pool: SqlitePool,
    pub users: Arc<UserRepository>,
    pub gyms: Arc<GymRepository>,
    pub check_ins: Arc<CheckInRepository>,
    pub tokens: Arc<JwtTokenIssuer>,
    pub policy: CheckInPolicy,
}

impl BackendServices {
    pub async fn initialise(config: &AppConfig) -> Result<Self> {
        let db_pool = initialize_database(&config.database)
            .await
            .context("failed to initialise database")?;

        let policy = CheckInPolicy::from_config(&config.check_ins);
        info!(
            max_distance_km = policy.max_distance_km,
            validation_window_minutes = policy.validation_window_minutes,
            "check-in policy loaded"
        );

        let tokens = JwtTokenIssuer::from_config(&config.auth)
            .context("invalid token configuration")?;

        Ok(Self {
            users: Arc::new(UserRepository::new(db_pool.clone())),
            gyms: Arc::new(GymRepository::new(db_pool.clone())),
            check_ins: Arc::new(CheckInRepository::new(db_pool.clone())),
            tokens: Arc::new(tokens),
            db_pool,
            policy,
        })
    }

    /// Request-handling state backed by SQLite and the system clock
    pub fn app_state(&self) -> AppState {
        AppState::builder()
            .users(self.users.clone())
            .gyms(self.gyms.clone())
            .check_ins(self.check_ins.clone())
            .hasher(Arc::new(Argon2Hasher::new()))
            .token_issuer(self.tokens.clone())
            .clock(Arc::new(DefaultClock))
            .check_in_policy(self.policy)
            .build()
    }
}

pub async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(?error, "failed to listen for shutdown signal");
    }
    info!("shutdown signal received");
}
