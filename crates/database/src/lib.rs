//! Gymcheck Database Crate
//!
//! Connection management, migrations, entities and the SQLite repository
//! implementations backing the users, gyms and check-ins domains.

pub mod connection;
pub mod entities;
pub mod migrations;
pub mod repos;
pub mod types;

pub use connection::prepare_database;
pub use migrations::run_migrations;

pub use repos::{CheckInRepository, GymRepository, UserRepository};

pub use entities::{
    check_in::local_day, CheckIn, Gym, NewCheckIn, NewGym, NewUser, User, UserRole,
};

pub use types::{DatabaseError, DatabaseResult, GeoBounds, Page, PAGE_SIZE};

pub use sqlx::SqlitePool;

use gymcheck_config::DatabaseConfig;

/// Connect and apply migrations in one step
pub async fn initialize_database(config: &DatabaseConfig) -> DatabaseResult<SqlitePool> {
    let pool = prepare_database(config)
        .await
        .map_err(|e| DatabaseError::ConnectionError(format!("{e:#}")))?;

    run_migrations(&pool)
        .await
        .map_err(|e| DatabaseError::MigrationError(format!("{e:#}")))?;

    Ok(pool)
}
