//! # Gymcheck Check-ins Crate
//!
//! Check-in creation behind a distance geofence and a one-per-day rule, the
//! time-bounded validation transition, and per-user history and metrics.

pub mod policy;
pub mod repositories;
pub mod services;
pub mod types;

#[cfg(test)]
mod test_support;

pub use gymcheck_database::{CheckIn, NewCheckIn};
pub use policy::{CheckInPolicy, CHECK_IN_VALIDATION_WINDOW_MINUTES, MAX_CHECK_IN_DISTANCE_KM};
pub use repositories::{CheckInsRepository, InMemoryCheckInsRepository};
pub use services::{
    CheckInRequest, CheckInUseCase, FetchUserCheckInHistoryUseCase, GetUserMetricsUseCase,
    ValidateCheckInUseCase,
};
pub use types::{CheckInError, CheckInResult};
