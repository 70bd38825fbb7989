//! # Gymcheck Gyms Crate
//!
//! Gym registration, title search and proximity lookup, plus the great-circle
//! distance helper the check-in geofence relies on.

pub mod geo;
pub mod repositories;
pub mod services;
pub mod types;

pub use geo::{distance_between_coordinates, Coordinate};
pub use gymcheck_database::{Gym, NewGym};
pub use repositories::{InMemoryGymsRepository, GymsRepository, NEARBY_RADIUS_KM};
pub use services::{CreateGymRequest, CreateGymUseCase, FetchNearbyGymsUseCase, SearchGymsUseCase};
pub use types::{GymError, GymResult};
