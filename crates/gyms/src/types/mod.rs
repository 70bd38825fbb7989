//! Shared types for the gyms domain

pub mod errors;

pub use errors::GymError;

pub type GymResult<T> = Result<T, GymError>;
