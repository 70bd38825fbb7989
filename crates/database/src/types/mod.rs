//! Shared types and result types for the database layer

pub mod errors;
pub mod pagination;

pub use errors::DatabaseError;
pub use pagination::{Page, PAGE_SIZE};

pub type DatabaseResult<T> = Result<T, DatabaseError>;

/// Latitude/longitude rectangle used to prefilter spatial queries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}
