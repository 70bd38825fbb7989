//! Gyms repository seam and its implementations

mod in_memory;
mod sqlite;

pub use in_memory::InMemoryGymsRepository;

use async_trait::async_trait;
use gymcheck_database::{DatabaseResult, Gym, NewGym, Page};

use crate::geo::Coordinate;

/// Radius used by `find_many_nearby`
pub const NEARBY_RADIUS_KM: f64 = 10.0;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GymsRepository: Send + Sync {
    async fn create(&self, new_gym: NewGym) -> DatabaseResult<Gym>;
    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<Gym>>;
    async fn search_many(&self, query: &str, page: Page) -> DatabaseResult<Vec<Gym>>;
    /// Gyms within `NEARBY_RADIUS_KM` of the coordinate
    async fn find_many_nearby(&self, coordinate: Coordinate) -> DatabaseResult<Vec<Gym>>;
}
