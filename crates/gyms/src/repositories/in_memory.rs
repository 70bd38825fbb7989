use async_trait::async_trait;
use chrono::Utc;
use gymcheck_database::{DatabaseResult, Gym, NewGym, Page};
use tokio::sync::RwLock;

use super::{GymsRepository, NEARBY_RADIUS_KM};
use crate::geo::{distance_between_coordinates, Coordinate};

/// Vec-backed gyms store, kept in creation order
#[derive(Default)]
pub struct InMemoryGymsRepository {
    gyms: RwLock<Vec<Gym>>,
}

impl InMemoryGymsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn items(&self) -> Vec<Gym> {
        self.gyms.read().await.clone()
    }
}

#[async_trait]
impl GymsRepository for InMemoryGymsRepository {
    async fn create(&self, new_gym: NewGym) -> DatabaseResult<Gym> {
        let gym = Gym::from_new(new_gym, Utc::now());
        self.gyms.write().await.push(gym.clone());
        Ok(gym)
    }

    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<Gym>> {
        let gyms = self.gyms.read().await;
        Ok(gyms.iter().find(|g| g.id == id).cloned())
    }

    async fn search_many(&self, query: &str, page: Page) -> DatabaseResult<Vec<Gym>> {
        let needle = query.to_lowercase();
        let gyms = self.gyms.read().await;
        let matches: Vec<Gym> = gyms
            .iter()
            .filter(|g| g.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(page.slice(&matches))
    }

    async fn find_many_nearby(&self, coordinate: Coordinate) -> DatabaseResult<Vec<Gym>> {
        let gyms = self.gyms.read().await;
        Ok(gyms
            .iter()
            .filter(|g| {
                distance_between_coordinates(coordinate, Coordinate::of_gym(g)) <= NEARBY_RADIUS_KM
            })
            .cloned()
            .collect())
    }
}
