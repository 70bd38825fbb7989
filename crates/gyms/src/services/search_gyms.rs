use std::sync::Arc;

use gymcheck_database::{Gym, Page};

use crate::repositories::GymsRepository;
use crate::types::GymResult;

pub struct SearchGymsUseCase {
    gyms: Arc<dyn GymsRepository>,
}

impl SearchGymsUseCase {
    pub fn new(gyms: Arc<dyn GymsRepository>) -> Self {
        Self { gyms }
    }

    pub async fn execute(&self, query: &str, page: u32) -> GymResult<Vec<Gym>> {
        Ok(self.gyms.search_many(query, Page::new(page)).await?)
    }
}
