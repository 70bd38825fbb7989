use std::sync::Arc;

use gymcheck_database::{Gym, NewGym};
use rust_decimal::Decimal;
use tracing::info;

use crate::repositories::GymsRepository;
use crate::types::GymResult;

#[derive(Debug, Clone)]
pub struct CreateGymRequest {
    pub title: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub latitude: Decimal,
    pub longitude: Decimal,
}

pub struct CreateGymUseCase {
    gyms: Arc<dyn GymsRepository>,
}

impl CreateGymUseCase {
    pub fn new(gyms: Arc<dyn GymsRepository>) -> Self {
        Self { gyms }
    }

    pub async fn execute(&self, request: CreateGymRequest) -> GymResult<Gym> {
        let gym = self
            .gyms
            .create(NewGym {
                title: request.title,
                description: request.description,
                phone: request.phone,
                latitude: request.latitude,
                longitude: request.longitude,
            })
            .await?;

        info!(gym_id = %gym.id, title = %gym.title, "gym created");
        Ok(gym)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{InMemoryGymsRepository, MockGymsRepository};
    use crate::types::GymError;
    use gymcheck_database::DatabaseError;
    use std::str::FromStr;

    fn request() -> CreateGymRequest {
        CreateGymRequest {
            title: "JavaScript Gym".to_string(),
            description: None,
            phone: None,
            latitude: Decimal::from_str("-27.2092052").unwrap(),
            longitude: Decimal::from_str("-49.6401091").unwrap(),
        }
    }

    #[tokio::test]
    async fn creates_gym() {
        let gyms = Arc::new(InMemoryGymsRepository::new());
        let gym = CreateGymUseCase::new(gyms.clone())
            .execute(request())
            .await
            .unwrap();

        assert!(!gym.id.is_empty());
        assert_eq!(gyms.items().await, vec![gym]);
    }

    #[tokio::test]
    async fn storage_failure_is_a_repository_error() {
        let mut gyms = MockGymsRepository::new();
        gyms.expect_create()
            .returning(|_| Err(DatabaseError::InvalidData("gyms.latitude".to_string())));

        let result = CreateGymUseCase::new(Arc::new(gyms)).execute(request()).await;
        assert!(matches!(result, Err(GymError::Repository(_))));
    }
}
