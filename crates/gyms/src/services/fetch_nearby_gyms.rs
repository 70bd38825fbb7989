use std::sync::Arc;

use gymcheck_database::Gym;

use crate::geo::Coordinate;
use crate::repositories::GymsRepository;
use crate::types::GymResult;

pub struct FetchNearbyGymsUseCase {
    gyms: Arc<dyn GymsRepository>,
}

impl FetchNearbyGymsUseCase {
    pub fn new(gyms: Arc<dyn GymsRepository>) -> Self {
        Self { gyms }
    }

    pub async fn execute(&self, user_location: Coordinate) -> GymResult<Vec<Gym>> {
        Ok(self.gyms.find_many_nearby(user_location).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryGymsRepository;
    use gymcheck_database::NewGym;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    async fn seed(gyms: &InMemoryGymsRepository, title: &str, lat: &str, lng: &str) {
        gyms.create(NewGym {
            title: title.to_string(),
            description: None,
            phone: None,
            latitude: Decimal::from_str(lat).unwrap(),
            longitude: Decimal::from_str(lng).unwrap(),
        })
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn only_gyms_within_ten_km() {
        let gyms = Arc::new(InMemoryGymsRepository::new());
        seed(&gyms, "Near Gym", "-27.2092052", "-49.6401091").await;
        seed(&gyms, "Far Gym", "-27.0610928", "-49.5229501").await;

        let found = FetchNearbyGymsUseCase::new(gyms)
            .execute(Coordinate::new(-27.2092052, -49.6401091))
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Near Gym");
    }
}
