use std::sync::Arc;

use gymcheck_database::{CheckIn, DatabaseError, NewCheckIn};
use gymcheck_gyms::{distance_between_coordinates, Coordinate, GymsRepository};
use mockable::Clock;
use tracing::{debug, info};

use crate::policy::CheckInPolicy;
use crate::repositories::CheckInsRepository;
use crate::types::{CheckInError, CheckInResult};

#[derive(Debug, Clone)]
pub struct CheckInRequest {
    pub user_id: String,
    pub gym_id: String,
    pub user_latitude: f64,
    pub user_longitude: f64,
}

/// Records a user's presence at a gym, at most once per local day
pub struct CheckInUseCase {
    check_ins: Arc<dyn CheckInsRepository>,
    gyms: Arc<dyn GymsRepository>,
    clock: Arc<dyn Clock + Send + Sync>,
    policy: CheckInPolicy,
}

impl CheckInUseCase {
    pub fn new(
        check_ins: Arc<dyn CheckInsRepository>,
        gyms: Arc<dyn GymsRepository>,
        clock: Arc<dyn Clock + Send + Sync>,
        policy: CheckInPolicy,
    ) -> Self {
        Self {
            check_ins,
            gyms,
            clock,
            policy,
        }
    }

    pub async fn execute(&self, request: CheckInRequest) -> CheckInResult<CheckIn> {
        let gym = self
            .gyms
            .find_by_id(&request.gym_id)
            .await?
            .ok_or(CheckInError::ResourceNotFound)?;

        let distance = distance_between_coordinates(
            Coordinate::new(request.user_latitude, request.user_longitude),
            Coordinate::of_gym(&gym),
        );
        if !self.policy.is_within_reach(distance) {
            debug!(gym_id = %gym.id, distance_km = distance, "check-in rejected: too far");
            return Err(CheckInError::MaxDistance);
        }

        let today = self.clock.local().date_naive();
        if self
            .check_ins
            .find_by_user_id_on_date(&request.user_id, today)
            .await?
            .is_some()
        {
            debug!(user_id = %request.user_id, %today, "check-in rejected: already checked in");
            return Err(CheckInError::MaxNumberOfCheckIns);
        }

        let check_in = self
            .check_ins
            .create(NewCheckIn {
                user_id: request.user_id,
                gym_id: gym.id,
                created_at: self.clock.utc(),
            })
            .await
            .map_err(|err| match err {
                DatabaseError::Duplicate(_) => CheckInError::MaxNumberOfCheckIns,
                other => CheckInError::Repository(other),
            })?;

        info!(check_in_id = %check_in.id, user_id = %check_in.user_id, gym_id = %check_in.gym_id, "check-in created");
        Ok(check_in)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{InMemoryCheckInsRepository, MockCheckInsRepository};
    use crate::test_support::MutableClock;
    use chrono::{Duration, TimeZone, Utc};
    use gymcheck_gyms::InMemoryGymsRepository;
    use gymcheck_database::NewGym;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    struct Fixture {
        sut: CheckInUseCase,
        clock: Arc<MutableClock>,
        check_ins: Arc<InMemoryCheckInsRepository>,
        gym_id: String,
    }

    async fn fixture() -> Fixture {
        let gyms = Arc::new(InMemoryGymsRepository::new());
        let gym = gyms
            .create(NewGym {
                title: "JavaScript Gym".to_string(),
                description: None,
                phone: None,
                latitude: Decimal::from_str("-27.2092052").unwrap(),
                longitude: Decimal::from_str("-49.6401091").unwrap(),
            })
            .await
            .unwrap();

        let clock = Arc::new(MutableClock::new(
            Utc.with_ymd_and_hms(2022, 1, 20, 12, 0, 0).unwrap(),
        ));
        let check_ins = Arc::new(InMemoryCheckInsRepository::new());
        let sut = CheckInUseCase::new(
            check_ins.clone(),
            gyms,
            clock.clone(),
            CheckInPolicy::default(),
        );

        Fixture {
            sut,
            clock,
            check_ins,
            gym_id: gym.id,
        }
    }

    fn request(gym_id: &str, latitude: f64, longitude: f64) -> CheckInRequest {
        CheckInRequest {
            user_id: "user-01".to_string(),
            gym_id: gym_id.to_string(),
            user_latitude: latitude,
            user_longitude: longitude,
        }
    }

    #[tokio::test]
    async fn checks_in_when_close_enough() {
        let f = fixture().await;
        let check_in = f
            .sut
            .execute(request(&f.gym_id, -27.2095, -49.6401))
            .await
            .unwrap();

        assert!(!check_in.id.is_empty());
        assert!(check_in.validated_at.is_none());
        assert_eq!(check_in.created_at, f.clock.utc());
    }

    #[tokio::test]
    async fn rejects_second_check_in_on_same_day() {
        let f = fixture().await;
        f.sut
            .execute(request(&f.gym_id, -27.2092052, -49.6401091))
            .await
            .unwrap();

        f.clock.advance(Duration::minutes(30));
        let second = f
            .sut
            .execute(request(&f.gym_id, -27.2092052, -49.6401091))
            .await;

        assert!(matches!(second, Err(CheckInError::MaxNumberOfCheckIns)));
        assert_eq!(f.check_ins.items().await.len(), 1);
    }

    #[tokio::test]
    async fn allows_check_ins_on_different_days() {
        let f = fixture().await;
        f.sut
            .execute(request(&f.gym_id, -27.2092052, -49.6401091))
            .await
            .unwrap();

        f.clock.set(Utc.with_ymd_and_hms(2022, 1, 21, 12, 0, 0).unwrap());
        let second = f
            .sut
            .execute(request(&f.gym_id, -27.2092052, -49.6401091))
            .await;

        assert!(second.is_ok());
        assert_eq!(f.check_ins.items().await.len(), 2);
    }

    #[tokio::test]
    async fn rejects_distant_check_in_without_writing() {
        let f = fixture().await;
        let result = f
            .sut
            .execute(request(&f.gym_id, -27.0610928, -49.5229501))
            .await;

        assert!(matches!(result, Err(CheckInError::MaxDistance)));
        assert!(f.check_ins.items().await.is_empty());
    }

    #[tokio::test]
    async fn unknown_gym_is_resource_not_found() {
        let f = fixture().await;
        let result = f
            .sut
            .execute(request("missing-gym", -27.2092052, -49.6401091))
            .await;

        assert!(matches!(result, Err(CheckInError::ResourceNotFound)));
    }

    #[tokio::test]
    async fn storage_uniqueness_violation_maps_to_max_check_ins() {
        let gyms = Arc::new(InMemoryGymsRepository::new());
        let gym = gyms
            .create(NewGym {
                title: "JavaScript Gym".to_string(),
                description: None,
                phone: None,
                latitude: Decimal::ZERO,
                longitude: Decimal::ZERO,
            })
            .await
            .unwrap();

        let mut check_ins = MockCheckInsRepository::new();
        check_ins
            .expect_find_by_user_id_on_date()
            .returning(|_, _| Ok(None));
        check_ins
            .expect_create()
            .times(1)
            .returning(|_| Err(DatabaseError::Duplicate("check_ins".to_string())));

        let sut = CheckInUseCase::new(
            Arc::new(check_ins),
            gyms,
            Arc::new(MutableClock::new(Utc::now())),
            CheckInPolicy::default(),
        );
        let result = sut.execute(request(&gym.id, 0.0, 0.0)).await;

        assert!(matches!(result, Err(CheckInError::MaxNumberOfCheckIns)));
    }
}
