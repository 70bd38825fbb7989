use std::sync::Arc;

use gymcheck_database::CheckIn;
use mockable::Clock;
use tracing::{debug, info};

use crate::policy::CheckInPolicy;
use crate::repositories::CheckInsRepository;
use crate::types::{CheckInError, CheckInResult};

/// Moves a pending check-in to validated, once, inside the validation window
pub struct ValidateCheckInUseCase {
    check_ins: Arc<dyn CheckInsRepository>,
    clock: Arc<dyn Clock + Send + Sync>,
    policy: CheckInPolicy,
}

impl ValidateCheckInUseCase {
    pub fn new(
        check_ins: Arc<dyn CheckInsRepository>,
        clock: Arc<dyn Clock + Send + Sync>,
        policy: CheckInPolicy,
    ) -> Self {
        Self {
            check_ins,
            clock,
            policy,
        }
    }

    pub async fn execute(&self, check_in_id: &str) -> CheckInResult<CheckIn> {
        let mut check_in = self
            .check_ins
            .find_by_id(check_in_id)
            .await?
            .ok_or(CheckInError::ResourceNotFound)?;

        if check_in.is_validated() {
            debug!(check_in_id, "validation rejected: already validated");
            return Err(CheckInError::AlreadyValidated);
        }

        let now = self.clock.utc();
        if self.policy.is_validation_late(now - check_in.created_at) {
            debug!(check_in_id, "validation rejected: window elapsed");
            return Err(CheckInError::LateCheckInValidation);
        }

        check_in.validated_at = Some(now);
        let check_in = self.check_ins.save(check_in).await?;

        info!(check_in_id = %check_in.id, "check-in validated");
        Ok(check_in)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryCheckInsRepository;
    use crate::test_support::MutableClock;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use gymcheck_database::NewCheckIn;

    struct Fixture {
        sut: ValidateCheckInUseCase,
        clock: Arc<MutableClock>,
        check_ins: Arc<InMemoryCheckInsRepository>,
        created_at: DateTime<Utc>,
    }

    fn fixture() -> Fixture {
        let created_at = Utc.with_ymd_and_hms(2023, 1, 1, 13, 40, 0).unwrap();
        let clock = Arc::new(MutableClock::new(created_at));
        let check_ins = Arc::new(InMemoryCheckInsRepository::new());
        let sut =
            ValidateCheckInUseCase::new(check_ins.clone(), clock.clone(), CheckInPolicy::default());
        Fixture {
            sut,
            clock,
            check_ins,
            created_at,
        }
    }

    async fn seed(f: &Fixture) -> CheckIn {
        f.check_ins
            .create(NewCheckIn {
                user_id: "user-01".to_string(),
                gym_id: "gym-01".to_string(),
                created_at: f.created_at,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn validates_pending_check_in() {
        let f = fixture();
        let created = seed(&f).await;

        let validated = f.sut.execute(&created.id).await.unwrap();

        assert_eq!(validated.validated_at, Some(f.created_at));
        assert_eq!(f.check_ins.items().await[0].validated_at, Some(f.created_at));
    }

    #[tokio::test]
    async fn twenty_minutes_is_still_in_time() {
        let f = fixture();
        let created = seed(&f).await;

        f.clock.advance(Duration::minutes(20));
        assert!(f.sut.execute(&created.id).await.is_ok());
    }

    #[tokio::test]
    async fn twenty_one_minutes_is_late() {
        let f = fixture();
        let created = seed(&f).await;

        f.clock.advance(Duration::minutes(21));
        let result = f.sut.execute(&created.id).await;

        assert!(matches!(result, Err(CheckInError::LateCheckInValidation)));
        assert!(f.check_ins.items().await[0].validated_at.is_none());
    }

    #[tokio::test]
    async fn unknown_check_in_is_resource_not_found() {
        let f = fixture();
        let result = f.sut.execute("inexistent-check-in-id").await;
        assert!(matches!(result, Err(CheckInError::ResourceNotFound)));
    }

    #[tokio::test]
    async fn validated_at_is_never_overwritten() {
        let f = fixture();
        let created = seed(&f).await;
        f.sut.execute(&created.id).await.unwrap();

        f.clock.advance(Duration::minutes(5));
        let again = f.sut.execute(&created.id).await;

        assert!(matches!(again, Err(CheckInError::AlreadyValidated)));
        assert_eq!(f.check_ins.items().await[0].validated_at, Some(f.created_at));
    }
}
