use std::sync::Arc;

use gymcheck_database::{CheckIn, Page};

use crate::repositories::CheckInsRepository;
use crate::types::CheckInResult;

pub struct FetchUserCheckInHistoryUseCase {
    check_ins: Arc<dyn CheckInsRepository>,
}

impl FetchUserCheckInHistoryUseCase {
    pub fn new(check_ins: Arc<dyn CheckInsRepository>) -> Self {
        Self { check_ins }
    }

    pub async fn execute(&self, user_id: &str, page: u32) -> CheckInResult<Vec<CheckIn>> {
        Ok(self
            .check_ins
            .find_many_by_user_id(user_id, Page::new(page))
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryCheckInsRepository;
    use chrono::{Duration, TimeZone, Utc};
    use gymcheck_database::NewCheckIn;

    async fn seed_days(check_ins: &InMemoryCheckInsRepository, user_id: &str, days: i64) {
        let start = Utc.with_ymd_and_hms(2022, 1, 1, 12, 0, 0).unwrap();
        for day in 0..days {
            check_ins
                .create(NewCheckIn {
                    user_id: user_id.to_string(),
                    gym_id: format!("gym-{}", day + 1),
                    created_at: start + Duration::days(day),
                })
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn lists_only_the_users_check_ins() {
        let check_ins = Arc::new(InMemoryCheckInsRepository::new());
        seed_days(&check_ins, "user-01", 2).await;
        seed_days(&check_ins, "user-02", 1).await;

        let history = FetchUserCheckInHistoryUseCase::new(check_ins)
            .execute("user-01", 1)
            .await
            .unwrap();

        let gyms: Vec<&str> = history.iter().map(|c| c.gym_id.as_str()).collect();
        assert_eq!(gyms, vec!["gym-1", "gym-2"]);
    }

    #[tokio::test]
    async fn second_page_holds_items_twenty_one_and_two() {
        let check_ins = Arc::new(InMemoryCheckInsRepository::new());
        seed_days(&check_ins, "user-01", 22).await;

        let history = FetchUserCheckInHistoryUseCase::new(check_ins)
            .execute("user-01", 2)
            .await
            .unwrap();

        let gyms: Vec<&str> = history.iter().map(|c| c.gym_id.as_str()).collect();
        assert_eq!(gyms, vec!["gym-21", "gym-22"]);
    }
}
