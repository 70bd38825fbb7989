use async_trait::async_trait;
use chrono::NaiveDate;
use gymcheck_database::{CheckIn, CheckInRepository, DatabaseResult, NewCheckIn, Page};

use super::CheckInsRepository;

#[async_trait]
impl CheckInsRepository for CheckInRepository {
    async fn create(&self, new_check_in: NewCheckIn) -> DatabaseResult<CheckIn> {
        CheckInRepository::create(self, new_check_in).await
    }

    async fn find_by_user_id_on_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> DatabaseResult<Option<CheckIn>> {
        CheckInRepository::find_by_user_id_on_date(self, user_id, date).await
    }

    async fn find_many_by_user_id(
        &self,
        user_id: &str,
        page: Page,
    ) -> DatabaseResult<Vec<CheckIn>> {
        CheckInRepository::find_many_by_user_id(self, user_id, page).await
    }

    async fn count_by_user_id(&self, user_id: &str) -> DatabaseResult<u64> {
        CheckInRepository::count_by_user_id(self, user_id).await
    }

    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<CheckIn>> {
        CheckInRepository::find_by_id(self, id).await
    }

    async fn save(&self, check_in: CheckIn) -> DatabaseResult<CheckIn> {
        CheckInRepository::save(self, check_in).await
    }
}
