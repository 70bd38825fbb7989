//! Check-ins repository seam and its implementations

mod in_memory;
mod sqlite;

pub use in_memory::InMemoryCheckInsRepository;

use async_trait::async_trait;
use chrono::NaiveDate;
use gymcheck_database::{CheckIn, DatabaseResult, NewCheckIn, Page};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckInsRepository: Send + Sync {
    /// Fails with `DatabaseError::Duplicate` when the user already holds a
    /// check-in on the same local day.
    async fn create(&self, new_check_in: NewCheckIn) -> DatabaseResult<CheckIn>;
    async fn find_by_user_id_on_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> DatabaseResult<Option<CheckIn>>;
    async fn find_many_by_user_id(&self, user_id: &str, page: Page)
        -> DatabaseResult<Vec<CheckIn>>;
    async fn count_by_user_id(&self, user_id: &str) -> DatabaseResult<u64>;
    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<CheckIn>>;
    async fn save(&self, check_in: CheckIn) -> DatabaseResult<CheckIn>;
}
