use async_trait::async_trait;
use chrono::NaiveDate;
use gymcheck_database::{
    local_day, CheckIn, DatabaseError, DatabaseResult, NewCheckIn, Page,
};
use tokio::sync::RwLock;

use super::CheckInsRepository;

#[derive(Default)]
pub struct InMemoryCheckInsRepository {
    check_ins: RwLock<Vec<CheckIn>>,
}

impl InMemoryCheckInsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn items(&self) -> Vec<CheckIn> {
        self.check_ins.read().await.clone()
    }
}

#[async_trait]
impl CheckInsRepository for InMemoryCheckInsRepository {
    async fn create(&self, new_check_in: NewCheckIn) -> DatabaseResult<CheckIn> {
        // Check and insert under the same write guard.
        let mut check_ins = self.check_ins.write().await;
        let day = local_day(new_check_in.created_at);
        if check_ins
            .iter()
            .any(|c| c.user_id == new_check_in.user_id && c.check_in_day() == day)
        {
            return Err(DatabaseError::Duplicate(format!(
                "check_ins ({}, {day})",
                new_check_in.user_id
            )));
        }

        let check_in = CheckIn::from_new(new_check_in);
        check_ins.push(check_in.clone());
        Ok(check_in)
    }

    async fn find_by_user_id_on_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> DatabaseResult<Option<CheckIn>> {
        let check_ins = self.check_ins.read().await;
        Ok(check_ins
            .iter()
            .find(|c| c.user_id == user_id && c.check_in_day() == date)
            .cloned())
    }

    async fn find_many_by_user_id(
        &self,
        user_id: &str,
        page: Page,
    ) -> DatabaseResult<Vec<CheckIn>> {
        let check_ins = self.check_ins.read().await;
        let owned: Vec<CheckIn> = check_ins
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        Ok(page.slice(&owned))
    }

    async fn count_by_user_id(&self, user_id: &str) -> DatabaseResult<u64> {
        let check_ins = self.check_ins.read().await;
        Ok(check_ins.iter().filter(|c| c.user_id == user_id).count() as u64)
    }

    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<CheckIn>> {
        let check_ins = self.check_ins.read().await;
        Ok(check_ins.iter().find(|c| c.id == id).cloned())
    }

    async fn save(&self, check_in: CheckIn) -> DatabaseResult<CheckIn> {
        let mut check_ins = self.check_ins.write().await;
        match check_ins.iter_mut().find(|c| c.id == check_in.id) {
            Some(slot) => *slot = check_in.clone(),
            None => check_ins.push(check_in.clone()),
        }
        Ok(check_in)
    }
}
