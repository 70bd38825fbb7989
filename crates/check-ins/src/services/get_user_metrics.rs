use std::sync::Arc;

use crate::repositories::CheckInsRepository;
use crate::types::CheckInResult;

pub struct GetUserMetricsUseCase {
    check_ins: Arc<dyn CheckInsRepository>,
}

impl GetUserMetricsUseCase {
    pub fn new(check_ins: Arc<dyn CheckInsRepository>) -> Self {
        Self { check_ins }
    }

    /// Total number of check-ins ever made by the user
    pub async fn execute(&self, user_id: &str) -> CheckInResult<u64> {
        Ok(self.check_ins.count_by_user_id(user_id).await?)
    }
}
