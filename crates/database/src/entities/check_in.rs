//! Check-in entity definitions

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A user's attendance record at a gym
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckIn {
    pub id: String,
    pub user_id: String,
    pub gym_id: String,
    pub created_at: DateTime<Utc>,
    pub validated_at: Option<DateTime<Utc>>,
}

/// Data needed to persist a new check-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCheckIn {
    pub user_id: String,
    pub gym_id: String,
    pub created_at: DateTime<Utc>,
}

impl CheckIn {
    pub fn from_new(new_check_in: NewCheckIn) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: new_check_in.user_id,
            gym_id: new_check_in.gym_id,
            created_at: new_check_in.created_at,
            validated_at: None,
        }
    }

    /// Calendar day the check-in counts against, in server local time
    pub fn check_in_day(&self) -> NaiveDate {
        local_day(self.created_at)
    }

    pub fn is_validated(&self) -> bool {
        self.validated_at.is_some()
    }
}

/// Local calendar day of a UTC instant
pub fn local_day(at: DateTime<Utc>) -> NaiveDate {
    at.with_timezone(&Local).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn new_check_in_starts_pending() {
        let created_at = Utc.with_ymd_and_hms(2022, 1, 20, 8, 0, 0).unwrap();
        let check_in = CheckIn::from_new(NewCheckIn {
            user_id: "user-01".to_string(),
            gym_id: "gym-01".to_string(),
            created_at,
        });

        assert!(!check_in.is_validated());
        assert_eq!(check_in.check_in_day(), local_day(created_at));
        assert!(!check_in.id.is_empty());
    }
}
