use chrono::Duration;
use gymcheck_config::CheckInConfig;

/// Furthest a user may stand from the gym when checking in
pub const MAX_CHECK_IN_DISTANCE_KM: f64 = 0.1;

/// Whole minutes after creation during which a check-in may still be validated
pub const CHECK_IN_VALIDATION_WINDOW_MINUTES: i64 = 20;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckInPolicy {
    pub max_distance_km: f64,
    pub validation_window_minutes: i64,
}

impl CheckInPolicy {
    pub fn from_config(config: &CheckInConfig) -> Self {
        Self {
            max_distance_km: config.max_distance_km,
            validation_window_minutes: config.validation_window_minutes,
        }
    }

    pub fn is_within_reach(&self, distance_km: f64) -> bool {
        distance_km <= self.max_distance_km
    }

    /// Elapsed time is truncated to whole minutes before comparing
    pub fn is_validation_late(&self, elapsed: Duration) -> bool {
        elapsed.num_minutes() > self.validation_window_minutes
    }
}

impl Default for CheckInPolicy {
    fn default() -> Self {
        Self {
            max_distance_km: MAX_CHECK_IN_DISTANCE_KM,
            validation_window_minutes: CHECK_IN_VALIDATION_WINDOW_MINUTES,
        }
    }
}
