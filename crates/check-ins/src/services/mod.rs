//! Use-case objects for the check-ins domain

mod check_in;
mod fetch_user_check_in_history;
mod get_user_metrics;
mod validate_check_in;

pub use check_in::{CheckInRequest, CheckInUseCase};
pub use fetch_user_check_in_history::FetchUserCheckInHistoryUseCase;
pub use get_user_metrics::GetUserMetricsUseCase;
pub use validate_check_in::ValidateCheckInUseCase;
