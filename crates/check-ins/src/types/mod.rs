pub mod errors;

pub use errors::CheckInError;

pub type CheckInResult<T> = Result<T, CheckInError>;
