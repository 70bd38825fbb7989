use gymcheck_database::DatabaseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckInError {
    #[error("Resource not found")]
    ResourceNotFound,

    #[error("Max distance reached")]
    MaxDistance,

    #[error("Max number of check-ins reached")]
    MaxNumberOfCheckIns,

    #[error("The check-in can only be validated until 20 minutes of its creation")]
    LateCheckInValidation,

    #[error("Check-in already validated")]
    AlreadyValidated,

    #[error(transparent)]
    Repository(#[from] DatabaseError),
}
