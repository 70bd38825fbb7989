use gymcheck_database::DatabaseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GymError {
    #[error(transparent)]
    Repository(#[from] DatabaseError),
}
