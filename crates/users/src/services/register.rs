use std::sync::Arc;

use gymcheck_auth::CredentialHasher;
use gymcheck_database::{DatabaseError, NewUser, User, UserRole};
use tracing::{debug, info};

use crate::repositories::UsersRepository;
use crate::types::{UserError, UserResult};

#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Creates a member account for an unused email
pub struct RegisterUseCase {
    users: Arc<dyn UsersRepository>,
    hasher: Arc<dyn CredentialHasher>,
}

impl RegisterUseCase {
    pub fn new(users: Arc<dyn UsersRepository>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { users, hasher }
    }

    pub async fn execute(&self, request: RegisterRequest) -> UserResult<User> {
        if self.users.find_by_email(&request.email).await?.is_some() {
            debug!(email = %request.email, "registration rejected: email in use");
            return Err(UserError::UserAlreadyExists);
        }

        let password_hash = self.hasher.hash(&request.password).await?;

        let user = self
            .users
            .create(NewUser {
                name: request.name,
                email: request.email,
                password_hash,
                role: UserRole::Member,
            })
            .await
            .map_err(|err| match err {
                DatabaseError::Duplicate(_) => UserError::UserAlreadyExists,
                other => UserError::Repository(other),
            })?;

        info!(user_id = %user.id, "user registered");
        Ok(user)
    }
}
