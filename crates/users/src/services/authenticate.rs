use std::sync::Arc;

use gymcheck_auth::CredentialHasher;
use gymcheck_database::User;
use tracing::{debug, warn};

use crate::repositories::UsersRepository;
use crate::types::{UserError, UserResult};

#[derive(Debug, Clone)]
pub struct AuthenticateRequest {
    pub email: String,
    pub password: String,
}

/// Checks an email/password pair against the stored hash
pub struct AuthenticateUseCase {
    users: Arc<dyn UsersRepository>,
    hasher: Arc<dyn CredentialHasher>,
}

impl AuthenticateUseCase {
    pub fn new(users: Arc<dyn UsersRepository>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { users, hasher }
    }

    pub async fn execute(&self, request: AuthenticateRequest) -> UserResult<User> {
        let Some(user) = self.users.find_by_email(&request.email).await? else {
            debug!("authentication rejected: unknown email");
            return Err(UserError::InvalidCredentials);
        };

        // An unreadable stored hash matches no password
        let matches = match self
            .hasher
            .compare(&request.password, &user.password_hash)
            .await
        {
            Ok(matches) => matches,
            Err(error) => {
                warn!(user_id = %user.id, %error, "stored password hash is unreadable");
                false
            }
        };

        if !matches {
            debug!(user_id = %user.id, "authentication rejected: password mismatch");
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }
}
