use std::sync::Arc;

use gymcheck_database::User;

use crate::repositories::UsersRepository;
use crate::types::{UserError, UserResult};

pub struct GetUserProfileUseCase {
    users: Arc<dyn UsersRepository>,
}

impl GetUserProfileUseCase {
    pub fn new(users: Arc<dyn UsersRepository>) -> Self {
        Self { users }
    }

    pub async fn execute(&self, user_id: &str) -> UserResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::ResourceNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockUsersRepository;
    use chrono::Utc;
    use gymcheck_database::{NewUser, UserRole};

    #[tokio::test]
    async fn returns_stored_profile() {
        let user = User::from_new(
            NewUser {
                name: "John Doe".to_string(),
                email: "johndoe@example.com".to_string(),
                password_hash: "hash".to_string(),
                role: UserRole::Member,
            },
            Utc::now(),
        );
        let id = user.id.clone();

        let mut users = MockUsersRepository::new();
        users
            .expect_find_by_id()
            .withf({
                let expected = id.clone();
                move |candidate| candidate.to_string() == expected
            })
            .returning(move |_| Ok(Some(user.clone())));

        let profile = GetUserProfileUseCase::new(Arc::new(users))
            .execute(&id)
            .await
            .unwrap();
        assert_eq!(profile.name, "John Doe");
    }

    #[tokio::test]
    async fn unknown_id_is_resource_not_found() {
        let mut users = MockUsersRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));

        let result = GetUserProfileUseCase::new(Arc::new(users))
            .execute("missing")
            .await;
        assert!(matches!(result, Err(UserError::ResourceNotFound)));
    }
}
