use async_trait::async_trait;
use chrono::Utc;
use gymcheck_database::{DatabaseError, DatabaseResult, NewUser, User};
use tokio::sync::RwLock;

use super::UsersRepository;

/// Vec-backed users store for tests and local wiring
#[derive(Default)]
pub struct InMemoryUsersRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUsersRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored user
    pub async fn items(&self) -> Vec<User> {
        self.users.read().await.clone()
    }
}

#[async_trait]
impl UsersRepository for InMemoryUsersRepository {
    async fn create(&self, new_user: NewUser) -> DatabaseResult<User> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(DatabaseError::Duplicate(format!(
                "users.email {}",
                new_user.email
            )));
        }

        let user = User::from_new(new_user, Utc::now());
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> DatabaseResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }
}
