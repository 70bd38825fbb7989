use async_trait::async_trait;
use gymcheck_database::{DatabaseResult, NewUser, User, UserRepository};

use super::UsersRepository;

#[async_trait]
impl UsersRepository for UserRepository {
    async fn create(&self, new_user: NewUser) -> DatabaseResult<User> {
        UserRepository::create(self, new_user).await
    }

    async fn find_by_email(&self, email: &str) -> DatabaseResult<Option<User>> {
        UserRepository::find_by_email(self, email).await
    }

    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<User>> {
        UserRepository::find_by_id(self, id).await
    }
}
