//! Users repository seam and its implementations

mod in_memory;
mod sqlite;

pub use in_memory::InMemoryUsersRepository;

use async_trait::async_trait;
use gymcheck_database::{DatabaseResult, NewUser, User};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn create(&self, new_user: NewUser) -> DatabaseResult<User>;
    async fn find_by_email(&self, email: &str) -> DatabaseResult<Option<User>>;
    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<User>>;
}
