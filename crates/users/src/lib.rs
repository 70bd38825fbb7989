//! # Gymcheck Users Crate
//!
//! Account registration, credential authentication and profile lookup.
//!
//! - **Repositories**: the `UsersRepository` seam with in-memory and SQLite backings
//! - **Services**: one use-case object per operation
//! - **Types**: the `UserError` taxonomy

pub mod repositories;
pub mod services;
pub mod types;

pub use gymcheck_database::{NewUser, User, UserRole};
pub use repositories::{InMemoryUsersRepository, UsersRepository};
pub use services::{
    AuthenticateRequest, AuthenticateUseCase, GetUserProfileUseCase, RegisterRequest,
    RegisterUseCase,
};
pub use types::{UserError, UserResult};
