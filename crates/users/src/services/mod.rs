//! Use-case objects for the users domain

mod authenticate;
mod get_user_profile;
mod register;

pub use authenticate::{AuthenticateRequest, AuthenticateUseCase};
pub use get_user_profile::GetUserProfileUseCase;
pub use register::{RegisterRequest, RegisterUseCase};
