//! Shared types for the users domain

pub mod errors;

pub use errors::UserError;

pub type UserResult<T> = Result<T, UserError>;
