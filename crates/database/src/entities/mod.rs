//! Domain entities for the database layer
//!
//! Plain data records shared by the repository implementations and the domain crates.

pub mod check_in;
pub mod gym;
pub mod user;

// Re-export all entity types
pub use check_in::{CheckIn, NewCheckIn};
pub use gym::{Gym, NewGym};
pub use user::{NewUser, User, UserRole};
