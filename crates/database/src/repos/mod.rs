//! SQLite repository implementations

pub mod check_in_repository;
pub mod gym_repository;
pub mod user_repository;

pub use check_in_repository::CheckInRepository;
pub use gym_repository::GymRepository;
pub use user_repository::UserRepository;
