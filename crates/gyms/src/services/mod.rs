//! Use-case objects for the gyms domain

mod create_gym;
mod fetch_nearby_gyms;
mod search_gyms;

pub use create_gym::{CreateGymRequest, CreateGymUseCase};
pub use fetch_nearby_gyms::FetchNearbyGymsUseCase;
pub use search_gyms::SearchGymsUseCase;
