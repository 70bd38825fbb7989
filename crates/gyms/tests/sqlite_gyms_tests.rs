use std::str::FromStr;
use std::sync::Arc;

use gymcheck_config::DatabaseConfig;
use gymcheck_database::{initialize_database, GymRepository};
use gymcheck_gyms::{
    Coordinate, CreateGymRequest, CreateGymUseCase, FetchNearbyGymsUseCase, GymsRepository,
    SearchGymsUseCase,
};
use rust_decimal::Decimal;

async fn sqlite_gyms() -> Arc<dyn GymsRepository> {
    let pool = initialize_database(&DatabaseConfig {
        url: "sqlite://:memory:".to_string(),
        max_connections: 1,
    })
    .await
    .unwrap();
    Arc::new(GymRepository::new(pool))
}

fn gym(title: &str, lat: &str, lng: &str) -> CreateGymRequest {
    CreateGymRequest {
        title: title.to_string(),
        description: Some("Some description.".to_string()),
        phone: Some("1199999999".to_string()),
        latitude: Decimal::from_str(lat).unwrap(),
        longitude: Decimal::from_str(lng).unwrap(),
    }
}

#[tokio::test]
async fn nearby_lookup_uses_exact_distance() {
    let gyms = sqlite_gyms().await;
    let create = CreateGymUseCase::new(gyms.clone());
    create
        .execute(gym("Near Gym", "-27.2092052", "-49.6401091"))
        .await
        .unwrap();
    create
        .execute(gym("Far Gym", "-27.0610928", "-49.5229501"))
        .await
        .unwrap();
    // inside the bounding box corner but beyond 10 km
    create
        .execute(gym("Corner Gym", "-27.2892052", "-49.7301091"))
        .await
        .unwrap();

    let found = FetchNearbyGymsUseCase::new(gyms)
        .execute(Coordinate::new(-27.2092052, -49.6401091))
        .await
        .unwrap();

    let titles: Vec<&str> = found.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["Near Gym"]);
}

#[tokio::test]
async fn search_matches_substring_case_insensitively() {
    let gyms = sqlite_gyms().await;
    let create = CreateGymUseCase::new(gyms.clone());
    create.execute(gym("JavaScript Gym", "0", "0")).await.unwrap();
    create.execute(gym("TypeScript Gym", "0", "0")).await.unwrap();

    let found = SearchGymsUseCase::new(gyms)
        .execute("SCRIPT gym", 1)
        .await
        .unwrap();
    assert_eq!(found.len(), 2);
}
