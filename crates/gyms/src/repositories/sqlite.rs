use async_trait::async_trait;
use gymcheck_database::{DatabaseResult, GeoBounds, Gym, GymRepository, NewGym, Page};

use super::{GymsRepository, NEARBY_RADIUS_KM};
use crate::geo::{distance_between_coordinates, Coordinate, EARTH_RADIUS_KM};

// Widens the prefilter so off-parallel points at the edge of the radius are kept.
const BOUNDS_MARGIN: f64 = 1.1;

#[async_trait]
impl GymsRepository for GymRepository {
    async fn create(&self, new_gym: NewGym) -> DatabaseResult<Gym> {
        GymRepository::create(self, new_gym).await
    }

    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<Gym>> {
        GymRepository::find_by_id(self, id).await
    }

    async fn search_many(&self, query: &str, page: Page) -> DatabaseResult<Vec<Gym>> {
        GymRepository::search_many(self, query, page).await
    }

    async fn find_many_nearby(&self, coordinate: Coordinate) -> DatabaseResult<Vec<Gym>> {
        let candidates = self
            .find_within_bounds(bounds_around(coordinate, NEARBY_RADIUS_KM))
            .await?;

        Ok(candidates
            .into_iter()
            .filter(|g| {
                distance_between_coordinates(coordinate, Coordinate::of_gym(g)) <= NEARBY_RADIUS_KM
            })
            .collect())
    }
}

/// Rectangle enclosing every point within `radius_km` of `center`.
/// Falls back to the full longitude range near the poles or across the antimeridian.
pub(crate) fn bounds_around(center: Coordinate, radius_km: f64) -> GeoBounds {
    let lat_delta = (radius_km / EARTH_RADIUS_KM).to_degrees() * BOUNDS_MARGIN;
    let min_latitude = (center.latitude - lat_delta).max(-90.0);
    let max_latitude = (center.latitude + lat_delta).min(90.0);

    let cos_lat = center.latitude.to_radians().cos();
    let lng_delta = if cos_lat > 1e-6 {
        (radius_km / (EARTH_RADIUS_KM * cos_lat)).to_degrees() * BOUNDS_MARGIN
    } else {
        360.0
    };

    let (min_longitude, max_longitude) =
        if center.longitude - lng_delta < -180.0 || center.longitude + lng_delta > 180.0 {
            (-180.0, 180.0)
        } else {
            (center.longitude - lng_delta, center.longitude + lng_delta)
        };

    GeoBounds {
        min_latitude,
        max_latitude,
        min_longitude,
        max_longitude,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_contain_the_radius() {
        let center = Coordinate::new(-27.2092052, -49.6401091);
        let bounds = bounds_around(center, NEARBY_RADIUS_KM);

        let north = Coordinate::new(bounds.max_latitude, center.longitude);
        let east = Coordinate::new(center.latitude, bounds.max_longitude);
        assert!(distance_between_coordinates(center, north) >= NEARBY_RADIUS_KM);
        assert!(distance_between_coordinates(center, east) >= NEARBY_RADIUS_KM);
    }

    #[test]
    fn antimeridian_widens_to_full_longitude_range() {
        let bounds = bounds_around(Coordinate::new(0.0, 179.99), NEARBY_RADIUS_KM);
        assert_eq!(bounds.min_longitude, -180.0);
        assert_eq!(bounds.max_longitude, 180.0);
    }
}
