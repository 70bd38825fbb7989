//! Great-circle distance between two points on the Earth's surface.

use gymcheck_database::Gym;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn from_decimals(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude: latitude.to_f64().unwrap_or_default(),
            longitude: longitude.to_f64().unwrap_or_default(),
        }
    }

    pub fn of_gym(gym: &Gym) -> Self {
        Self::from_decimals(gym.latitude, gym.longitude)
    }
}

/// Haversine distance in kilometers
pub fn distance_between_coordinates(from: Coordinate, to: Coordinate) -> f64 {
    let dlat = (to.latitude - from.latitude).to_radians();
    let dlng = (to.longitude - from.longitude).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (dlng / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
