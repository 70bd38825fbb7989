//! Gym entity definitions

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Gym entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gym {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Data needed to persist a new gym
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGym {
    pub title: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl Gym {
    pub fn from_new(new_gym: NewGym, created_at: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: new_gym.title,
            description: new_gym.description,
            phone: new_gym.phone,
            latitude: new_gym.latitude,
            longitude: new_gym.longitude,
            created_at,
        }
    }
}
