//! Gym repository for database operations.

use crate::entities::{Gym, NewGym};
use crate::types::{DatabaseError, DatabaseResult, GeoBounds, Page};
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::str::FromStr;

const GYM_COLUMNS: &str = "id, title, description, phone, latitude, longitude, created_at";

/// Repository for gym database operations
#[derive(Clone)]
pub struct GymRepository {
    pool: SqlitePool,
}

impl GymRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_gym: NewGym) -> DatabaseResult<Gym> {
        let gym = Gym::from_new(new_gym, Utc::now());

        sqlx::query(
            "INSERT INTO gyms (id, title, description, phone, latitude, longitude, created_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&gym.id)
        .bind(&gym.title)
        .bind(&gym.description)
        .bind(&gym.phone)
        .bind(gym.latitude.to_string())
        .bind(gym.longitude.to_string())
        .bind(gym.created_at)
        .execute(&self.pool)
        .await?;

        Ok(gym)
    }

    pub async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<Gym>> {
        let row = sqlx::query(&format!("SELECT {GYM_COLUMNS} FROM gyms WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(gym_from_row).transpose()
    }

    /// Case-insensitive title substring search, oldest first
    pub async fn search_many(&self, query: &str, page: Page) -> DatabaseResult<Vec<Gym>> {
        let pattern = format!("%{}%", escape_like(&query.to_lowercase()));

        let rows = sqlx::query(&format!(
            "SELECT {GYM_COLUMNS} FROM gyms WHERE LOWER(title) LIKE ? ESCAPE '\\' \
             ORDER BY created_at ASC, rowid ASC LIMIT ? OFFSET ?"
        ))
        .bind(pattern)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(gym_from_row).collect()
    }

    /// Gyms whose coordinates fall inside the rectangle, oldest first
    pub async fn find_within_bounds(&self, bounds: GeoBounds) -> DatabaseResult<Vec<Gym>> {
        let rows = sqlx::query(&format!(
            "SELECT {GYM_COLUMNS} FROM gyms \
             WHERE CAST(latitude AS REAL) BETWEEN ? AND ? \
             AND CAST(longitude AS REAL) BETWEEN ? AND ? \
             ORDER BY created_at ASC, rowid ASC"
        ))
        .bind(bounds.min_latitude)
        .bind(bounds.max_latitude)
        .bind(bounds.min_longitude)
        .bind(bounds.max_longitude)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(gym_from_row).collect()
    }
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn parse_decimal(row: &SqliteRow, column: &str) -> DatabaseResult<Decimal> {
    let raw: String = row.try_get(column)?;
    Decimal::from_str(&raw)
        .map_err(|e| DatabaseError::InvalidData(format!("gyms.{column} = {raw:?}: {e}")))
}

fn gym_from_row(row: &SqliteRow) -> DatabaseResult<Gym> {
    Ok(Gym {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        phone: row.try_get("phone")?,
        latitude: parse_decimal(row, "latitude")?,
        longitude: parse_decimal(row, "longitude")?,
        created_at: row.try_get("created_at")?,
    })
}
