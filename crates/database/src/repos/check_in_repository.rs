//! Check-in repository for database operations.

use crate::entities::{CheckIn, NewCheckIn};
use crate::types::{DatabaseResult, Page};
use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const CHECK_IN_COLUMNS: &str = "id, user_id, gym_id, created_at, validated_at";

/// Repository for check-in database operations
#[derive(Clone)]
pub struct CheckInRepository {
    pool: SqlitePool,
}

impl CheckInRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a check-in. A second check-in for the same user and local day
    /// surfaces as `DatabaseError::Duplicate`.
    pub async fn create(&self, new_check_in: NewCheckIn) -> DatabaseResult<CheckIn> {
        let check_in = CheckIn::from_new(new_check_in);

        sqlx::query(
            "INSERT INTO check_ins (id, user_id, gym_id, created_at, validated_at, check_in_day) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&check_in.id)
        .bind(&check_in.user_id)
        .bind(&check_in.gym_id)
        .bind(check_in.created_at)
        .bind(check_in.validated_at)
        .bind(day_key(check_in.check_in_day()))
        .execute(&self.pool)
        .await?;

        Ok(check_in)
    }

    pub async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<CheckIn>> {
        let row = sqlx::query(&format!(
            "SELECT {CHECK_IN_COLUMNS} FROM check_ins WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(check_in_from_row).transpose()
    }

    pub async fn find_by_user_id_on_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> DatabaseResult<Option<CheckIn>> {
        let row = sqlx::query(&format!(
            "SELECT {CHECK_IN_COLUMNS} FROM check_ins WHERE user_id = ? AND check_in_day = ? LIMIT 1"
        ))
        .bind(user_id)
        .bind(day_key(date))
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(check_in_from_row).transpose()
    }

    pub async fn find_many_by_user_id(
        &self,
        user_id: &str,
        page: Page,
    ) -> DatabaseResult<Vec<CheckIn>> {
        let rows = sqlx::query(&format!(
            "SELECT {CHECK_IN_COLUMNS} FROM check_ins WHERE user_id = ? \
             ORDER BY created_at ASC, rowid ASC LIMIT ? OFFSET ?"
        ))
        .bind(user_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(check_in_from_row).collect()
    }

    pub async fn count_by_user_id(&self, user_id: &str) -> DatabaseResult<u64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM check_ins WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.max(0) as u64)
    }

    /// Persist the mutable part of a check-in
    pub async fn save(&self, check_in: CheckIn) -> DatabaseResult<CheckIn> {
        sqlx::query("UPDATE check_ins SET validated_at = ? WHERE id = ?")
            .bind(check_in.validated_at)
            .bind(&check_in.id)
            .execute(&self.pool)
            .await?;

        Ok(check_in)
    }
}

fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn check_in_from_row(row: &SqliteRow) -> DatabaseResult<CheckIn> {
    Ok(CheckIn {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        gym_id: row.try_get("gym_id")?,
        created_at: row.try_get("created_at")?,
        validated_at: row.try_get("validated_at")?,
    })
}
