//! SQLite implementation of ScheduleRepository.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::foundation::{DomainError, Repository, ScheduleId};
use crate::domain::train::Schedule;
use crate::ports::ScheduleRepository;

use super::helpers::{next_sequence, parse_column, Table};

/// SQLite implementation of the ScheduleRepository port.
#[derive(Clone)]
pub struct SqliteScheduleRepository {
    pool: SqlitePool,
}

impl SqliteScheduleRepository {
    /// Creates a new SqliteScheduleRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ScheduleRow {
    id: String,
    train_number: String,
    train_name: String,
    departure_time: Option<String>,
    arrival_time: Option<String>,
    route: Option<String>,
    days: Option<String>,
    status: Option<String>,
}

impl TryFrom<ScheduleRow> for Schedule {
    type Error = DomainError;

    fn try_from(row: ScheduleRow) -> Result<Self, Self::Error> {
        Ok(Schedule {
            id: parse_column("schedule id", &row.id)?,
            train_number: row.train_number,
            train_name: row.train_name,
            departure_time: row.departure_time.unwrap_or_default(),
            arrival_time: row.arrival_time.unwrap_or_default(),
            route: row.route.unwrap_or_default(),
            days: row.days.unwrap_or_default(),
            status: row.status.unwrap_or_default(),
        })
    }
}

const SELECT_SCHEDULE: &str = r#"
    SELECT id, train_number, train_name, departure_time, arrival_time, route, days, status
    FROM schedules
"#;

#[async_trait]
impl Repository<Schedule, ScheduleId> for SqliteScheduleRepository {
    async fn find_by_id(&self, id: &ScheduleId) -> Result<Option<Schedule>, DomainError> {
        let row: Option<ScheduleRow> =
            sqlx::query_as(&format!("{} WHERE id = ?", SELECT_SCHEDULE))
                .bind(id.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to find schedule by id", e))?;

        row.map(Schedule::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Schedule>, DomainError> {
        let rows: Vec<ScheduleRow> = sqlx::query_as(SELECT_SCHEDULE)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to list schedules", e))?;

        rows.into_iter().map(Schedule::try_from).collect()
    }

    async fn save(&self, schedule: &Schedule) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO schedules (
                id, train_number, train_name, departure_time, arrival_time, route, days, status
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(schedule.id.as_str())
        .bind(&schedule.train_number)
        .bind(&schedule.train_name)
        .bind(&schedule.departure_time)
        .bind(&schedule.arrival_time)
        .bind(&schedule.route)
        .bind(&schedule.days)
        .bind(&schedule.status)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to save schedule", e))?;

        Ok(())
    }

    async fn update(&self, schedule: &Schedule) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE schedules SET
                train_number = ?, train_name = ?, departure_time = ?, arrival_time = ?,
                route = ?, days = ?, status = ?
            WHERE id = ?
            "#,
        )
        .bind(&schedule.train_number)
        .bind(&schedule.train_name)
        .bind(&schedule.departure_time)
        .bind(&schedule.arrival_time)
        .bind(&schedule.route)
        .bind(&schedule.days)
        .bind(&schedule.status)
        .bind(schedule.id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update schedule", e))?;

        Ok(result.rows_affected() == 1)
    }

    async fn next_id(&self) -> Result<ScheduleId, DomainError> {
        Ok(ScheduleId::from_sequence(
            next_sequence(&self.pool, Table::Schedules).await?,
        ))
    }
}

#[async_trait]
impl ScheduleRepository for SqliteScheduleRepository {
    async fn find_by_train_number(
        &self,
        train_number: &str,
    ) -> Result<Option<Schedule>, DomainError> {
        let row: Option<ScheduleRow> =
            sqlx::query_as(&format!("{} WHERE train_number = ? LIMIT 1", SELECT_SCHEDULE))
                .bind(train_number)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to find schedule by train", e))?;

        row.map(Schedule::try_from).transpose()
    }

    async fn delete(&self, id: &ScheduleId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM schedules WHERE id = ?")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete schedule", e))?;

        Ok(result.rows_affected() == 1)
    }
}
