//! SQLite implementation of TrainRepository.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::foundation::{DomainError, Repository, TrainId};
use crate::domain::train::{Train, TrainStatus};
use crate::ports::TrainRepository;

use super::helpers::{next_sequence, parse_column, Table};

/// SQLite implementation of the TrainRepository port.
#[derive(Clone)]
pub struct SqliteTrainRepository {
    pool: SqlitePool,
}

impl SqliteTrainRepository {
    /// Creates a new SqliteTrainRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TrainRow {
    id: String,
    train_number: String,
    train_name: String,
    #[sqlx(rename = "type")]
    train_type: Option<String>,
    route: Option<String>,
    status: Option<String>,
}

impl TryFrom<TrainRow> for Train {
    type Error = DomainError;

    fn try_from(row: TrainRow) -> Result<Self, Self::Error> {
        let status = match row.status.as_deref() {
            None | Some("") => TrainStatus::OnTime,
            Some(value) => TrainStatus::from(value),
        };
        Ok(Train {
            id: parse_column("train id", &row.id)?,
            train_number: row.train_number,
            train_name: row.train_name,
            train_type: row.train_type.unwrap_or_default(),
            route: row.route.unwrap_or_default(),
            status,
        })
    }
}

const SELECT_TRAIN: &str = "SELECT id, train_number, train_name, type, route, status FROM trains";

#[async_trait]
impl Repository<Train, TrainId> for SqliteTrainRepository {
    async fn find_by_id(&self, id: &TrainId) -> Result<Option<Train>, DomainError> {
        let row: Option<TrainRow> = sqlx::query_as(&format!("{} WHERE id = ?", SELECT_TRAIN))
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to find train by id", e))?;

        row.map(Train::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Train>, DomainError> {
        let rows: Vec<TrainRow> = sqlx::query_as(SELECT_TRAIN)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to list trains", e))?;

        rows.into_iter().map(Train::try_from).collect()
    }

    async fn save(&self, train: &Train) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO trains (id, train_number, train_name, type, route, status) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(train.id.as_str())
        .bind(&train.train_number)
        .bind(&train.train_name)
        .bind(&train.train_type)
        .bind(&train.route)
        .bind(train.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to save train", e))?;

        Ok(())
    }

    async fn update(&self, train: &Train) -> Result<bool, DomainError> {
        let result = sqlx::query(
            "UPDATE trains SET train_number = ?, train_name = ?, type = ?, route = ?, status = ? WHERE id = ?",
        )
        .bind(&train.train_number)
        .bind(&train.train_name)
        .bind(&train.train_type)
        .bind(&train.route)
        .bind(train.status.as_str())
        .bind(train.id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update train", e))?;

        Ok(result.rows_affected() == 1)
    }

    async fn next_id(&self) -> Result<TrainId, DomainError> {
        Ok(TrainId::from_sequence(next_sequence(&self.pool, Table::Trains).await?))
    }
}

#[async_trait]
impl TrainRepository for SqliteTrainRepository {
    async fn find_by_number(&self, train_number: &str) -> Result<Option<Train>, DomainError> {
        let row: Option<TrainRow> =
            sqlx::query_as(&format!("{} WHERE train_number = ?", SELECT_TRAIN))
                .bind(train_number)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to find train by number", e))?;

        row.map(Train::try_from).transpose()
    }

    async fn delete(&self, id: &TrainId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM trains WHERE id = ?")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete train", e))?;

        Ok(result.rows_affected() == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::Database;
    use crate::config::DatabaseConfig;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::train::NewTrain;

    async fn empty_repo() -> SqliteTrainRepository {
        let config = DatabaseConfig {
            seed_on_startup: false,
            ..DatabaseConfig::in_memory()
        };
        let db = Database::open(&config).await.unwrap();
        SqliteTrainRepository::new(db.pool().clone())
    }

    fn train(id: i64, number: &str) -> Train {
        NewTrain {
            train_number: number.to_string(),
            train_name: "Green Line".to_string(),
            train_type: "Passenger".to_string(),
            route: "Islamabad - Multan".to_string(),
            status: TrainStatus::Delayed,
        }
        .into_train(TrainId::from_sequence(id))
    }

    #[tokio::test]
    async fn save_then_find_by_number() {
        let repo = empty_repo().await;
        repo.save(&train(3, "3UP")).await.unwrap();

        let found = repo.find_by_number("3UP").await.unwrap();
        assert_eq!(found, Some(train(3, "3UP")));
        assert!(repo.find_by_number("3up").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_train_number_is_a_storage_error() {
        let repo = empty_repo().await;
        repo.save(&train(1, "1UP")).await.unwrap();

        let err = repo.save(&train(2, "1UP")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }

    #[tokio::test]
    async fn duplicate_id_is_a_storage_error() {
        let repo = empty_repo().await;
        repo.save(&train(1, "1UP")).await.unwrap();

        assert!(repo.save(&train(1, "9UP")).await.is_err());
    }

    #[tokio::test]
    async fn update_replaces_whole_row() {
        let repo = empty_repo().await;
        repo.save(&train(1, "1UP")).await.unwrap();

        let mut changed = train(1, "1UP");
        changed.status = TrainStatus::Cancelled;
        changed.route = "Islamabad - Khanewal".to_string();
        assert!(repo.update(&changed).await.unwrap());

        assert_eq!(repo.find_by_id(&changed.id).await.unwrap(), Some(changed));
    }

    #[tokio::test]
    async fn unrecognised_status_does_not_break_listing() {
        let repo = empty_repo().await;
        repo.save(&train(1, "1UP")).await.unwrap();
        sqlx::query(
            "INSERT INTO trains (id, train_number, train_name, type, route, status) \
             VALUES ('7', '7UP', 'Tezgam', 'Express', 'Karachi - Rawalpindi', 'Running')",
        )
        .execute(&repo.pool)
        .await
        .unwrap();

        let trains = repo.list_all().await.unwrap();
        assert_eq!(trains.len(), 2);

        let odd = repo.find_by_number("7UP").await.unwrap().unwrap();
        assert_eq!(odd.status, TrainStatus::Other("Running".to_string()));
    }

    #[tokio::test]
    async fn unrecognised_status_is_written_back_unchanged() {
        let repo = empty_repo().await;
        let mut running = train(2, "2DN");
        running.status = TrainStatus::from("Running");

        repo.save(&running).await.unwrap();

        let stored = repo.find_by_id(&running.id).await.unwrap().unwrap();
        assert_eq!(stored.status.as_str(), "Running");
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_was_removed() {
        let repo = empty_repo().await;
        repo.save(&train(1, "1UP")).await.unwrap();

        assert!(repo.delete(&TrainId::from_sequence(1)).await.unwrap());
        assert!(!repo.delete(&TrainId::from_sequence(1)).await.unwrap());
        assert!(repo.list_all().await.unwrap().is_empty());
    }
}
