//! Shared query helpers for the SQLite repositories.

use sqlx::SqlitePool;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::DomainError;

/// Tables managed by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Table {
    Users,
    Trains,
    Schedules,
    Bookings,
}

impl Table {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Table::Users => "users",
            Table::Trains => "trains",
            Table::Schedules => "schedules",
            Table::Bookings => "bookings",
        }
    }
}

/// `max(CAST(id AS INTEGER)) + 1` for the table, `1` when it is empty.
///
/// Ids that are not numeric count as `0`. This is a plain read: two
/// unserialized writers can be handed the same value.
pub(crate) async fn next_sequence(pool: &SqlitePool, table: Table) -> Result<i64, DomainError> {
    let sql = format!(
        "SELECT COALESCE(MAX(CAST(id AS INTEGER)), 0) + 1 FROM {}",
        table.name()
    );
    sqlx::query_scalar::<_, i64>(&sql)
        .fetch_one(pool)
        .await
        .map_err(|e| DomainError::database(&format!("Failed to allocate {} id", table.name()), e))
}

/// Number of rows currently in the table.
pub(crate) async fn count_rows(pool: &SqlitePool, table: Table) -> Result<i64, DomainError> {
    let sql = format!("SELECT COUNT(*) FROM {}", table.name());
    sqlx::query_scalar::<_, i64>(&sql)
        .fetch_one(pool)
        .await
        .map_err(|e| DomainError::database(&format!("Failed to count {}", table.name()), e))
}

/// Parses a stored enum column, reporting unreadable rows as storage failures.
///
/// The column name and raw value travel in the error details.
pub(crate) fn parse_column<T>(column: &str, value: &str) -> Result<T, DomainError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value.parse().map_err(|e| {
        DomainError::database(&format!("Invalid {} value '{}'", column, value), e)
            .with_detail("column", column)
            .with_detail("value", value)
    })
}
