//! Base repository trait for persistence operations.
//!
//! Every table in the booking store is keyed by a text id allocated as
//! `max(existing integer id) + 1`, is listed in full by the presentation
//! layer, and is written as whole rows. `Repository<T, ID>` carries that
//! shared shape; the entity-specific ports in `crate::ports` extend it with
//! their natural-key lookups.
//!
//! # Example
//!
//! ```ignore
//! #[async_trait]
//! pub trait TrainRepository: Repository<Train, TrainId> {
//!     async fn find_by_number(&self, number: &str) -> Result<Option<Train>, DomainError>;
//! }
//! ```

use async_trait::async_trait;
use std::fmt::Debug;

use super::DomainError;

/// Base trait for table-backed repositories.
///
/// # Error Handling
///
/// Absence is never an error: lookups return `Ok(None)` and updates return
/// `Ok(false)`. `Err` is reserved for storage failures, which implementations
/// report as `ErrorCode::DatabaseError` without further interpretation.
#[async_trait]
pub trait Repository<T, ID>: Send + Sync
where
    T: Send + Sync,
    ID: Send + Sync + Debug + 'static,
{
    /// Finds an entity by its identifier.
    async fn find_by_id(&self, id: &ID) -> Result<Option<T>, DomainError>;

    /// Returns every row. Order is unspecified.
    async fn list_all(&self) -> Result<Vec<T>, DomainError>;

    /// Inserts a fully formed entity whose id was allocated by the caller.
    ///
    /// # Errors
    ///
    /// A duplicate id or unique key is reported as a storage failure.
    async fn save(&self, entity: &T) -> Result<(), DomainError>;

    /// Replaces the row with the entity's id.
    ///
    /// Returns `false` when no row carries that id.
    async fn update(&self, entity: &T) -> Result<bool, DomainError>;

    /// Allocates the next id: `max(existing integer id) + 1`, or `1` when empty.
    ///
    /// Two callers that do not serialize their writes can receive the same id.
    async fn next_id(&self) -> Result<ID, DomainError>;

    /// Checks if an entity with the given ID exists.
    async fn exists(&self, id: &ID) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}
