//! Train repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Repository, TrainId};
use crate::domain::train::Train;

/// Repository port for the train fleet.
#[async_trait]
pub trait TrainRepository: Repository<Train, TrainId> {
    /// Finds a train by its unique number (e.g. `1UP`).
    async fn find_by_number(&self, train_number: &str) -> Result<Option<Train>, DomainError>;

    /// Removes a train. Returns `false` when no row had that id.
    ///
    /// Bookings keep their denormalized copy of the train.
    async fn delete(&self, id: &TrainId) -> Result<bool, DomainError>;
}
