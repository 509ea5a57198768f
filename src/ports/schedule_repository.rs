//! Schedule repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Repository, ScheduleId};
use crate::domain::train::Schedule;

/// Repository port for timetable entries.
#[async_trait]
pub trait ScheduleRepository: Repository<Schedule, ScheduleId> {
    /// Finds the schedule for a train number.
    ///
    /// Nothing limits a train to one schedule; if several exist, any one of
    /// them may be returned.
    async fn find_by_train_number(
        &self,
        train_number: &str,
    ) -> Result<Option<Schedule>, DomainError>;

    /// Removes a schedule. Returns `false` when no row had that id.
    async fn delete(&self, id: &ScheduleId) -> Result<bool, DomainError>;
}
