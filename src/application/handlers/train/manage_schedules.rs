//! Admin command handlers for the timetable.

use std::sync::Arc;
use tracing::info;

use crate::application::{Entity, ServiceError};
use crate::domain::foundation::ScheduleId;
use crate::domain::train::{NewSchedule, Schedule};
use crate::ports::ScheduleRepository;

/// Command to add a timetable entry.
#[derive(Debug, Clone)]
pub struct CreateScheduleCommand {
    pub schedule: NewSchedule,
}

/// Command to replace a timetable entry.
#[derive(Debug, Clone)]
pub struct UpdateScheduleCommand {
    pub schedule: Schedule,
}

/// Command to remove a timetable entry.
#[derive(Debug, Clone)]
pub struct RemoveScheduleCommand {
    pub schedule_id: ScheduleId,
}

/// Handler for schedule create, update and removal.
pub struct ManageSchedulesHandler {
    schedules: Arc<dyn ScheduleRepository>,
}

impl ManageSchedulesHandler {
    pub fn new(schedules: Arc<dyn ScheduleRepository>) -> Self {
        Self { schedules }
    }

    /// Stores the entry under the next free id. The train number is not
    /// checked against the fleet.
    pub async fn create(&self, cmd: CreateScheduleCommand) -> Result<Schedule, ServiceError> {
        let id = self.schedules.next_id().await?;
        let schedule = cmd.schedule.into_schedule(id);
        self.schedules.save(&schedule).await?;

        info!(schedule_id = %schedule.id, train_number = %schedule.train_number, "Schedule added");
        Ok(schedule)
    }

    pub async fn update(&self, cmd: UpdateScheduleCommand) -> Result<Schedule, ServiceError> {
        if !self.schedules.update(&cmd.schedule).await? {
            return Err(ServiceError::not_found(Entity::Schedule, &cmd.schedule.id));
        }
        info!(schedule_id = %cmd.schedule.id, "Schedule updated");
        Ok(cmd.schedule)
    }

    pub async fn remove(&self, cmd: RemoveScheduleCommand) -> Result<bool, ServiceError> {
        let removed = self.schedules.delete(&cmd.schedule_id).await?;
        if removed {
            info!(schedule_id = %cmd.schedule_id, "Schedule removed");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::InMemorySchedules;
    use crate::domain::foundation::ErrorCode;

    fn entry(train_number: &str) -> NewSchedule {
        NewSchedule {
            train_number: train_number.to_string(),
            train_name: "Peshawar Mail".to_string(),
            departure_time: "11:00 AM".to_string(),
            arrival_time: "11:00 PM".to_string(),
            route: "Peshawar - Karachi".to_string(),
            days: "Daily".to_string(),
            status: "Active".to_string(),
        }
    }

    #[tokio::test]
    async fn create_numbers_schedules_from_one() {
        let handler = ManageSchedulesHandler::new(Arc::new(InMemorySchedules::new()));

        let first = handler
            .create(CreateScheduleCommand { schedule: entry("6DN") })
            .await
            .unwrap();
        let second = handler
            .create(CreateScheduleCommand { schedule: entry("NOPE") })
            .await
            .unwrap();

        assert_eq!(first.id.as_str(), "1");
        assert_eq!(second.id.as_str(), "2");
    }

    #[tokio::test]
    async fn update_and_remove_of_missing_entry() {
        let handler = ManageSchedulesHandler::new(Arc::new(InMemorySchedules::new()));
        let ghost = entry("6DN").into_schedule(ScheduleId::from_sequence(5));

        let err = handler
            .update(UpdateScheduleCommand { schedule: ghost })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ScheduleNotFound);

        let removed = handler
            .remove(RemoveScheduleCommand {
                schedule_id: ScheduleId::from_sequence(5),
            })
            .await
            .unwrap();
        assert!(!removed);
    }

    #[tokio::test]
    async fn storage_failure_propagates() {
        let handler = ManageSchedulesHandler::new(Arc::new(InMemorySchedules::failing()));

        let err = handler
            .create(CreateScheduleCommand { schedule: entry("6DN") })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }
}
