//! Admin command handlers for the train fleet.

use std::sync::Arc;
use tracing::info;

use crate::application::{Entity, ServiceError};
use crate::domain::foundation::TrainId;
use crate::domain::train::{NewTrain, Train};
use crate::ports::TrainRepository;

/// Command to add a train.
#[derive(Debug, Clone)]
pub struct CreateTrainCommand {
    pub train: NewTrain,
}

/// Command to replace a train's fields.
#[derive(Debug, Clone)]
pub struct UpdateTrainCommand {
    pub train: Train,
}

/// Command to remove a train.
#[derive(Debug, Clone)]
pub struct DeleteTrainCommand {
    pub train_id: TrainId,
}

/// Handler for train create, update and delete.
pub struct ManageTrainsHandler {
    trains: Arc<dyn TrainRepository>,
}

impl ManageTrainsHandler {
    pub fn new(trains: Arc<dyn TrainRepository>) -> Self {
        Self { trains }
    }

    /// Stores the train under the next free id.
    ///
    /// A duplicate train number is rejected by the store as a storage failure.
    pub async fn create(&self, cmd: CreateTrainCommand) -> Result<Train, ServiceError> {
        let id = self.trains.next_id().await?;
        let train = cmd.train.into_train(id);
        self.trains.save(&train).await?;

        info!(train_id = %train.id, train_number = %train.train_number, "Train added");
        Ok(train)
    }

    pub async fn update(&self, cmd: UpdateTrainCommand) -> Result<Train, ServiceError> {
        if !self.trains.update(&cmd.train).await? {
            return Err(ServiceError::not_found(Entity::Train, &cmd.train.id));
        }
        info!(train_id = %cmd.train.id, status = %cmd.train.status, "Train updated");
        Ok(cmd.train)
    }

    /// Removes the train. Existing bookings and schedules keep their copies
    /// of the train number and name.
    pub async fn delete(&self, cmd: DeleteTrainCommand) -> Result<bool, ServiceError> {
        let removed = self.trains.delete(&cmd.train_id).await?;
        if removed {
            info!(train_id = %cmd.train_id, "Train deleted");
        }
        Ok(removed)
    }
}
