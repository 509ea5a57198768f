//! Train and schedule entities.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ScheduleId, TrainId};

use super::{route, TrainStatus};

/// A train in the fleet.
///
/// # Invariants
///
/// - `train_number` is unique (enforced by the store)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Train {
    pub id: TrainId,
    pub train_number: String,
    pub train_name: String,
    /// Service class such as `Express`, `Passenger` or `Freight`.
    pub train_type: String,
    /// Free-text `"Origin - Destination"`.
    pub route: String,
    pub status: TrainStatus,
}

impl Train {
    /// True when both terms occur in the route (see [`route::matches_search`]).
    pub fn serves(&self, from: &str, to: &str) -> bool {
        route::matches_search(&self.route, from, to)
    }
}

/// Fields an admin supplies when adding a train.
#[derive(Debug, Clone)]
pub struct NewTrain {
    pub train_number: String,
    pub train_name: String,
    pub train_type: String,
    pub route: String,
    pub status: TrainStatus,
}

impl NewTrain {
    pub fn into_train(self, id: TrainId) -> Train {
        Train {
            id,
            train_number: self.train_number,
            train_name: self.train_name,
            train_type: self.train_type,
            route: self.route,
            status: self.status,
        }
    }
}

/// A timetable entry for one train.
///
/// `train_number` refers to a [`Train`] by convention only; nothing checks
/// that the train exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: ScheduleId,
    pub train_number: String,
    pub train_name: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub route: String,
    /// Days of operation, e.g. `Daily` or `Mon-Fri`.
    pub days: String,
    pub status: String,
}

/// Fields an admin supplies when adding a schedule.
#[derive(Debug, Clone)]
pub struct NewSchedule {
    pub train_number: String,
    pub train_name: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub route: String,
    pub days: String,
    pub status: String,
}

impl NewSchedule {
    pub fn into_schedule(self, id: ScheduleId) -> Schedule {
        Schedule {
            id,
            train_number: self.train_number,
            train_name: self.train_name,
            departure_time: self.departure_time,
            arrival_time: self.arrival_time,
            route: self.route,
            days: self.days,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serves_uses_route_substrings() {
        let train = NewTrain {
            train_number: "1UP".to_string(),
            train_name: "Karachi Express".to_string(),
            train_type: "Express".to_string(),
            route: "Karachi - Lahore".to_string(),
            status: TrainStatus::OnTime,
        }
        .into_train(TrainId::from_sequence(1));

        assert!(train.serves("lahore", "karachi"));
        assert!(!train.serves("multan", "karachi"));
    }
}
