//! Train and timetable handlers.

mod manage_schedules;
mod manage_trains;
mod search_trains;

pub use manage_schedules::{
    CreateScheduleCommand, ManageSchedulesHandler, RemoveScheduleCommand, UpdateScheduleCommand,
};
pub use manage_trains::{
    CreateTrainCommand, DeleteTrainCommand, ManageTrainsHandler, UpdateTrainCommand,
};
pub use search_trains::{SearchTrainsHandler, SearchTrainsQuery};
