//! Train module - the fleet, its timetable and route handling.

mod aggregate;
pub mod route;
mod schedule_filter;
mod status;

pub use aggregate::{NewSchedule, NewTrain, Schedule, Train};
pub use route::RouteStations;
pub use schedule_filter::ScheduleFilter;
pub use status::TrainStatus;
