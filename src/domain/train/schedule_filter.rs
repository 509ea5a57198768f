//! Timetable filtering used by the schedule view.

use super::{route, Schedule};

/// Criteria for narrowing the timetable.
///
/// `None` for a station means "all stations".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleFilter {
    /// Case-insensitive substring over train number, train name and route.
    pub search: String,
    /// Exact (case-insensitive) origin station.
    pub from: Option<String>,
    /// Exact (case-insensitive) destination station.
    pub to: Option<String>,
}

impl ScheduleFilter {
    pub fn matches(&self, schedule: &Schedule) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || schedule.train_number.to_lowercase().contains(&needle)
            || schedule.train_name.to_lowercase().contains(&needle)
            || schedule.route.to_lowercase().contains(&needle);

        let ends = route::stations(&schedule.route);
        let matches_from = self
            .from
            .as_deref()
            .map_or(true, |from| ends.origin.eq_ignore_ascii_case(from));
        let matches_to = self
            .to
            .as_deref()
            .map_or(true, |to| ends.destination.eq_ignore_ascii_case(to));

        matches_search && matches_from && matches_to
    }

    /// Keeps the schedules that match, preserving order.
    pub fn apply(&self, schedules: Vec<Schedule>) -> Vec<Schedule> {
        schedules.into_iter().filter(|s| self.matches(s)).collect()
    }
}
