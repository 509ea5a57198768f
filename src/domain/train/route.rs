//! Free-text route strings.
//!
//! A route is stored as display text such as `"Karachi - Lahore"`. The same
//! text serves as the search key, so nothing here assumes it is well formed.

use std::collections::BTreeSet;

/// Origin and destination extracted from a route string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteStations {
    pub origin: String,
    pub destination: String,
}

/// Splits a route on `-` and takes the first and last parts, trimmed.
///
/// A route without a separator yields the same text for both ends.
pub fn stations(route: &str) -> RouteStations {
    let mut parts = route.split('-').map(str::trim);
    let origin = parts.next().unwrap_or_default().to_string();
    let destination = parts.last().map(str::to_string).unwrap_or_else(|| origin.clone());
    RouteStations {
        origin,
        destination,
    }
}

/// Search predicate for trains: both terms must occur somewhere in the route,
/// ignoring case.
///
/// This is substring matching, not a station-pair match. Direction is ignored
/// and a term can match inside a longer station name.
pub fn matches_search(route: &str, from: &str, to: &str) -> bool {
    let route = route.to_lowercase();
    route.contains(&from.to_lowercase()) && route.contains(&to.to_lowercase())
}

/// Sorted, de-duplicated origins and destinations of the given routes.
///
/// Routes without a `-` separator are skipped, as are blank ends such as the
/// missing destination of `"Karachi -"`.
pub fn distinct_stations<'a>(routes: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut found = BTreeSet::new();
    for route in routes {
        if !route.contains('-') {
            continue;
        }
        let ends = stations(route);
        found.extend([ends.origin, ends.destination].into_iter().filter(|s| !s.is_empty()));
    }
    found.into_iter().collect()
}
