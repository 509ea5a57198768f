//! Account role.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Role a user signs in as.
///
/// Stored lowercase. Parsing ignores case but not whitespace, so the
/// login screen's "Admin" and the stored "admin" compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Manages trains and schedules.
    Admin,
    /// Searches, books and pays for tickets.
    Passenger,
}

impl UserRole {
    /// Returns the stored representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Passenger => "passenger",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "passenger" => Ok(UserRole::Passenger),
            _ => Err(ValidationError::unknown_value("role", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("ADMIN".parse::<UserRole>(), Ok(UserRole::Admin));
        assert_eq!("Passenger".parse::<UserRole>(), Ok(UserRole::Passenger));
    }

    #[test]
    fn surrounding_whitespace_is_not_ignored() {
        assert!(" admin ".parse::<UserRole>().is_err());
        assert!("passenger\n".parse::<UserRole>().is_err());
    }

    #[test]
    fn rejects_unknown_role() {
        assert!("driver".parse::<UserRole>().is_err());
    }

    #[test]
    fn stores_lowercase() {
        assert_eq!(UserRole::Passenger.as_str(), "passenger");
        assert_eq!(UserRole::Admin.to_string(), "admin");
    }
}
