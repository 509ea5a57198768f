//! Operational status of a train.
//!
//! The column is free text edited by admins. The three values the screens
//! colour-code are recognised in any common spelling; anything else is kept
//! verbatim so one odd row never hides the rest of the fleet.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Running status shown next to a train.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TrainStatus {
    OnTime,
    Delayed,
    Cancelled,
    /// Any other text an admin entered, as stored.
    Other(String),
}

impl TrainStatus {
    /// Returns the stored representation.
    pub fn as_str(&self) -> &str {
        match self {
            TrainStatus::OnTime => "On-time",
            TrainStatus::Delayed => "Delayed",
            TrainStatus::Cancelled => "Cancelled",
            TrainStatus::Other(text) => text,
        }
    }

    /// True for the three statuses the application knows about.
    pub fn is_known(&self) -> bool {
        !matches!(self, TrainStatus::Other(_))
    }
}

impl fmt::Display for TrainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrainStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "on-time" | "on time" | "ontime" => TrainStatus::OnTime,
            "delayed" => TrainStatus::Delayed,
            "cancelled" | "canceled" => TrainStatus::Cancelled,
            _ => TrainStatus::Other(s.to_string()),
        })
    }
}

impl From<&str> for TrainStatus {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(status) => status,
            Err(never) => match never {},
        }
    }
}

impl From<String> for TrainStatus {
    fn from(value: String) -> Self {
        TrainStatus::from(value.as_str())
    }
}

impl From<TrainStatus> for String {
    fn from(status: TrainStatus) -> Self {
        status.as_str().to_string()
    }
}
