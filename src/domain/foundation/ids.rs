//! Strongly-typed identifier value objects.
//!
//! Every table is keyed by the decimal text of an integer allocated as
//! `max(existing id) + 1`. The identifiers keep the text form because
//! rows written by older releases are not guaranteed to be numeric.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

macro_rules! text_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier, returning error if empty.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(id))
            }

            /// Creates an identifier from an allocated sequence number.
            pub fn from_sequence(value: i64) -> Self {
                Self(value.to_string())
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

text_id!(
    /// Unique identifier for a registered user.
    UserId,
    "user_id"
);

text_id!(
    /// Unique identifier for a train.
    TrainId,
    "train_id"
);

text_id!(
    /// Unique identifier for a timetable entry.
    ScheduleId,
    "schedule_id"
);

text_id!(
    /// Unique identifier for a booking, shown to passengers as the PNR.
    BookingId,
    "booking_id"
);
