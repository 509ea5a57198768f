//! Booking and payment status state machines.
//!
//! A booking is created `Pending`/`Pending` and moves to
//! `Confirmed`/`Paid` in a single payment step. There is no cancellation or
//! refund, and a paid booking never returns to pending. Paying again is
//! accepted as a self-transition.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{StateMachine, ValidationError};

/// Reservation status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    /// Created, awaiting payment.
    Pending,
    /// Paid and confirmed.
    Confirmed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
        }
    }
}

impl StateMachine for BookingStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use BookingStatus::*;
        matches!((self, target), (Pending, Confirmed) | (Confirmed, Confirmed))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use BookingStatus::*;
        match self {
            Pending => vec![Confirmed],
            Confirmed => vec![Confirmed],
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(BookingStatus::Pending),
            "Confirmed" => Ok(BookingStatus::Confirmed),
            _ => Err(ValidationError::unknown_value("status", s)),
        }
    }
}

/// Payment status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Paid,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Paid => "Paid",
        }
    }
}

impl StateMachine for PaymentStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use PaymentStatus::*;
        matches!((self, target), (Pending, Paid) | (Paid, Paid))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use PaymentStatus::*;
        match self {
            Pending => vec![Paid],
            Paid => vec![Paid],
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = ValidationError;

    /// Stored values are matched exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(PaymentStatus::Pending),
            "Paid" => Ok(PaymentStatus::Paid),
            _ => Err(ValidationError::unknown_value("payment_status", s)),
        }
    }
}
