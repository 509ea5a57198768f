//! Booking module - ticket reservations and their payment lifecycle.
//!
//! # Module Structure
//!
//! - `aggregate` - Booking aggregate and the ticket request that creates it
//! - `status` - BookingStatus / PaymentStatus state machines
//! - `history` - Per-user payment history summary

mod aggregate;
mod history;
mod status;

pub use aggregate::{Booking, TicketRequest};
pub use history::PaymentHistory;
pub use status::{BookingStatus, PaymentStatus};
