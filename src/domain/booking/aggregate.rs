//! Booking aggregate.
//!
//! # Design Decisions
//!
//! - **Denormalized train**: number and name are copied at booking time and
//!   not re-synced if the train is later edited or deleted
//! - **No inventory**: `seats` is a quantity label; nothing checks capacity
//!   or prevents double booking

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    BookingId, StateMachine, Timestamp, TrainId, UserId, ValidationError,
};
use crate::domain::train::Train;
use crate::domain::user::User;

use super::{BookingStatus, PaymentStatus};

/// A ticket reservation. The id doubles as the passenger-facing PNR.
///
/// # Invariants
///
/// - `id` never changes once assigned
/// - `status` and `payment_status` move together: `Pending`/`Pending` then
///   `Confirmed`/`Paid`, never back
/// - `payment_method` is empty until the booking is paid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub user_id: UserId,
    pub train_id: TrainId,
    pub train_number: String,
    pub train_name: String,
    pub from_station: String,
    pub to_station: String,
    pub travel_date: NaiveDate,
    pub seats: u32,
    pub seat_class: String,
    pub total_amount: f64,
    pub status: BookingStatus,
    pub booked_at: Timestamp,
    pub payment_method: String,
    pub payment_status: PaymentStatus,
}

impl Booking {
    /// Creates a new unpaid booking.
    pub fn create(id: BookingId, request: TicketRequest, booked_at: Timestamp) -> Self {
        Self {
            id,
            user_id: request.user_id,
            train_id: request.train_id,
            train_number: request.train_number,
            train_name: request.train_name,
            from_station: request.from_station,
            to_station: request.to_station,
            travel_date: request.travel_date,
            seats: request.seats,
            seat_class: request.seat_class,
            total_amount: request.total_amount,
            status: BookingStatus::Pending,
            booked_at,
            payment_method: String::new(),
            payment_status: PaymentStatus::Pending,
        }
    }

    /// Marks the booking paid with the given method and confirms it.
    ///
    /// Paying an already paid booking succeeds and replaces the method.
    pub fn record_payment(&mut self, method: impl Into<String>) -> Result<(), ValidationError> {
        let payment_status = self.payment_status.transition_to(PaymentStatus::Paid)?;
        let status = self.status.transition_to(BookingStatus::Confirmed)?;

        self.payment_method = method.into();
        self.payment_status = payment_status;
        self.status = status;
        Ok(())
    }

    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }

    pub fn is_payment_pending(&self) -> bool {
        self.payment_status == PaymentStatus::Pending
    }
}

/// What a passenger asks for when booking.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketRequest {
    pub user_id: UserId,
    pub train_id: TrainId,
    pub train_number: String,
    pub train_name: String,
    pub from_station: String,
    pub to_station: String,
    pub travel_date: NaiveDate,
    pub seats: u32,
    pub seat_class: String,
    pub total_amount: f64,
}

impl TicketRequest {
    /// Captures the passenger and a snapshot of the train.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user: &User,
        train: &Train,
        from_station: impl Into<String>,
        to_station: impl Into<String>,
        travel_date: NaiveDate,
        seats: u32,
        seat_class: impl Into<String>,
        total_amount: f64,
    ) -> Self {
        Self {
            user_id: user.id.clone(),
            train_id: train.id.clone(),
            train_number: train.train_number.clone(),
            train_name: train.train_name.clone(),
            from_station: from_station.into(),
            to_station: to_station.into(),
            travel_date,
            seats,
            seat_class: seat_class.into(),
            total_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TicketRequest {
        TicketRequest {
            user_id: UserId::from_sequence(101),
            train_id: TrainId::from_sequence(1),
            train_number: "1UP".to_string(),
            train_name: "Karachi Express".to_string(),
            from_station: "Karachi".to_string(),
            to_station: "Lahore".to_string(),
            travel_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            seats: 2,
            seat_class: "Economy".to_string(),
            total_amount: 5000.0,
        }
    }

    #[test]
    fn create_starts_pending_without_method() {
        let booking = Booking::create(BookingId::from_sequence(401), request(), Timestamp::now());

        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.payment_status, PaymentStatus::Pending);
        assert!(booking.payment_method.is_empty());
        assert!(booking.is_payment_pending());
    }

    #[test]
    fn record_payment_confirms_and_sets_method() {
        let mut booking =
            Booking::create(BookingId::from_sequence(401), request(), Timestamp::now());

        booking.record_payment("Card").unwrap();

        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.payment_status, PaymentStatus::Paid);
        assert_eq!(booking.payment_method, "Card");
        assert!(booking.is_paid());
    }

    #[test]
    fn paying_twice_overwrites_method_and_stays_paid() {
        let mut booking =
            Booking::create(BookingId::from_sequence(401), request(), Timestamp::now());

        booking.record_payment("Card").unwrap();
        booking.record_payment("JazzCash").unwrap();

        assert_eq!(booking.payment_method, "JazzCash");
        assert_eq!(booking.status, BookingStatus::Confirmed);
    }
}
