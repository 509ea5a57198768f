//! Payment history aggregation for a passenger.

use chrono::NaiveDate;

use super::Booking;

/// Paid bookings of one user with the totals shown on the history screen.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentHistory {
    /// Bookings whose payment status is `Paid`.
    pub payments: Vec<Booking>,
    /// Sum of `total_amount` over paid bookings.
    pub total_spent: f64,
    /// Number of paid bookings.
    pub paid_trips: usize,
    /// Paid bookings booked in the calendar month of `today`.
    pub paid_this_month: usize,
}

impl PaymentHistory {
    /// Summarizes a user's bookings. Unpaid bookings are ignored.
    pub fn from_bookings(bookings: Vec<Booking>, today: NaiveDate) -> Self {
        let payments: Vec<Booking> = bookings.into_iter().filter(Booking::is_paid).collect();
        let total_spent = payments.iter().map(|b| b.total_amount).sum();
        let paid_this_month = payments
            .iter()
            .filter(|b| b.booked_at.is_same_month_as(today))
            .count();

        Self {
            paid_trips: payments.len(),
            payments,
            total_spent,
            paid_this_month,
        }
    }
}
