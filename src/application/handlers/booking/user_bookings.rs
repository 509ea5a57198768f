//! UserBookingsHandler - Query handler for a passenger's own bookings.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::application::ServiceError;
use crate::domain::booking::{Booking, PaymentHistory};
use crate::domain::foundation::UserId;
use crate::ports::BookingRepository;

/// Query for one user's bookings.
#[derive(Debug, Clone)]
pub struct UserBookingsQuery {
    pub user_id: UserId,
}

/// Handler for the "my bookings", pending payment and payment history views.
pub struct UserBookingsHandler {
    bookings: Arc<dyn BookingRepository>,
}

impl UserBookingsHandler {
    pub fn new(bookings: Arc<dyn BookingRepository>) -> Self {
        Self { bookings }
    }

    /// Every booking owned by the user.
    pub async fn handle(&self, query: UserBookingsQuery) -> Result<Vec<Booking>, ServiceError> {
        Ok(self.bookings.list_by_user(&query.user_id).await?)
    }

    /// The user's bookings still awaiting payment.
    pub async fn pending_payments(
        &self,
        query: UserBookingsQuery,
    ) -> Result<Vec<Booking>, ServiceError> {
        Ok(self
            .handle(query)
            .await?
            .into_iter()
            .filter(Booking::is_payment_pending)
            .collect())
    }

    /// Paid bookings and spending totals, with "this month" taken from `today`.
    pub async fn payment_history(
        &self,
        query: UserBookingsQuery,
        today: NaiveDate,
    ) -> Result<PaymentHistory, ServiceError> {
        let bookings = self.handle(query).await?;
        Ok(PaymentHistory::from_bookings(bookings, today))
    }
}
