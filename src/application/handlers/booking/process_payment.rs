//! ProcessPaymentHandler - Command handler for paying a booking.

use std::sync::Arc;
use tracing::info;

use crate::application::{Entity, ServiceError};
use crate::domain::booking::Booking;
use crate::domain::foundation::BookingId;
use crate::ports::BookingRepository;

/// Command to pay for a booking.
#[derive(Debug, Clone)]
pub struct ProcessPaymentCommand {
    pub booking_id: BookingId,
    /// Free-text method such as `Card`, `JazzCash` or `EasyPaisa`.
    pub method: String,
}

/// Handler for recording payments.
pub struct ProcessPaymentHandler {
    bookings: Arc<dyn BookingRepository>,
}

impl ProcessPaymentHandler {
    pub fn new(bookings: Arc<dyn BookingRepository>) -> Self {
        Self { bookings }
    }

    /// Marks the booking paid and confirmed.
    ///
    /// Paying an already paid booking succeeds and replaces the method.
    pub async fn handle(&self, cmd: ProcessPaymentCommand) -> Result<Booking, ServiceError> {
        let mut booking = self
            .bookings
            .find_by_id(&cmd.booking_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(Entity::Booking, &cmd.booking_id))?;

        booking.record_payment(cmd.method)?;

        if !self.bookings.update(&booking).await? {
            return Err(ServiceError::not_found(Entity::Booking, &booking.id));
        }

        info!(
            booking_id = %booking.id,
            method = %booking.payment_method,
            amount = booking.total_amount,
            "Payment recorded"
        );
        Ok(booking)
    }
}
