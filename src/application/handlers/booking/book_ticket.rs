//! BookTicketHandler - Command handler for reserving seats.

use std::sync::Arc;
use tracing::info;

use crate::application::ServiceError;
use crate::domain::booking::{Booking, TicketRequest};
use crate::domain::foundation::Timestamp;
use crate::ports::BookingRepository;

/// Command to book a ticket.
#[derive(Debug, Clone)]
pub struct BookTicketCommand {
    pub request: TicketRequest,
}

/// Handler for creating bookings.
pub struct BookTicketHandler {
    bookings: Arc<dyn BookingRepository>,
}

impl BookTicketHandler {
    pub fn new(bookings: Arc<dyn BookingRepository>) -> Self {
        Self { bookings }
    }

    /// Creates an unpaid booking stamped with the current time.
    ///
    /// Seats are not counted against any capacity.
    pub async fn handle(&self, cmd: BookTicketCommand) -> Result<Booking, ServiceError> {
        let id = self.bookings.next_id().await?;
        let booking = Booking::create(id, cmd.request, Timestamp::now());
        self.bookings.save(&booking).await?;

        info!(
            booking_id = %booking.id,
            user_id = %booking.user_id,
            train_number = %booking.train_number,
            seats = booking.seats,
            "Ticket booked"
        );
        Ok(booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::{
        passenger, pending_booking, train, InMemoryBookings,
    };
    use crate::domain::booking::{BookingStatus, PaymentStatus};
    use crate::domain::foundation::Repository;
    use chrono::NaiveDate;

    fn request() -> BookTicketCommand {
        BookTicketCommand {
            request: TicketRequest::new(
                &passenger(101, "sarah.khan@example.com"),
                &train(5, "5UP", "Rawalpindi - Quetta"),
                "Rawalpindi",
                "Quetta",
                NaiveDate::from_ymd_opt(2024, 9, 14).unwrap(),
                3,
                "Business",
                12000.0,
            ),
        }
    }

    #[tokio::test]
    async fn booking_starts_pending_with_train_snapshot() {
        let handler = BookTicketHandler::new(Arc::new(InMemoryBookings::new()));

        let booking = handler.handle(request()).await.unwrap();

        assert_eq!(booking.id.as_str(), "1");
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.payment_status, PaymentStatus::Pending);
        assert_eq!(booking.payment_method, "");
        assert_eq!(booking.train_number, "5UP");
        assert_eq!(booking.train_name, "5UP Express");
    }

    #[tokio::test]
    async fn identical_requests_are_both_accepted() {
        let bookings = Arc::new(InMemoryBookings::with(vec![pending_booking(400, 101)]));
        let handler = BookTicketHandler::new(bookings.clone());

        let first = handler.handle(request()).await.unwrap();
        let second = handler.handle(request()).await.unwrap();

        assert_eq!(first.id.as_str(), "401");
        assert_eq!(second.id.as_str(), "402");
        assert_eq!(bookings.list_all().await.unwrap().len(), 3);
    }
}
