//! Booking handlers: reservation, payment and the passenger's views.

mod book_ticket;
mod process_payment;
mod user_bookings;

pub use book_ticket::{BookTicketCommand, BookTicketHandler};
pub use process_payment::{ProcessPaymentCommand, ProcessPaymentHandler};
pub use user_bookings::{UserBookingsHandler, UserBookingsQuery};
