//! Booking repository port.

use async_trait::async_trait;

use crate::domain::booking::Booking;
use crate::domain::foundation::{BookingId, DomainError, Repository, UserId};

/// Repository port for bookings.
///
/// Bookings are never deleted; payment is recorded through `update`.
#[async_trait]
pub trait BookingRepository: Repository<Booking, BookingId> {
    /// All bookings made by one user. Order is unspecified.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Booking>, DomainError>;
}
