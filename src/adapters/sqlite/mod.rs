//! SQLite storage adapter.
//!
//! One database file (or a private in-memory database) holds four tables:
//! `users`, `trains`, `schedules` and `bookings`. All repositories share a
//! single pool owned by [`Database`].

mod booking_repository;
mod database;
mod helpers;
mod schedule_repository;
mod schema;
mod seed;
mod train_repository;
mod user_repository;

pub use booking_repository::SqliteBookingRepository;
pub use database::{Database, TableCounts};
pub use schedule_repository::SqliteScheduleRepository;
pub use seed::SeedReport;
pub use train_repository::SqliteTrainRepository;
pub use user_repository::SqliteUserRepository;
