//! Adapters - Implementations of port interfaces.
//!
//! - `sqlite` - SQLite-backed repositories and database lifecycle

pub mod sqlite;

pub use sqlite::{
    Database, SqliteBookingRepository, SqliteScheduleRepository, SqliteTrainRepository,
    SqliteUserRepository,
};
