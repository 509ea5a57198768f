//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Repository Ports
//!
//! - `UserRepository` - Accounts, looked up by id or email
//! - `TrainRepository` - Fleet, looked up by id or train number
//! - `ScheduleRepository` - Timetable, looked up by id or train number
//! - `BookingRepository` - Reservations, listed per user
//!
//! All four extend `domain::foundation::Repository`, which supplies
//! find/list/save/update and next-id allocation.

mod booking_repository;
mod schedule_repository;
mod train_repository;
mod user_repository;

pub use booking_repository::BookingRepository;
pub use schedule_repository::ScheduleRepository;
pub use train_repository::TrainRepository;
pub use user_repository::UserRepository;
