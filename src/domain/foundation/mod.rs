//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, error types and the base traits
//! that form the vocabulary of the booking domain.

mod errors;
mod ids;
mod repository;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{BookingId, ScheduleId, TrainId, UserId};
pub use repository::Repository;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
