//! Service-level error type.
//!
//! Absence, conflicts and rejected logins are reported as their own kinds so
//! callers can tell "not there" apart from "storage broke".
//!
//! | Error | Code |
//! |-------|------|
//! | NotFound | USER_NOT_FOUND / TRAIN_NOT_FOUND / SCHEDULE_NOT_FOUND / BOOKING_NOT_FOUND |
//! | EmailTaken | EMAIL_TAKEN |
//! | InvalidCredentials | INVALID_CREDENTIALS |
//! | Validation | VALIDATION_FAILED |
//! | Storage | DATABASE_ERROR |

use std::fmt;
use thiserror::Error;
use tracing::error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Kinds of stored entity a lookup can miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    User,
    Train,
    Schedule,
    Booking,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Entity::User => "User",
            Entity::Train => "Train",
            Entity::Schedule => "Schedule",
            Entity::Booking => "Booking",
        })
    }
}

/// Errors returned by the railway service.
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: Entity, id: String },

    #[error("Email '{0}' is already registered")]
    EmailTaken(String),

    #[error("Invalid email, password or role")]
    InvalidCredentials,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Storage failure: {0}")]
    Storage(DomainError),
}

impl ServiceError {
    pub fn not_found(entity: Entity, id: impl fmt::Display) -> Self {
        ServiceError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn email_taken(email: impl Into<String>) -> Self {
        ServiceError::EmailTaken(email.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ServiceError::NotFound { entity, .. } => match entity {
                Entity::User => ErrorCode::UserNotFound,
                Entity::Train => ErrorCode::TrainNotFound,
                Entity::Schedule => ErrorCode::ScheduleNotFound,
                Entity::Booking => ErrorCode::BookingNotFound,
            },
            ServiceError::EmailTaken(_) => ErrorCode::EmailTaken,
            ServiceError::InvalidCredentials => ErrorCode::InvalidCredentials,
            ServiceError::Validation(_) => ErrorCode::ValidationFailed,
            ServiceError::Storage(err) => err.code,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound { .. })
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        error!(code = %err.code, message = %err.message, "Storage operation failed");
        ServiceError::Storage(err)
    }
}
