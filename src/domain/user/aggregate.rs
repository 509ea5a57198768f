//! User aggregate.

use chrono::NaiveDate;

use crate::domain::foundation::{UserId, ValidationError};

use super::{Password, UserRole};

/// A registered account, admin or passenger.
///
/// # Invariants
///
/// - `email` is unique across all users, compared case-insensitively
/// - `id` never changes after registration
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
    pub password: Password,
    pub cnic: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

impl User {
    /// Builds the stored user for a registration under a freshly allocated id.
    pub fn register(id: UserId, details: NewUser) -> Self {
        Self {
            id,
            name: details.name,
            email: details.email,
            phone: details.phone,
            role: details.role,
            password: details.password,
            cnic: details.cnic,
            date_of_birth: details.date_of_birth,
            gender: details.gender,
            address: details.address,
            city: details.city,
            postal_code: details.postal_code,
        }
    }

    /// Case-insensitive email comparison, matching the storage lookup.
    pub fn has_email(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }
}

/// Registration form contents. The id is allocated by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
    pub password: Password,
    pub cnic: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

impl NewUser {
    /// Creates a registration with the required fields and an empty profile.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        role: UserRole,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            role,
            password: Password::new(password),
            cnic: None,
            date_of_birth: None,
            gender: None,
            address: None,
            city: None,
            postal_code: None,
        }
    }

    /// Rejects registrations without an email address.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        Ok(())
    }
}
