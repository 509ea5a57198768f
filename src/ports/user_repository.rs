//! User repository port.
//!
//! Emails are compared case-insensitively by every lookup here; the service
//! layer relies on that when enforcing uniqueness.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Repository, UserId};
use crate::domain::user::User;

/// Repository port for user accounts.
///
/// Users are never deleted, so the port has no delete operation.
#[async_trait]
pub trait UserRepository: Repository<User, UserId> {
    /// Finds a user by email, ignoring case.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// True when a user other than `excluding` already has this email.
    ///
    /// Pass `None` to check against every user.
    async fn email_exists(
        &self,
        email: &str,
        excluding: Option<&UserId>,
    ) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn UserRepository) {}
    }
}
