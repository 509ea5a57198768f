//! AuthenticateHandler - Query handler for logging in.

use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};

use crate::application::ServiceError;
use crate::domain::user::{User, UserRole};
use crate::ports::UserRepository;

/// Login attempt as entered on the login screen.
#[derive(Debug, Clone)]
pub struct AuthenticateCommand {
    pub email: String,
    pub password: String,
    /// Role selected by the user, matched case-insensitively.
    pub role: String,
}

/// Handler for checking credentials.
pub struct AuthenticateHandler {
    users: Arc<dyn UserRepository>,
}

impl AuthenticateHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Returns the user when email, password and role all match.
    ///
    /// Every mismatch yields the same `InvalidCredentials` error so callers
    /// cannot tell which part was wrong.
    pub async fn handle(&self, cmd: AuthenticateCommand) -> Result<User, ServiceError> {
        let Ok(role) = UserRole::from_str(&cmd.role) else {
            warn!(role = %cmd.role, "Login rejected: unknown role");
            return Err(ServiceError::InvalidCredentials);
        };

        let Some(user) = self.users.find_by_email(&cmd.email).await? else {
            warn!("Login rejected: unknown email");
            return Err(ServiceError::InvalidCredentials);
        };

        if !user.password.matches(&cmd.password) || user.role != role {
            warn!(user_id = %user.id, "Login rejected: credentials do not match");
            return Err(ServiceError::InvalidCredentials);
        }

        info!(user_id = %user.id, role = %role.as_str(), "User logged in");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::{passenger, InMemoryUsers};
    use crate::domain::foundation::ErrorCode;

    fn handler() -> AuthenticateHandler {
        AuthenticateHandler::new(Arc::new(InMemoryUsers::with(vec![passenger(
            101,
            "sarah.khan@example.com",
        )])))
    }

    fn attempt(email: &str, password: &str, role: &str) -> AuthenticateCommand {
        AuthenticateCommand {
            email: email.to_string(),
            password: password.to_string(),
            role: role.to_string(),
        }
    }

    #[tokio::test]
    async fn matching_credentials_return_the_user() {
        let user = handler()
            .handle(attempt("sarah.khan@example.com", "password1", "passenger"))
            .await
            .unwrap();
        assert_eq!(user.id.as_str(), "101");
    }

    #[tokio::test]
    async fn email_and_role_ignore_case() {
        let result = handler()
            .handle(attempt("SARAH.KHAN@EXAMPLE.COM", "password1", "Passenger"))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn password_is_case_sensitive() {
        let err = handler()
            .handle(attempt("sarah.khan@example.com", "Password1", "passenger"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidCredentials);
    }

    #[tokio::test]
    async fn wrong_role_is_rejected() {
        let err = handler()
            .handle(attempt("sarah.khan@example.com", "password1", "admin"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidCredentials));
    }

    #[tokio::test]
    async fn padded_role_is_rejected() {
        let err = handler()
            .handle(attempt("sarah.khan@example.com", "password1", " passenger "))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidCredentials);
    }

    #[tokio::test]
    async fn unknown_email_and_unknown_role_are_rejected() {
        let handler = handler();
        assert!(handler
            .handle(attempt("nobody@example.com", "password1", "passenger"))
            .await
            .is_err());
        assert!(handler
            .handle(attempt("sarah.khan@example.com", "password1", "conductor"))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn storage_failure_is_not_reported_as_bad_credentials() {
        let handler = AuthenticateHandler::new(Arc::new(InMemoryUsers::failing()));
        let err = handler
            .handle(attempt("sarah.khan@example.com", "password1", "passenger"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }
}
