//! RegisterUserHandler - Command handler for creating accounts.

use std::sync::Arc;
use tracing::{info, warn};

use crate::application::ServiceError;
use crate::domain::user::{NewUser, User};
use crate::ports::UserRepository;

/// Command to register a new account.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub details: NewUser,
}

/// Handler for registering users.
pub struct RegisterUserHandler {
    users: Arc<dyn UserRepository>,
}

impl RegisterUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Stores the account under the next free id.
    ///
    /// Callers must serialize this with other writes; the id allocation and
    /// the email check are separate reads.
    pub async fn handle(&self, cmd: RegisterUserCommand) -> Result<User, ServiceError> {
        cmd.details.validate()?;

        if self.users.email_exists(&cmd.details.email, None).await? {
            warn!(email = %cmd.details.email, "Registration rejected: email taken");
            return Err(ServiceError::email_taken(cmd.details.email));
        }

        let id = self.users.next_id().await?;
        let user = User::register(id, cmd.details);
        self.users.save(&user).await?;

        info!(user_id = %user.id, role = %user.role.as_str(), "User registered");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::{passenger, InMemoryUsers};
    use crate::domain::foundation::ErrorCode;
    use crate::domain::user::UserRole;

    fn details(email: &str) -> RegisterUserCommand {
        RegisterUserCommand {
            details: NewUser::new("Ali Raza", email, "0301-2222222", UserRole::Passenger, "secret"),
        }
    }

    #[tokio::test]
    async fn first_user_gets_id_one() {
        let handler = RegisterUserHandler::new(Arc::new(InMemoryUsers::new()));

        let user = handler.handle(details("ali@example.com")).await.unwrap();

        assert_eq!(user.id.as_str(), "1");
        assert_eq!(user.name, "Ali Raza");
    }

    #[tokio::test]
    async fn id_follows_highest_existing() {
        let users = InMemoryUsers::with(vec![
            passenger(100, "admin@railsafar.com"),
            passenger(101, "sarah.khan@example.com"),
        ]);
        let handler = RegisterUserHandler::new(Arc::new(users));

        let user = handler.handle(details("ali@example.com")).await.unwrap();
        assert_eq!(user.id.as_str(), "102");
    }

    #[tokio::test]
    async fn duplicate_email_in_any_case_is_rejected() {
        let handler = RegisterUserHandler::new(Arc::new(InMemoryUsers::new()));
        handler.handle(details("ali@example.com")).await.unwrap();

        let err = handler.handle(details("ALI@Example.com")).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::EmailTaken);
    }

    #[tokio::test]
    async fn blank_email_is_a_validation_error() {
        let handler = RegisterUserHandler::new(Arc::new(InMemoryUsers::new()));

        let err = handler.handle(details("  ")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
