//! UpdateUserHandler - Command handler for profile edits.

use std::sync::Arc;
use tracing::{info, warn};

use crate::application::{Entity, ServiceError};
use crate::domain::foundation::ValidationError;
use crate::domain::user::User;
use crate::ports::UserRepository;

/// Command to replace a stored user with new field values.
#[derive(Debug, Clone)]
pub struct UpdateUserCommand {
    pub user: User,
}

/// Handler for updating user profiles.
pub struct UpdateUserHandler {
    users: Arc<dyn UserRepository>,
}

impl UpdateUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: UpdateUserCommand) -> Result<User, ServiceError> {
        let user = cmd.user;

        if user.email.trim().is_empty() {
            return Err(ValidationError::empty_field("email").into());
        }

        if !self.users.exists(&user.id).await? {
            return Err(ServiceError::not_found(Entity::User, &user.id));
        }

        // Keeping one's own email is allowed; taking another user's is not.
        if self.users.email_exists(&user.email, Some(&user.id)).await? {
            warn!(user_id = %user.id, "Profile update rejected: email taken");
            return Err(ServiceError::email_taken(user.email));
        }

        if !self.users.update(&user).await? {
            return Err(ServiceError::not_found(Entity::User, &user.id));
        }

        info!(user_id = %user.id, "User profile updated");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::{passenger, InMemoryUsers};
    use crate::domain::foundation::{ErrorCode, Repository, UserId};

    fn two_users() -> Arc<InMemoryUsers> {
        Arc::new(InMemoryUsers::with(vec![
            passenger(101, "sarah.khan@example.com"),
            passenger(102, "ali@example.com"),
        ]))
    }

    #[tokio::test]
    async fn keeping_own_email_succeeds() {
        let users = two_users();
        let handler = UpdateUserHandler::new(users.clone());

        let mut sarah = passenger(101, "sarah.khan@example.com");
        sarah.city = Some("Multan".to_string());
        handler.handle(UpdateUserCommand { user: sarah }).await.unwrap();

        let stored = users.find_by_id(&UserId::from_sequence(101)).await.unwrap().unwrap();
        assert_eq!(stored.city.as_deref(), Some("Multan"));
    }

    #[tokio::test]
    async fn taking_another_users_email_fails() {
        let handler = UpdateUserHandler::new(two_users());

        let sarah = passenger(101, "Ali@Example.com");
        let err = handler.handle(UpdateUserCommand { user: sarah }).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::EmailTaken);
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let handler = UpdateUserHandler::new(two_users());

        let err = handler
            .handle(UpdateUserCommand {
                user: passenger(999, "new@example.com"),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::UserNotFound);
    }
}
