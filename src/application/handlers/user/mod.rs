//! User account handlers: login, registration and profile edits.

mod authenticate;
mod register_user;
mod update_user;

pub use authenticate::{AuthenticateCommand, AuthenticateHandler};
pub use register_user::{RegisterUserCommand, RegisterUserHandler};
pub use update_user::{UpdateUserCommand, UpdateUserHandler};
