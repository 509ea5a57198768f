//! User module - accounts that sign in to the booking application.

mod aggregate;
mod password;
mod role;

pub use aggregate::{NewUser, User};
pub use password::Password;
pub use role::UserRole;
