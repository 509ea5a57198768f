//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, base traits)
//! - `user` - Accounts, roles and credentials
//! - `train` - Trains, schedules and route handling
//! - `booking` - Ticket reservations, payment lifecycle and history

pub mod booking;
pub mod foundation;
pub mod train;
pub mod user;
