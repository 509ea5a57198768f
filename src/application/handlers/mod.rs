//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations over the
//! repository ports. None of them serialize writes on their own; that is the
//! job of [`crate::application::RailwayService`].

pub mod booking;
pub mod train;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use booking::*;
pub use train::*;
pub use user::*;
