//! Application layer - Commands, Queries, and Handlers.
//!
//! Handlers orchestrate domain operations over the repository ports;
//! [`RailwayService`] bundles them behind a single write gate.

mod error;
pub mod handlers;
mod service;

pub use error::{Entity, ServiceError};
pub use service::RailwayService;
