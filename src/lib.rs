//! Railway Booking - persistence and domain services for a railway
//! reservation desk.
//!
//! Passengers register, search trains by route, book seats and pay;
//! administrators maintain the fleet and its timetable. Everything lives in a
//! single SQLite database behind the repository ports.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
