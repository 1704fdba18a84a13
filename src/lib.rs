//! # Rental Service
//!
//! In-memory reservation manager for users, rentable items and
//! date-range bookings, exposed over a REST API.
//!
//! ## Architecture
//!
//! - **domain**: entities, the entity store and the availability rule
//! - **application**: the booking service (single writer) and read-only queries
//! - **interfaces**: REST API with Swagger documentation
//! - **support**: domain errors and shutdown coordination
//! - **server**: runtime wiring for the binary

pub mod application;
pub mod config;
pub mod domain;
pub mod interfaces;
pub mod server;
pub mod support;

pub use config::{default_config_path, AppConfig};

pub use application::{BookingService, QuerySurface, SharedBookingService};
pub use domain::{Booking, DomainError, DomainResult, Item, User};

// Re-export API router
pub use interfaces::http::create_api_router;
