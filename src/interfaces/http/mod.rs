//! HTTP REST API interfaces
//!
//! - `common`: response envelope, error mapping, JSON validation, dates
//! - `modules`: handlers and DTOs per resource
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use router::{create_api_router, ApiDoc};
pub use state::RentalAppState;
