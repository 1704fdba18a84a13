//! Booking module: creation and ledger queries

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
