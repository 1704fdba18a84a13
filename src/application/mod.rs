//! Application layer: use cases over the rental domain
//!
//! - `booking`: the single writer of users, items and bookings
//! - `query`: read-only projections for the transport layer

pub mod booking;
pub mod query;

pub use booking::{BookingService, RentalStats, SharedBookingService};
pub use query::QuerySurface;
