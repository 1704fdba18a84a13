//! Core rental entities and the rules that relate them.

pub mod availability;
pub mod booking;
pub mod item;
pub mod store;
pub mod user;

pub use availability::Availability;
pub use booking::{Booking, BookingId, DateRange};
pub use item::{BookedSlot, Item, ItemId};
pub use store::EntityStore;
pub use user::{User, UserId};

// Re-export DomainError from support for convenience
pub use crate::support::errors::{DomainError, DomainResult, Entity};
