//! Item aggregate
//!
//! A rentable unit plus the derived index of its booked periods.

pub mod model;

pub use model::{BookedSlot, Item, ItemId};
