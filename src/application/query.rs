//! Read-only projections of rental state
//!
//! Thin delegation to [`BookingService`]; no business logic lives here.

use chrono::NaiveDate;

use crate::application::booking::{RentalStats, SharedBookingService};
use crate::domain::{Availability, Booking, BookingId, DomainResult, Item, ItemId, User, UserId};

#[derive(Clone)]
pub struct QuerySurface {
    service: SharedBookingService,
}

impl QuerySurface {
    pub fn new(service: SharedBookingService) -> Self {
        Self { service }
    }

    pub fn list_items(&self) -> Vec<Item> {
        self.service.list_items()
    }

    pub fn list_bookings(&self) -> Vec<Booking> {
        self.service.list_bookings()
    }

    pub fn get_user(&self, id: UserId) -> DomainResult<User> {
        self.service.get_user(id)
    }

    pub fn get_item(&self, id: ItemId) -> DomainResult<Item> {
        self.service.get_item(id)
    }

    pub fn get_booking(&self, id: BookingId) -> DomainResult<Booking> {
        self.service.get_booking(id)
    }

    pub fn bookings_for_item(&self, item_id: ItemId) -> DomainResult<Vec<Booking>> {
        self.service.bookings_for_item(item_id)
    }

    pub fn stats(&self) -> RentalStats {
        self.service.stats()
    }

    pub fn check_availability(
        &self,
        item_id: ItemId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<Availability> {
        self.service.check_availability(item_id, start, end)
    }
}
