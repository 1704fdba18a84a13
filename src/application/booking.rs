//! Booking service: the single writer of rental state
//!
//! Users, items, the booking ledger and all id counters live in one
//! [`RentalState`] behind one lock. Every write holds the write guard for
//! its whole check → allocate → record sequence, so two overlapping
//! requests for the same item can never both pass the availability check.
//! Readers share the read guard and only ever see fully linked bookings.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::domain::availability::{self, Availability};
use crate::domain::{
    Booking, BookingId, DateRange, DomainError, DomainResult, Entity, EntityStore, Item, ItemId,
    User, UserId,
};

/// Shared handle used by the HTTP layer
pub type SharedBookingService = Arc<BookingService>;

/// Entity counts taken under a single read guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalStats {
    pub users: usize,
    pub items: usize,
    pub bookings: usize,
}

/// Everything the service mutates, guarded as one unit.
#[derive(Debug)]
struct RentalState {
    store: EntityStore,
    /// Authoritative record of every booking, keyed by id
    ledger: BTreeMap<BookingId, Booking>,
    next_booking_id: BookingId,
}

impl RentalState {
    fn new() -> Self {
        Self {
            store: EntityStore::new(),
            ledger: BTreeMap::new(),
            next_booking_id: 1,
        }
    }

    fn book(
        &mut self,
        user_id: UserId,
        item_id: ItemId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<Booking> {
        if self.store.get_user(user_id).is_none() {
            return Err(DomainError::not_found(Entity::User, user_id));
        }
        let item = self
            .store
            .get_item_mut(item_id)
            .ok_or(DomainError::not_found(Entity::Item, item_id))?;
        let period = DateRange::new(start, end)?;

        if !availability::is_available(item, &period) {
            return Err(DomainError::Unavailable {
                item_id,
                start,
                end,
            });
        }

        let id = self.next_booking_id;
        self.next_booking_id += 1;

        let booking = Booking::new(id, user_id, item_id, period);
        item.record_booking(id, period);
        self.ledger.insert(id, booking.clone());
        Ok(booking)
    }

    fn item(&self, id: ItemId) -> DomainResult<&Item> {
        self.store
            .get_item(id)
            .ok_or(DomainError::not_found(Entity::Item, id))
    }
}

/// Sole entry point for creating bookings and registering entities.
#[derive(Debug)]
pub struct BookingService {
    state: RwLock<RentalState>,
}

impl BookingService {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RentalState::new()),
        }
    }

    pub fn shared() -> SharedBookingService {
        Arc::new(Self::new())
    }

    /// Register a customer. Name and email are validated by the caller.
    pub fn register_user(&self, name: impl Into<String>, email: impl Into<String>) -> User {
        let user = self.state.write().store.create_user(name, email);
        info!(user_id = user.id, "User registered");
        user
    }

    /// Add an item to the fleet. The rate is validated by the caller.
    pub fn register_item(
        &self,
        name: impl Into<String>,
        category: impl Into<String>,
        rate_per_day: Decimal,
    ) -> Item {
        let item = self
            .state
            .write()
            .store
            .create_item(name, category, rate_per_day);
        info!(item_id = item.id, name = %item.name, "Item registered");
        item
    }

    /// Reserve `item_id` for `user_id` over `[start, end]`, both inclusive.
    ///
    /// Checks run in a fixed order: unknown user, unknown item, `end < start`,
    /// then overlap with an existing booking of the item.
    pub fn book_item(
        &self,
        user_id: UserId,
        item_id: ItemId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<Booking> {
        let result = self.state.write().book(user_id, item_id, start, end);

        match &result {
            Ok(booking) => {
                metrics::counter!("bookings_created_total").increment(1);
                info!(
                    booking_id = booking.id,
                    user_id,
                    item_id,
                    period = %booking.period,
                    "Booking created"
                );
            }
            Err(e) => {
                metrics::counter!("bookings_rejected_total", "reason" => e.code()).increment(1);
                debug!(user_id, item_id, %start, %end, "Booking rejected: {}", e);
            }
        }

        result
    }

    pub fn get_user(&self, id: UserId) -> DomainResult<User> {
        self.state
            .read()
            .store
            .get_user(id)
            .cloned()
            .ok_or(DomainError::not_found(Entity::User, id))
    }

    pub fn get_item(&self, id: ItemId) -> DomainResult<Item> {
        self.state.read().item(id).cloned()
    }

    pub fn get_booking(&self, id: BookingId) -> DomainResult<Booking> {
        self.state
            .read()
            .ledger
            .get(&id)
            .cloned()
            .ok_or(DomainError::not_found(Entity::Booking, id))
    }

    /// All items in insertion order
    pub fn list_items(&self) -> Vec<Item> {
        self.state.read().store.list_items()
    }

    /// The full ledger in creation order
    pub fn list_bookings(&self) -> Vec<Booking> {
        self.state.read().ledger.values().cloned().collect()
    }

    /// Bookings of one item, resolved through the ledger
    pub fn bookings_for_item(&self, item_id: ItemId) -> DomainResult<Vec<Booking>> {
        let state = self.state.read();
        let item = state.item(item_id)?;
        Ok(item
            .booked_slots()
            .iter()
            .filter_map(|slot| state.ledger.get(&slot.booking_id).cloned())
            .collect())
    }

    pub fn stats(&self) -> RentalStats {
        let state = self.state.read();
        RentalStats {
            users: state.store.user_count(),
            items: state.store.item_count(),
            bookings: state.ledger.len(),
        }
    }

    /// Read-only form of the availability step of [`book_item`](Self::book_item).
    pub fn check_availability(
        &self,
        item_id: ItemId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<Availability> {
        let state = self.state.read();
        let item = state.item(item_id)?;
        let period = DateRange::new(start, end)?;
        Ok(availability::check(item, period))
    }
}

impl Default for BookingService {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    /// Service with the demo fleet and one user
    fn seeded() -> BookingService {
        let service = BookingService::new();
        service.register_item("Peugeot 208", "Economy", Decimal::new(45, 0));
        service.register_item("BMW X5", "SUV", Decimal::new(120, 0));
        service.register_item("Tesla Model 3", "Electric", Decimal::new(150, 0));
        service.register_user("Alice", "alice@example.com");
        service
    }

    fn assert_no_overlaps(service: &BookingService) {
        let bookings = service.list_bookings();
        for (i, a) in bookings.iter().enumerate() {
            for b in &bookings[i + 1..] {
                if a.item_id == b.item_id {
                    assert!(
                        !a.period.overlaps(&b.period),
                        "bookings {} and {} overlap",
                        a.id,
                        b.id
                    );
                }
            }
        }
    }

    #[test]
    fn touching_end_date_is_rejected_and_next_day_succeeds() {
        let service = seeded();

        let first = service
            .book_item(1, 1, date("2025-08-25"), date("2025-08-27"))
            .unwrap();
        assert_eq!(first.id, 1);

        let err = service
            .book_item(1, 1, date("2025-08-27"), date("2025-08-29"))
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::Unavailable {
                item_id: 1,
                start: date("2025-08-27"),
                end: date("2025-08-29"),
            }
        );

        let third = service
            .book_item(1, 1, date("2025-08-28"), date("2025-08-30"))
            .unwrap();
        assert_eq!(third.id, 2);
        assert_no_overlaps(&service);
    }

    #[test]
    fn unknown_user_wins_over_every_other_failure() {
        let service = seeded();
        let err = service
            .book_item(99, 99, date("2025-08-27"), date("2025-08-25"))
            .unwrap_err();
        assert_eq!(err, DomainError::not_found(Entity::User, 99));
    }

    #[test]
    fn unknown_item_is_reported() {
        let service = seeded();
        let err = service
            .book_item(1, 42, date("2025-08-25"), date("2025-08-27"))
            .unwrap_err();
        assert_eq!(err, DomainError::not_found(Entity::Item, 42));
    }

    #[test]
    fn reversed_dates_are_invalid_even_for_known_entities() {
        let service = seeded();
        let err = service
            .book_item(1, 1, date("2025-08-27"), date("2025-08-25"))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidRange { .. }));
        assert!(service.list_bookings().is_empty());
    }

    #[test]
    fn rejected_booking_does_not_consume_an_id() {
        let service = seeded();
        service
            .book_item(1, 1, date("2025-08-25"), date("2025-08-27"))
            .unwrap();
        service
            .book_item(1, 1, date("2025-08-26"), date("2025-08-26"))
            .unwrap_err();
        let next = service
            .book_item(1, 2, date("2025-08-26"), date("2025-08-26"))
            .unwrap();
        assert_eq!(next.id, 2);
    }

    #[test]
    fn different_items_can_share_dates() {
        let service = seeded();
        for item_id in 1..=3 {
            service
                .book_item(1, item_id, date("2025-08-25"), date("2025-08-27"))
                .unwrap();
        }
        assert_eq!(service.list_bookings().len(), 3);
    }

    #[test]
    fn ids_are_strictly_increasing() {
        let service = seeded();
        let users: Vec<_> = (0..3)
            .map(|i| service.register_user(format!("u{i}"), "u@example.com").id)
            .collect();
        assert_eq!(users, vec![2, 3, 4]);

        let bookings: Vec<_> = (0..5)
            .map(|week| {
                let start = date("2025-01-01") + chrono::Days::new(week * 7);
                service.book_item(1, 1, start, start).unwrap().id
            })
            .collect();
        assert!(bookings.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn list_items_is_unaffected_by_bookings() {
        let service = seeded();
        let before = service.list_items();
        service
            .book_item(1, 2, date("2025-08-25"), date("2025-08-27"))
            .unwrap();
        let names: Vec<_> = service.list_items().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Peugeot 208", "BMW X5", "Tesla Model 3"]);
        assert_eq!(before.len(), 3);
    }

    #[test]
    fn listings_are_idempotent() {
        let service = seeded();
        service
            .book_item(1, 1, date("2025-08-25"), date("2025-08-27"))
            .unwrap();
        assert_eq!(service.list_items(), service.list_items());
        assert_eq!(service.list_bookings(), service.list_bookings());
    }

    #[test]
    fn booking_is_linked_into_item_index_and_ledger() {
        let service = seeded();
        let booking = service
            .book_item(1, 3, date("2025-08-25"), date("2025-08-27"))
            .unwrap();

        assert_eq!(service.get_booking(booking.id).unwrap(), booking);
        assert_eq!(service.bookings_for_item(3).unwrap(), vec![booking.clone()]);
        let slots = service.get_item(3).unwrap().booked_slots().to_vec();
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].booking_id, booking.id);
    }

    #[test]
    fn stats_count_every_entity_kind() {
        let service = seeded();
        service
            .book_item(1, 1, date("2025-08-25"), date("2025-08-27"))
            .unwrap();
        let _ = service.book_item(1, 1, date("2025-08-26"), date("2025-08-26"));
        assert_eq!(
            service.stats(),
            RentalStats {
                users: 1,
                items: 3,
                bookings: 1,
            }
        );
    }

    #[test]
    fn check_availability_reports_conflicts_without_booking() {
        let service = seeded();
        service
            .book_item(1, 1, date("2025-08-25"), date("2025-08-27"))
            .unwrap();

        let busy = service
            .check_availability(1, date("2025-08-27"), date("2025-08-28"))
            .unwrap();
        assert!(!busy.is_available());
        assert_eq!(busy.conflicts, vec![1]);

        let free = service
            .check_availability(1, date("2025-08-28"), date("2025-08-28"))
            .unwrap();
        assert!(free.is_available());
        assert_eq!(service.list_bookings().len(), 1);
    }

    #[test]
    fn lookups_of_missing_entities_fail_with_not_found() {
        let service = seeded();
        assert_eq!(
            service.get_user(9).unwrap_err(),
            DomainError::not_found(Entity::User, 9)
        );
        assert_eq!(
            service.get_booking(9).unwrap_err(),
            DomainError::not_found(Entity::Booking, 9)
        );
        assert_eq!(
            service.bookings_for_item(9).unwrap_err(),
            DomainError::not_found(Entity::Item, 9)
        );
    }

    #[test]
    fn concurrent_overlapping_requests_yield_one_booking() {
        let service = Arc::new(seeded());
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let service = Arc::clone(&service);
                thread::spawn(move || {
                    service
                        .book_item(1, 1, date("2025-08-25"), date("2025-08-27"))
                        .is_ok()
                })
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(successes, 1);
        assert_eq!(service.list_bookings().len(), 1);
    }

    #[test]
    fn concurrent_mixed_requests_never_overlap() {
        let service = Arc::new(seeded());
        let handles: Vec<_> = (0..8u64)
            .map(|worker| {
                let service = Arc::clone(&service);
                thread::spawn(move || {
                    for offset in 0..20u64 {
                        let start = date("2025-06-01") + chrono::Days::new(offset * 2 + worker % 3);
                        let end = start + chrono::Days::new(worker % 4);
                        let _ = service.book_item(1, 1 + worker % 3, start, end);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert!(!service.list_bookings().is_empty());
        assert_no_overlaps(&service);
    }
}
