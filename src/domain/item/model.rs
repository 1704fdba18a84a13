//! Item domain entity

use rust_decimal::Decimal;

use crate::domain::{BookingId, DateRange};

/// Identifier assigned to an [`Item`] by the entity store
pub type ItemId = u64;

/// One entry of an item's booking index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookedSlot {
    pub booking_id: BookingId,
    pub period: DateRange,
}

/// A rentable unit (e.g. a car)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Category label ("Economy", "SUV", ...)
    pub category: String,
    pub rate_per_day: Decimal,
    /// Booked periods in creation order. Only the booking service writes
    /// here; the ledger stays authoritative.
    slots: Vec<BookedSlot>,
}

impl Item {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        category: impl Into<String>,
        rate_per_day: Decimal,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            rate_per_day,
            slots: Vec::new(),
        }
    }

    pub fn booked_slots(&self) -> &[BookedSlot] {
        &self.slots
    }

    pub(crate) fn record_booking(&mut self, booking_id: BookingId, period: DateRange) {
        self.slots.push(BookedSlot { booking_id, period });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn new_item_has_no_slots() {
        let item = Item::new(1, "Peugeot 208", "Economy", Decimal::new(45, 0));
        assert!(item.booked_slots().is_empty());
        assert_eq!(item.rate_per_day, Decimal::new(45, 0));
    }

    #[test]
    fn record_booking_appends_in_order() {
        let mut item = Item::new(1, "BMW X5", "SUV", Decimal::new(120, 0));
        let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
        let first = DateRange::new(d("2025-08-25"), d("2025-08-27")).unwrap();
        let second = DateRange::new(d("2025-08-01"), d("2025-08-02")).unwrap();
        item.record_booking(1, first);
        item.record_booking(2, second);

        let ids: Vec<_> = item.booked_slots().iter().map(|s| s.booking_id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(item.booked_slots()[1].period, second);
    }
}
