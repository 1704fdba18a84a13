//! Availability checks against an item's booking index

use crate::domain::{BookingId, DateRange, Item, ItemId};

/// Outcome of checking one item for one requested period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    pub item_id: ItemId,
    pub period: DateRange,
    /// Existing bookings that collide with `period`, in booking order
    pub conflicts: Vec<BookingId>,
}

impl Availability {
    pub fn is_available(&self) -> bool {
        self.conflicts.is_empty()
    }
}

/// `true` iff no existing booking of `item` overlaps `requested`.
pub fn is_available(item: &Item, requested: &DateRange) -> bool {
    !item
        .booked_slots()
        .iter()
        .any(|slot| slot.period.overlaps(requested))
}

/// Ids of the bookings on `item` that overlap `requested`.
pub fn conflicts(item: &Item, requested: &DateRange) -> Vec<BookingId> {
    item.booked_slots()
        .iter()
        .filter(|slot| slot.period.overlaps(requested))
        .map(|slot| slot.booking_id)
        .collect()
}

/// Full availability report for `item` over `requested`.
pub fn check(item: &Item, requested: DateRange) -> Availability {
    Availability {
        item_id: item.id,
        period: requested,
        conflicts: conflicts(item, &requested),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn range(start: &str, end: &str) -> DateRange {
        let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
        DateRange::new(d(start), d(end)).unwrap()
    }

    fn booked_item() -> Item {
        let mut item = Item::new(1, "Tesla Model 3", "Electric", Decimal::new(150, 0));
        item.record_booking(1, range("2025-08-25", "2025-08-27"));
        item.record_booking(2, range("2025-09-01", "2025-09-05"));
        item
    }

    #[test]
    fn empty_item_is_always_available() {
        let item = Item::new(1, "Peugeot 208", "Economy", Decimal::new(45, 0));
        assert!(is_available(&item, &range("2025-01-01", "2025-12-31")));
    }

    #[test]
    fn shared_end_day_is_unavailable() {
        let item = booked_item();
        assert!(!is_available(&item, &range("2025-08-27", "2025-08-29")));
        assert_eq!(conflicts(&item, &range("2025-08-27", "2025-08-29")), vec![1]);
    }

    #[test]
    fn shared_start_day_is_unavailable() {
        let item = booked_item();
        assert!(!is_available(&item, &range("2025-08-20", "2025-08-25")));
    }

    #[test]
    fn gap_between_bookings_is_available() {
        let item = booked_item();
        assert!(is_available(&item, &range("2025-08-28", "2025-08-31")));
    }

    #[test]
    fn range_spanning_several_bookings_reports_all() {
        let item = booked_item();
        let report = check(&item, range("2025-08-01", "2025-09-30"));
        assert!(!report.is_available());
        assert_eq!(report.conflicts, vec![1, 2]);
        assert_eq!(report.item_id, 1);
    }
}
