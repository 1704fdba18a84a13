//! Booking domain entity

use std::fmt;

use chrono::NaiveDate;

use crate::domain::{ItemId, UserId};
use crate::support::{DomainError, DomainResult};

/// Identifier assigned to a [`Booking`] by the booking service
pub type BookingId = u64;

/// Closed interval of calendar dates, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting `end < start`. A single-day range is valid.
    pub fn new(start: NaiveDate, end: NaiveDate) -> DomainResult<Self> {
        if end < start {
            return Err(DomainError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Both ends are inclusive, so ranges that share a boundary day overlap:
    /// an item handed back on the 27th cannot be picked up by someone else
    /// on the 27th.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Number of calendar days covered, counting both ends.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A reservation of one item by one user. There is no update or cancel path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: BookingId,
    pub user_id: UserId,
    pub item_id: ItemId,
    pub period: DateRange,
}

impl Booking {
    pub fn new(id: BookingId, user_id: UserId, item_id: ItemId, period: DateRange) -> Self {
        Self {
            id,
            user_id,
            item_id,
            period,
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.period.start()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.period.end()
    }
}

// ── Tests ──────────────────────────────────────────────────────
