use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

/// Kind of entity a lookup failed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    User,
    Item,
    Booking,
}

impl Entity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Item => "item",
            Self::Booking => "booking",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Caller-caused failures of the booking core.
///
/// None of these are transient: repeating the call with the same arguments
/// fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with id={id}")]
    NotFound { entity: Entity, id: u64 },

    #[error("Invalid range: end date {end} is before start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Item {item_id} is not available from {start} to {end}")]
    Unavailable {
        item_id: u64,
        start: NaiveDate,
        end: NaiveDate,
    },
}

impl DomainError {
    pub fn not_found(entity: Entity, id: u64) -> Self {
        Self::NotFound { entity, id }
    }

    /// Stable machine-readable name, used for metric labels and API error codes.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound {
                entity: Entity::User,
                ..
            } => "user_not_found",
            Self::NotFound {
                entity: Entity::Item,
                ..
            } => "item_not_found",
            Self::NotFound {
                entity: Entity::Booking,
                ..
            } => "booking_not_found",
            Self::InvalidRange { .. } => "invalid_range",
            Self::Unavailable { .. } => "unavailable",
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
