//! Item DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::domain::{Availability, Item};

/// Item details in API responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemDto {
    pub id: u64,
    pub name: String,
    /// Category label, e.g. "Economy" or "SUV"
    pub category: String,
    /// Daily rate as a decimal string
    #[schema(value_type = String, example = "45")]
    pub rate_per_day: Decimal,
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            category: item.category,
            rate_per_day: item.rate_per_day,
        }
    }
}

/// Request to add an item to the fleet
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateItemRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub category: String,
    /// Daily rate, number or decimal string; must not be negative
    #[validate(custom(function = "non_negative_rate"))]
    #[schema(value_type = String, example = "45.00")]
    pub rate_per_day: Decimal,
}

fn non_negative_rate(rate: &Decimal) -> Result<(), ValidationError> {
    if rate.is_sign_negative() && !rate.is_zero() {
        let mut err = ValidationError::new("non_negative");
        err.message = Some("must not be negative".into());
        return Err(err);
    }
    Ok(())
}

/// Query parameters of the availability check
#[derive(Debug, Deserialize, IntoParams)]
pub struct AvailabilityParams {
    /// First day, `YYYY-MM-DD`
    pub start_date: String,
    /// Last day (inclusive), `YYYY-MM-DD`
    pub end_date: String,
}

/// Result of an availability check
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AvailabilityDto {
    pub item_id: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub available: bool,
    /// Existing bookings that overlap the requested period
    pub conflicting_booking_ids: Vec<u64>,
}

impl From<Availability> for AvailabilityDto {
    fn from(a: Availability) -> Self {
        Self {
            item_id: a.item_id,
            start_date: a.period.start(),
            end_date: a.period.end(),
            available: a.is_available(),
            conflicting_booking_ids: a.conflicts,
        }
    }
}
