//! Booking DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Booking;

/// Request to book an item for an inclusive date range
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookingRequest {
    pub user_id: u64,
    /// Item to reserve (`car_id` is accepted as an alias)
    #[serde(alias = "car_id")]
    pub item_id: u64,
    /// First day, `YYYY-MM-DD`
    #[schema(example = "2025-08-25")]
    pub start_date: String,
    /// Last day (inclusive), `YYYY-MM-DD`
    #[schema(example = "2025-08-27")]
    pub end_date: String,
}

/// Booking details in API responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingDto {
    pub id: u64,
    pub user_id: u64,
    pub item_id: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<Booking> for BookingDto {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            user_id: b.user_id,
            item_id: b.item_id,
            start_date: b.start_date(),
            end_date: b.end_date(),
        }
    }
}
