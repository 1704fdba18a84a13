//! Booking HTTP handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::dto::{BookingDto, CreateBookingRequest};
use crate::interfaces::http::common::{parse_date, ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::state::RentalAppState;

#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    tag = "Bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created", body = ApiResponse<BookingDto>),
        (status = 400, description = "Malformed JSON or date, or end date before start date"),
        (status = 404, description = "User or item not found"),
        (status = 409, description = "Item already booked for an overlapping period")
    )
)]
pub async fn create_booking(
    State(state): State<RentalAppState>,
    ValidatedJson(request): ValidatedJson<CreateBookingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BookingDto>>), ApiError> {
    let start = parse_date("start_date", &request.start_date)?;
    let end = parse_date("end_date", &request.end_date)?;

    let booking = state
        .service
        .book_item(request.user_id, request.item_id, start, end)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(BookingDto::from(booking))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings",
    tag = "Bookings",
    responses(
        (status = 200, description = "All bookings in creation order", body = ApiResponse<Vec<BookingDto>>)
    )
)]
pub async fn list_bookings(
    State(state): State<RentalAppState>,
) -> Json<ApiResponse<Vec<BookingDto>>> {
    let bookings = state
        .queries
        .list_bookings()
        .into_iter()
        .map(BookingDto::from)
        .collect();
    Json(ApiResponse::success(bookings))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings/{id}",
    tag = "Bookings",
    params(("id" = u64, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking details", body = ApiResponse<BookingDto>),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn get_booking(
    State(state): State<RentalAppState>,
    Path(id): Path<u64>,
) -> Result<Json<ApiResponse<BookingDto>>, ApiError> {
    let booking = state.queries.get_booking(id)?;
    Ok(Json(ApiResponse::success(BookingDto::from(booking))))
}
