//! Item HTTP handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use super::dto::{AvailabilityDto, AvailabilityParams, CreateItemRequest, ItemDto};
use crate::interfaces::http::common::{parse_date, ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::modules::bookings::BookingDto;
use crate::interfaces::http::state::RentalAppState;

#[utoipa::path(
    get,
    path = "/api/v1/items",
    tag = "Items",
    responses(
        (status = 200, description = "All items in registration order", body = ApiResponse<Vec<ItemDto>>)
    )
)]
pub async fn list_items(State(state): State<RentalAppState>) -> Json<ApiResponse<Vec<ItemDto>>> {
    let items = state
        .queries
        .list_items()
        .into_iter()
        .map(ItemDto::from)
        .collect();
    Json(ApiResponse::success(items))
}

#[utoipa::path(
    post,
    path = "/api/v1/items",
    tag = "Items",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item registered", body = ApiResponse<ItemDto>),
        (status = 400, description = "Malformed JSON"),
        (status = 422, description = "Empty name/category or negative rate")
    )
)]
pub async fn create_item(
    State(state): State<RentalAppState>,
    ValidatedJson(request): ValidatedJson<CreateItemRequest>,
) -> (StatusCode, Json<ApiResponse<ItemDto>>) {
    let item = state
        .service
        .register_item(request.name, request.category, request.rate_per_day);
    (
        StatusCode::CREATED,
        Json(ApiResponse::success(ItemDto::from(item))),
    )
}

#[utoipa::path(
    get,
    path = "/api/v1/items/{id}",
    tag = "Items",
    params(("id" = u64, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Item details", body = ApiResponse<ItemDto>),
        (status = 404, description = "Item not found")
    )
)]
pub async fn get_item(
    State(state): State<RentalAppState>,
    Path(id): Path<u64>,
) -> Result<Json<ApiResponse<ItemDto>>, ApiError> {
    let item = state.queries.get_item(id)?;
    Ok(Json(ApiResponse::success(ItemDto::from(item))))
}

#[utoipa::path(
    get,
    path = "/api/v1/items/{id}/availability",
    tag = "Items",
    params(("id" = u64, Path, description = "Item ID"), AvailabilityParams),
    responses(
        (status = 200, description = "Availability of the item", body = ApiResponse<AvailabilityDto>),
        (status = 400, description = "Malformed date or end before start"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn check_availability(
    State(state): State<RentalAppState>,
    Path(id): Path<u64>,
    Query(params): Query<AvailabilityParams>,
) -> Result<Json<ApiResponse<AvailabilityDto>>, ApiError> {
    let start = parse_date("start_date", &params.start_date)?;
    let end = parse_date("end_date", &params.end_date)?;
    let availability = state.queries.check_availability(id, start, end)?;
    Ok(Json(ApiResponse::success(AvailabilityDto::from(
        availability,
    ))))
}

#[utoipa::path(
    get,
    path = "/api/v1/items/{id}/bookings",
    tag = "Items",
    params(("id" = u64, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Bookings of the item", body = ApiResponse<Vec<BookingDto>>),
        (status = 404, description = "Item not found")
    )
)]
pub async fn list_item_bookings(
    State(state): State<RentalAppState>,
    Path(id): Path<u64>,
) -> Result<Json<ApiResponse<Vec<BookingDto>>>, ApiError> {
    let bookings = state
        .queries
        .bookings_for_item(id)?
        .into_iter()
        .map(BookingDto::from)
        .collect();
    Ok(Json(ApiResponse::success(bookings)))
}
