//! User HTTP handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::dto::{CreateUserRequest, UserDto};
use crate::interfaces::http::common::{ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::state::RentalAppState;

#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User registered", body = ApiResponse<UserDto>),
        (status = 400, description = "Malformed JSON"),
        (status = 422, description = "Empty name or invalid email")
    )
)]
pub async fn register_user(
    State(state): State<RentalAppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> (StatusCode, Json<ApiResponse<UserDto>>) {
    let user = state.service.register_user(request.name, request.email);
    (
        StatusCode::CREATED,
        Json(ApiResponse::success(UserDto::from(user))),
    )
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(("id" = u64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = ApiResponse<UserDto>),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<RentalAppState>,
    Path(id): Path<u64>,
) -> Result<Json<ApiResponse<UserDto>>, ApiError> {
    let user = state.queries.get_user(id)?;
    Ok(Json(ApiResponse::success(UserDto::from(user))))
}
