//! User DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::User;

/// Request to register a new user
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// Display name
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    /// Contact address
    #[validate(
        length(min = 1, message = "must not be empty"),
        email(message = "must be a valid email address")
    )]
    pub email: String,
}

/// User details in API responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: u64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}
