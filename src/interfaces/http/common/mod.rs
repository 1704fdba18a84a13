//! Shared building blocks for HTTP handlers

pub mod dates;
pub mod error;
pub mod response;
pub mod validated_json;

pub use dates::{parse_date, DATE_FORMAT};
pub use error::ApiError;
pub use response::ApiResponse;
pub use validated_json::ValidatedJson;
