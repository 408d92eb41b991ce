//! # Error Handling Middleware
//!
//! Maps booking errors to HTTP status codes and JSON error bodies so every
//! handler fails the same way.
//!
//! | Error | Status |
//! |-------|--------|
//! | `InvalidRequest` | 406 Not Acceptable |
//! | `Validation` | 400 Bad Request |
//! | `DuplicateSlot`, `DuplicateResource`, `AlreadyReserved` | 409 Conflict |
//! | `BusinessNotFound`, `ResourceNotFound`, `SlotNotFound` | 404 Not Found |
//! | `NotOwner` | 401 Unauthorized |
//! | `Database` | 500 Internal Server Error |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use padelbook_core::errors::BookingError;
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use padelbook_api::middleware::error_handling::AppError;
/// use padelbook_core::errors::BookingError;
///
/// async fn handler(count: i32) -> Result<Json<i32>, AppError> {
///     if count <= 0 {
///         return Err(BookingError::InvalidRequest("count must be positive".into()).into());
///     }
///     Ok(Json(count))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            BookingError::InvalidRequest(_) => StatusCode::NOT_ACCEPTABLE,
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::DuplicateSlot
            | BookingError::DuplicateResource(_)
            | BookingError::AlreadyReserved(_) => StatusCode::CONFLICT,
            BookingError::BusinessNotFound(_)
            | BookingError::ResourceNotFound(_)
            | BookingError::SlotNotFound { .. } => StatusCode::NOT_FOUND,
            BookingError::NotOwner => StatusCode::UNAUTHORIZED,
            BookingError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {:?}", self.0);
        }

        let body = Json(json!({ "error": self.0.to_string() }));

        (status, body).into_response()
    }
}

/// Allows `?` on `BookingResult` inside handlers
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}
