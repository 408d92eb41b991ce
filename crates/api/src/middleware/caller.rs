//! Caller identity.
//!
//! The service does not authenticate anyone; an upstream gateway is trusted to
//! pass the caller's user id. Ownership checks compare it against the
//! business owner.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use padelbook_core::errors::BookingError;
use serde::Deserialize;
use uuid::Uuid;

use super::error_handling::AppError;

/// Header carrying the caller's user id.
pub const CALLER_HEADER: &str = "x-user-id";

/// The user id of whoever issued the request.
///
/// Read from the `X-User-Id` header, falling back to the `caller_id`
/// (or `user_id`) query parameter. Missing or malformed ids are rejected
/// with 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller(pub Uuid);

#[derive(Debug, Deserialize)]
struct CallerQuery {
    #[serde(alias = "user_id")]
    caller_id: Option<String>,
}

#[async_trait]
impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = match parts.headers.get(CALLER_HEADER) {
            Some(value) => Some(
                value
                    .to_str()
                    .map_err(|_| invalid("caller id header is not valid text"))?
                    .to_string(),
            ),
            None => Query::<CallerQuery>::try_from_uri(&parts.uri)
                .map_err(|err| invalid(&err.body_text()))?
                .0
                .caller_id,
        };

        let raw = raw.ok_or_else(|| invalid("caller id is required"))?;
        let id = Uuid::parse_str(raw.trim())
            .map_err(|_| invalid(&format!("caller id '{raw}' is not a valid UUID")))?;

        Ok(Caller(id))
    }
}

fn invalid(reason: &str) -> AppError {
    AppError(BookingError::Validation(reason.to_string()))
}
