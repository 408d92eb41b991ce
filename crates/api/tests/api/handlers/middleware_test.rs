use axum::http::StatusCode;
use axum::response::IntoResponse;
use padelbook_api::middleware::error_handling::AppError;
use padelbook_core::errors::BookingError;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use uuid::Uuid;

use crate::test_utils::{DATE, TestContext, slots_path};

#[rstest]
#[case::invalid_request(
    BookingError::InvalidRequest("count must be positive".into()),
    StatusCode::NOT_ACCEPTABLE
)]
#[case::validation(
    BookingError::Validation("caller id is required".into()),
    StatusCode::BAD_REQUEST
)]
#[case::duplicate_slot(BookingError::DuplicateSlot, StatusCode::CONFLICT)]
#[case::duplicate_resource(BookingError::DuplicateResource("court-1".into()), StatusCode::CONFLICT)]
#[case::already_reserved(BookingError::AlreadyReserved("court-1".into()), StatusCode::CONFLICT)]
#[case::business_not_found(BookingError::BusinessNotFound(Uuid::nil()), StatusCode::NOT_FOUND)]
#[case::resource_not_found(BookingError::ResourceNotFound("court-1".into()), StatusCode::NOT_FOUND)]
#[case::slot_not_found(BookingError::SlotNotFound { hour: 3 }, StatusCode::NOT_FOUND)]
#[case::not_owner(BookingError::NotOwner, StatusCode::UNAUTHORIZED)]
#[case::database(
    BookingError::Database(eyre::eyre!("connection reset")),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn test_error_status_mapping(#[case] err: BookingError, #[case] expected: StatusCode) {
    assert_eq!(AppError(err).into_response().status(), expected);
}

#[test]
fn test_booking_error_converts_into_app_error() {
    let err: AppError = BookingError::from(eyre::eyre!("pool timed out")).into();
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_caller_from_query_parameter() {
    let ctx = TestContext::new();
    let (business, court) = ctx.with_court("court-1").await;

    ctx.server
        .post(&slots_path(business.id, &court.name))
        .add_query_param("caller_id", ctx.owner_id)
        .json(&json!({ "date": DATE, "start_hour": 9, "count": 1 }))
        .await
        .assert_status(StatusCode::CREATED);

    ctx.server
        .delete(&slots_path(business.id, &court.name))
        .add_query_param("date", DATE)
        .add_query_param("user_id", ctx.owner_id)
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_missing_caller_is_bad_request() {
    let ctx = TestContext::new();
    let (business, court) = ctx.with_court("court-1").await;

    let response = ctx
        .server
        .post(&slots_path(business.id, &court.name))
        .json(&json!({ "date": DATE, "start_hour": 9, "count": 1 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Validation error: caller id is required" }));
}

#[tokio::test]
async fn test_malformed_caller_is_bad_request() {
    let ctx = TestContext::new();
    let (business, court) = ctx.with_court("court-1").await;

    ctx.server
        .post(&slots_path(business.id, &court.name))
        .add_header(
            axum::http::HeaderName::from_static("x-user-id"),
            axum::http::HeaderValue::from_static("not-a-uuid"),
        )
        .json(&json!({ "date": DATE, "start_hour": 9, "count": 1 }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
