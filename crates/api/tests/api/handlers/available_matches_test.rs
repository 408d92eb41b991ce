use axum::http::StatusCode;
use padelbook_core::models::slot::{Slot, SlotsResponse};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::test_utils::{DATE, TestContext, as_user, slots_path};

#[tokio::test]
async fn test_publish_reserve_and_clear_a_day() {
    let ctx = TestContext::new();
    let (business, court) = ctx.with_court("court-1").await;
    let path = slots_path(business.id, &court.name);

    // Publish 05:00 through 09:00
    let response = as_user(
        ctx.server
            .post(&path)
            .json(&json!({ "date": DATE, "start_hour": 5, "count": 5 })),
        ctx.owner_id,
    )
    .await;
    response.assert_status(StatusCode::CREATED);
    let created: SlotsResponse = response.json();
    assert_eq!(created.count, 5);
    assert_eq!(
        created.data.iter().map(|slot| slot.hour).collect::<Vec<_>>(),
        vec![5, 6, 7, 8, 9]
    );
    assert!(created.data.iter().all(|slot| !slot.reserved));

    // 07:00 overlaps the published window
    let response = as_user(
        ctx.server
            .post(&path)
            .json(&json!({ "date": DATE, "start_hour": 7, "count": 1 })),
        ctx.owner_id,
    )
    .await;
    response.assert_status(StatusCode::CONFLICT);

    // A customer books 07:00
    let response = ctx
        .server
        .patch(&path)
        .add_query_param("date", DATE)
        .add_query_param("hour", 7)
        .await;
    response.assert_status_ok();
    let reserved: Slot = response.json();
    assert_eq!(reserved.hour, 7);
    assert!(reserved.reserved);
    assert_eq!(reserved.resource_id, court.id);

    // Nobody gets it twice
    let response = ctx
        .server
        .patch(&path)
        .add_query_param("date", DATE)
        .add_query_param("hour", 7)
        .await;
    response.assert_status(StatusCode::CONFLICT);

    // Nothing was published at 01:00
    let response = ctx
        .server
        .patch(&path)
        .add_query_param("date", DATE)
        .add_query_param("hour", 1)
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    // The listing reflects the reservation
    let listed: SlotsResponse = ctx
        .server
        .get(&path)
        .add_query_param("date", DATE)
        .await
        .json();
    assert_eq!(listed.count, 5);
    let reserved_hours: Vec<u8> = listed
        .data
        .iter()
        .filter(|slot| slot.reserved)
        .map(|slot| slot.hour)
        .collect();
    assert_eq!(reserved_hours, vec![7]);

    // The owner clears the day, reserved slot included
    let response = as_user(
        ctx.server.delete(&path).add_query_param("date", DATE),
        ctx.owner_id,
    )
    .await;
    response.assert_status(StatusCode::NO_CONTENT);

    let listed: SlotsResponse = ctx
        .server
        .get(&path)
        .add_query_param("date", DATE)
        .await
        .json();
    assert_eq!(listed.count, 0);
    assert!(listed.data.is_empty());
}

#[tokio::test]
async fn test_court_can_be_addressed_by_id() {
    let ctx = TestContext::new();
    let (business, court) = ctx.with_court("central").await;

    let response = as_user(
        ctx.server
            .post(&slots_path(business.id, &court.id.to_string()))
            .json(&json!({ "date": DATE, "start_hour": 20, "count": 2 })),
        ctx.owner_id,
    )
    .await;
    response.assert_status(StatusCode::CREATED);

    // Same slots are visible through the court name
    let listed: SlotsResponse = ctx
        .server
        .get(&slots_path(business.id, &court.name))
        .add_query_param("date", DATE)
        .await
        .json();
    assert_eq!(listed.count, 2);
}

#[tokio::test]
async fn test_count_defaults_to_one() {
    let ctx = TestContext::new();
    let (business, court) = ctx.with_court("court-1").await;

    let response = as_user(
        ctx.server
            .post(&slots_path(business.id, &court.name))
            .json(&json!({ "date": DATE, "start_hour": 23 })),
        ctx.owner_id,
    )
    .await;

    response.assert_status(StatusCode::CREATED);
    let created: SlotsResponse = response.json();
    assert_eq!(created.count, 1);
    assert_eq!(created.data[0].hour, 23);
}

#[tokio::test]
async fn test_slot_json_has_no_storage_id() {
    let ctx = TestContext::new();
    let (business, court) = ctx.with_court("court-1").await;

    let body: Value = as_user(
        ctx.server
            .post(&slots_path(business.id, &court.name))
            .json(&json!({ "date": DATE, "start_hour": 10, "count": 1 })),
        ctx.owner_id,
    )
    .await
    .json();

    assert_eq!(
        body["data"][0],
        json!({
            "resource_id": court.id,
            "business_id": business.id,
            "date": DATE,
            "hour": 10,
            "reserved": false,
        })
    );
}

#[rstest]
#[case::zero_count(8, 0)]
#[case::negative_count(8, -3)]
#[case::past_midnight(20, 5)]
#[case::negative_start(-1, 2)]
#[case::start_after_last_hour(24, 1)]
#[tokio::test]
async fn test_invalid_window_is_not_acceptable(#[case] start_hour: i32, #[case] count: i32) {
    let ctx = TestContext::new();
    let (business, court) = ctx.with_court("court-1").await;
    let path = slots_path(business.id, &court.name);

    let response = as_user(
        ctx.server
            .post(&path)
            .json(&json!({ "date": DATE, "start_hour": start_hour, "count": count })),
        ctx.owner_id,
    )
    .await;

    response.assert_status(StatusCode::NOT_ACCEPTABLE);
    let body: Value = response.json();
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .starts_with("The information is not acceptable")
    );

    // Nothing was written
    let listed: SlotsResponse = ctx
        .server
        .get(&path)
        .add_query_param("date", DATE)
        .await
        .json();
    assert_eq!(listed.count, 0);
}

#[tokio::test]
async fn test_overlapping_batch_inserts_nothing() {
    let ctx = TestContext::new();
    let (business, court) = ctx.with_court("court-1").await;
    let path = slots_path(business.id, &court.name);

    as_user(
        ctx.server
            .post(&path)
            .json(&json!({ "date": DATE, "start_hour": 12, "count": 1 })),
        ctx.owner_id,
    )
    .await
    .assert_status(StatusCode::CREATED);

    // 10..=14 collides at 12
    as_user(
        ctx.server
            .post(&path)
            .json(&json!({ "date": DATE, "start_hour": 10, "count": 5 })),
        ctx.owner_id,
    )
    .await
    .assert_status(StatusCode::CONFLICT);

    let listed: SlotsResponse = ctx
        .server
        .get(&path)
        .add_query_param("date", DATE)
        .await
        .json();
    assert_eq!(listed.data.iter().map(|slot| slot.hour).collect::<Vec<_>>(), vec![12]);
}

#[tokio::test]
async fn test_non_owner_cannot_publish_or_delete() {
    let ctx = TestContext::new();
    let (business, court) = ctx.with_court("court-1").await;
    let path = slots_path(business.id, &court.name);
    let stranger = Uuid::new_v4();

    let response = as_user(
        ctx.server
            .post(&path)
            .json(&json!({ "date": DATE, "start_hour": 9, "count": 1 })),
        stranger,
    )
    .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body, json!({ "error": "User is not the owner" }));

    as_user(ctx.server.delete(&path).add_query_param("date", DATE), stranger)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_business_and_court_are_not_found() {
    let ctx = TestContext::new();
    let (business, _) = ctx.with_court("court-1").await;

    as_user(
        ctx.server
            .post(&slots_path(Uuid::new_v4(), "court-1"))
            .json(&json!({ "date": DATE, "start_hour": 9, "count": 1 })),
        ctx.owner_id,
    )
    .await
    .assert_status(StatusCode::NOT_FOUND);

    as_user(
        ctx.server
            .post(&slots_path(business.id, "court-9"))
            .json(&json!({ "date": DATE, "start_hour": 9, "count": 1 })),
        ctx.owner_id,
    )
    .await
    .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reads_of_unknown_court_are_empty() {
    let ctx = TestContext::new();
    let (business, _) = ctx.with_court("court-1").await;
    let path = slots_path(business.id, "court-9");

    let listed: SlotsResponse = ctx
        .server
        .get(&path)
        .add_query_param("date", DATE)
        .await
        .json();
    assert_eq!(listed.count, 0);

    ctx.server
        .patch(&path)
        .add_query_param("date", DATE)
        .add_query_param("hour", 9)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[rstest]
#[case(-1)]
#[case(24)]
#[tokio::test]
async fn test_reserve_hour_outside_day_is_not_acceptable(#[case] hour: i32) {
    let ctx = TestContext::new();
    let (business, court) = ctx.with_court("court-1").await;

    ctx.server
        .patch(&slots_path(business.id, &court.name))
        .add_query_param("date", DATE)
        .add_query_param("hour", hour)
        .await
        .assert_status(StatusCode::NOT_ACCEPTABLE);
}

#[tokio::test]
async fn test_delete_of_empty_day_succeeds() {
    let ctx = TestContext::new();
    let (business, court) = ctx.with_court("court-1").await;

    as_user(
        ctx.server
            .delete(&slots_path(business.id, &court.name))
            .add_query_param("date", DATE),
        ctx.owner_id,
    )
    .await
    .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_only_touches_the_given_date() {
    let ctx = TestContext::new();
    let (business, court) = ctx.with_court("court-1").await;
    let path = slots_path(business.id, &court.name);

    for date in [DATE, "2025-02-23"] {
        as_user(
            ctx.server
                .post(&path)
                .json(&json!({ "date": date, "start_hour": 18, "count": 2 })),
            ctx.owner_id,
        )
        .await
        .assert_status(StatusCode::CREATED);
    }

    as_user(ctx.server.delete(&path).add_query_param("date", DATE), ctx.owner_id)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let next_day: SlotsResponse = ctx
        .server
        .get(&path)
        .add_query_param("date", "2025-02-23")
        .await
        .json();
    assert_eq!(next_day.count, 2);
}

#[tokio::test]
async fn test_list_requires_a_date() {
    let ctx = TestContext::new();
    let (business, court) = ctx.with_court("court-1").await;

    ctx.server
        .get(&slots_path(business.id, &court.name))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_listing_for_unknown_business_is_empty() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .get(&slots_path(Uuid::new_v4(), "court-1"))
        .add_query_param("date", DATE)
        .await;

    response.assert_status_ok();
    let listed: SlotsResponse = response.json();
    assert_eq!(listed.count, 0);
}
