use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use padelbook_core::{
    booking,
    models::{
        business::ResourceRef,
        slot::{PublishSlotsRequest, Slot, SlotsResponse},
    },
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    ApiState,
    middleware::{caller::Caller, error_handling::AppError},
};

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct ReserveQuery {
    pub date: NaiveDate,
    pub hour: i32,
}

/// Publishes consecutive hourly slots for a court the caller owns.
#[axum::debug_handler]
pub async fn create_available_matches(
    State(state): State<Arc<ApiState>>,
    Path((business_id, court)): Path<(Uuid, ResourceRef)>,
    Caller(caller_id): Caller,
    Json(payload): Json<PublishSlotsRequest>,
) -> Result<(StatusCode, Json<SlotsResponse>), AppError> {
    let slots = booking::create_slots(
        state.store.as_ref(),
        state.directory.as_ref(),
        caller_id,
        &court,
        business_id,
        &payload,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(SlotsResponse::from(slots))))
}

#[axum::debug_handler]
pub async fn list_available_matches(
    State(state): State<Arc<ApiState>>,
    Path((business_id, court)): Path<(Uuid, ResourceRef)>,
    Query(query): Query<DateQuery>,
) -> Result<Json<SlotsResponse>, AppError> {
    let slots = booking::list_slots(
        state.store.as_ref(),
        state.directory.as_ref(),
        &court,
        business_id,
        query.date,
    )
    .await?;

    Ok(Json(SlotsResponse::from(slots)))
}

/// Reserves the slot at `hour`. Any caller may book; no identity is needed.
#[axum::debug_handler]
pub async fn reserve_available_match(
    State(state): State<Arc<ApiState>>,
    Path((business_id, court)): Path<(Uuid, ResourceRef)>,
    Query(query): Query<ReserveQuery>,
) -> Result<Json<Slot>, AppError> {
    let slot = booking::reserve(
        state.store.as_ref(),
        state.directory.as_ref(),
        &court,
        business_id,
        query.date,
        query.hour,
    )
    .await?;

    Ok(Json(slot))
}

#[axum::debug_handler]
pub async fn delete_available_matches(
    State(state): State<Arc<ApiState>>,
    Path((business_id, court)): Path<(Uuid, ResourceRef)>,
    Caller(caller_id): Caller,
    Query(query): Query<DateQuery>,
) -> Result<StatusCode, AppError> {
    booking::delete_slots(
        state.store.as_ref(),
        state.directory.as_ref(),
        caller_id,
        &court,
        business_id,
        query.date,
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}
