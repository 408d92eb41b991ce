use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use padelbook_core::{
    models::business::{
        Business, Court, CourtUpdate, CourtsResponse, NewBusiness, NewCourt, ResourceRef,
    },
    registration,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    ApiState,
    middleware::{caller::Caller, error_handling::AppError},
};

/// Registers a business; the caller becomes its owner.
#[axum::debug_handler]
pub async fn create_business(
    State(state): State<Arc<ApiState>>,
    Caller(caller_id): Caller,
    Json(payload): Json<NewBusiness>,
) -> Result<(StatusCode, Json<Business>), AppError> {
    let business =
        registration::register_business(state.directory.as_ref(), caller_id, payload).await?;
    Ok((StatusCode::CREATED, Json(business)))
}

#[axum::debug_handler]
pub async fn get_business(
    State(state): State<Arc<ApiState>>,
    Path(business_id): Path<Uuid>,
) -> Result<Json<Business>, AppError> {
    let business = registration::get_business(state.directory.as_ref(), business_id).await?;
    Ok(Json(business))
}

#[axum::debug_handler]
pub async fn create_court(
    State(state): State<Arc<ApiState>>,
    Path(business_id): Path<Uuid>,
    Caller(caller_id): Caller,
    Json(payload): Json<NewCourt>,
) -> Result<(StatusCode, Json<Court>), AppError> {
    let court =
        registration::register_court(state.directory.as_ref(), caller_id, business_id, payload)
            .await?;
    Ok((StatusCode::CREATED, Json(court)))
}

#[axum::debug_handler]
pub async fn get_court(
    State(state): State<Arc<ApiState>>,
    Path((business_id, court)): Path<(Uuid, ResourceRef)>,
) -> Result<Json<Court>, AppError> {
    let court = registration::get_court(state.directory.as_ref(), &court, business_id).await?;
    Ok(Json(court))
}

/// Lists the courts of a business so customers can find something to book.
#[axum::debug_handler]
pub async fn list_courts(
    State(state): State<Arc<ApiState>>,
    Path(business_id): Path<Uuid>,
) -> Result<Json<CourtsResponse>, AppError> {
    let courts = registration::list_courts(state.directory.as_ref(), business_id).await?;
    Ok(Json(CourtsResponse::from(courts)))
}

/// Updates a court addressed by id. Name references are not accepted here.
#[axum::debug_handler]
pub async fn update_court(
    State(state): State<Arc<ApiState>>,
    Path((business_id, court_id)): Path<(Uuid, Uuid)>,
    Caller(caller_id): Caller,
    Json(payload): Json<CourtUpdate>,
) -> Result<Json<Court>, AppError> {
    let court = registration::update_court(
        state.directory.as_ref(),
        caller_id,
        business_id,
        court_id,
        payload,
    )
    .await?;
    Ok(Json(court))
}
