//! # Booking Service
//!
//! Use cases over available matches. Each operation takes its store and
//! directory explicitly; nothing is held between calls.
//!
//! | Operation | Ownership check |
//! |-----------|-----------------|
//! | [`create_slots`] | yes |
//! | [`list_slots`] | no, availability is public |
//! | [`reserve`] | no, customers book open slots |
//! | [`delete_slots`] | yes |

use chrono::NaiveDate;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};
use crate::factory;
use crate::models::business::ResourceRef;
use crate::models::slot::{
    CreationRequest, FIRST_HOUR, LAST_HOUR, PublishSlotsRequest, Slot, SlotScope,
};
use crate::store::{AvailabilityStore, BusinessDirectory, StoreError};
use crate::verification;

/// Publishes `window.count` hourly slots for a court the caller owns.
///
/// # Errors
///
/// * `BusinessNotFound`, `NotOwner`, `ResourceNotFound` - ownership check failed
/// * `InvalidRequest` - the window is empty or spills past midnight
/// * `DuplicateSlot` - some hour already exists; nothing was inserted
pub async fn create_slots(
    store: &dyn AvailabilityStore,
    directory: &dyn BusinessDirectory,
    caller_id: Uuid,
    resource: &ResourceRef,
    business_id: Uuid,
    window: &PublishSlotsRequest,
) -> BookingResult<Vec<Slot>> {
    let court = verification::verify(directory, caller_id, resource, business_id).await?;

    let request = CreationRequest {
        resource_id: court.id,
        business_id,
        date: window.date,
        start_hour: window.start_hour,
        count: window.count,
    };
    let slots = factory::expand(&request)?;

    let records = store
        .create_many(slots)
        .await
        .map_err(|err| translate(err, resource, request.start_hour))?;

    info!(
        "Published {} available matches for court {} on {} from hour {}",
        records.len(),
        court.id,
        request.date,
        request.start_hour
    );
    Ok(records.into_iter().map(|record| record.slot).collect())
}

/// Lists every slot of the scope. An unknown court name lists nothing.
pub async fn list_slots(
    store: &dyn AvailabilityStore,
    directory: &dyn BusinessDirectory,
    resource: &ResourceRef,
    business_id: Uuid,
    date: NaiveDate,
) -> BookingResult<Vec<Slot>> {
    let Some(resource_id) = resolve_resource_id(directory, resource, business_id).await? else {
        debug!("No court {} in business {}, nothing to list", resource, business_id);
        return Ok(Vec::new());
    };

    let scope = SlotScope::new(resource_id, business_id, date);
    store
        .list(&scope)
        .await
        .map_err(|err| translate(err, resource, FIRST_HOUR))
}

/// Reserves the slot starting at `hour`.
///
/// # Errors
///
/// * `InvalidRequest` - `hour` is outside the day
/// * `SlotNotFound` - nothing was published at that hour
/// * `AlreadyReserved` - someone else got there first
pub async fn reserve(
    store: &dyn AvailabilityStore,
    directory: &dyn BusinessDirectory,
    resource: &ResourceRef,
    business_id: Uuid,
    date: NaiveDate,
    hour: i32,
) -> BookingResult<Slot> {
    if !(FIRST_HOUR..=LAST_HOUR).contains(&hour) {
        return Err(BookingError::InvalidRequest(format!(
            "hour must be between {FIRST_HOUR} and {LAST_HOUR}"
        )));
    }

    let resource_id = resolve_resource_id(directory, resource, business_id)
        .await?
        .ok_or(BookingError::SlotNotFound { hour })?;

    let scope = SlotScope::new(resource_id, business_id, date);
    let slot = store
        .reserve_atomic(&scope, hour as u8)
        .await
        .map_err(|err| translate(err, resource, hour))?;

    info!("Reserved court {} on {} at hour {}", resource_id, date, hour);
    Ok(slot)
}

/// Removes every slot of the scope, reserved or not.
pub async fn delete_slots(
    store: &dyn AvailabilityStore,
    directory: &dyn BusinessDirectory,
    caller_id: Uuid,
    resource: &ResourceRef,
    business_id: Uuid,
    date: NaiveDate,
) -> BookingResult<()> {
    let court = verification::verify(directory, caller_id, resource, business_id).await?;

    let scope = SlotScope::new(court.id, business_id, date);
    store
        .delete_all(&scope)
        .await
        .map_err(|err| translate(err, resource, FIRST_HOUR))?;

    info!("Deleted available matches for court {} on {}", court.id, date);
    Ok(())
}

async fn resolve_resource_id(
    directory: &dyn BusinessDirectory,
    resource: &ResourceRef,
    business_id: Uuid,
) -> BookingResult<Option<Uuid>> {
    match resource {
        // slots are keyed by business too, so a foreign id simply matches nothing
        ResourceRef::Id(id) => Ok(Some(*id)),
        ResourceRef::Name(_) => Ok(directory
            .get_resource(resource, business_id)
            .await?
            .map(|court| court.id)),
    }
}

fn translate(err: StoreError, resource: &ResourceRef, hour: i32) -> BookingError {
    match err {
        StoreError::DuplicateSlot => BookingError::DuplicateSlot,
        StoreError::NotFound => BookingError::SlotNotFound { hour },
        StoreError::AlreadyReserved => BookingError::AlreadyReserved(resource.to_string()),
        StoreError::Backend(report) => BookingError::Database(report),
    }
}
