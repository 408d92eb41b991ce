//! # Ownership Verification
//!
//! The single gate every mutating operation passes before touching slots.
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. the business exists (`BusinessNotFound`)
//! 2. the caller owns it (`NotOwner`)
//! 3. the court exists within that business (`ResourceNotFound`)
//!
//! Later checks rely on earlier ones, so no court lookup is issued for a
//! missing business or a foreign caller.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};
use crate::models::business::{Business, Court, ResourceRef};
use crate::store::BusinessDirectory;

/// Runs all three checks and returns the verified court.
pub async fn verify(
    directory: &dyn BusinessDirectory,
    caller_id: Uuid,
    resource: &ResourceRef,
    business_id: Uuid,
) -> BookingResult<Court> {
    let business = verify_business_owner(directory, caller_id, business_id).await?;

    let court = directory
        .get_resource(resource, business.id)
        .await?
        .filter(|court| court.business_id == business.id)
        .ok_or_else(|| BookingError::ResourceNotFound(resource.to_string()))?;

    debug!(
        "Verified caller {} owns court {} of business {}",
        caller_id, court.id, business.id
    );
    Ok(court)
}

/// Steps 1 and 2 only. Used where no court exists yet, e.g. registering one.
pub async fn verify_business_owner(
    directory: &dyn BusinessDirectory,
    caller_id: Uuid,
    business_id: Uuid,
) -> BookingResult<Business> {
    let business = directory
        .get_business(business_id)
        .await?
        .ok_or(BookingError::BusinessNotFound(business_id))?;

    if !business.is_owned_by(caller_id) {
        warn!(
            "Caller {} is not the owner of business {}",
            caller_id, business_id
        );
        return Err(BookingError::NotOwner);
    }

    Ok(business)
}
