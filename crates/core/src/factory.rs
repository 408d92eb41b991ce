//! # Slot Factory
//!
//! Expands a single [`CreationRequest`] into the hourly [`Slot`] records it
//! describes. Pure and deterministic: no store is touched here, so a rejected
//! request never leaves anything behind.

use crate::errors::{BookingError, BookingResult};
use crate::models::slot::{CreationRequest, FIRST_HOUR, HOURS_PER_DAY, LAST_HOUR, Slot};

/// Validates the request window and produces `count` contiguous slots
/// starting at `start_hour`, all unreserved.
///
/// # Errors
///
/// * `BookingError::InvalidRequest` - `count` is not positive, `start_hour` is
///   outside the day, or the run would spill past midnight
pub fn expand(request: &CreationRequest) -> BookingResult<Vec<Slot>> {
    validate(request)?;

    let slots = (request.start_hour..request.start_hour + request.count)
        .map(|hour| Slot {
            resource_id: request.resource_id,
            business_id: request.business_id,
            date: request.date,
            // validate() bounds every hour to 0..=23
            hour: hour as u8,
            reserved: false,
        })
        .collect();

    Ok(slots)
}

fn validate(request: &CreationRequest) -> BookingResult<()> {
    if request.count <= 0 {
        return Err(BookingError::InvalidRequest(
            "count must be positive".to_string(),
        ));
    }
    if !(FIRST_HOUR..=LAST_HOUR).contains(&request.start_hour) {
        return Err(BookingError::InvalidRequest(format!(
            "start_hour must be between {FIRST_HOUR} and {LAST_HOUR}"
        )));
    }
    // i64 so a huge count cannot overflow the sum
    if i64::from(request.start_hour) + i64::from(request.count) > i64::from(HOURS_PER_DAY) {
        return Err(BookingError::InvalidRequest(
            "count exceeds the hours remaining in the day".to_string(),
        ));
    }
    Ok(())
}
