//! Business and court registration, the directory side of the service.

use tracing::info;
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};
use crate::models::business::{Business, Court, CourtUpdate, NewBusiness, NewCourt, ResourceRef};
use crate::store::BusinessDirectory;
use crate::verification;

const MAX_NAME_LEN: usize = 255;

/// Registers a business owned by the caller.
pub async fn register_business(
    directory: &dyn BusinessDirectory,
    caller_id: Uuid,
    business: NewBusiness,
) -> BookingResult<Business> {
    let business = NewBusiness {
        name: normalize_name("business name", &business.name)?,
        location: business
            .location
            .as_deref()
            .map(|location| normalize_name("location", location))
            .transpose()?,
    };

    let created = directory.create_business(caller_id, business).await?;
    info!("Registered business {} for owner {}", created.id, caller_id);
    Ok(created)
}

/// Adds a court to a business the caller owns.
///
/// # Errors
///
/// * `BusinessNotFound`, `NotOwner` - ownership check failed
/// * `DuplicateResource` - the business already has a court with that name
pub async fn register_court(
    directory: &dyn BusinessDirectory,
    caller_id: Uuid,
    business_id: Uuid,
    court: NewCourt,
) -> BookingResult<Court> {
    let court = NewCourt {
        name: normalize_court_name(&court.name)?,
    };

    let business = verification::verify_business_owner(directory, caller_id, business_id).await?;

    let name = court.name.clone();
    let created = directory
        .create_court(business.id, court)
        .await?
        .ok_or(BookingError::DuplicateResource(name))?;

    info!("Registered court {} in business {}", created.id, business.id);
    Ok(created)
}

/// Renames a court of a business the caller owns. The court is addressed by id.
///
/// # Errors
///
/// * `BusinessNotFound`, `NotOwner`, `ResourceNotFound` - ownership check failed
/// * `DuplicateResource` - another court of the business already has that name
pub async fn update_court(
    directory: &dyn BusinessDirectory,
    caller_id: Uuid,
    business_id: Uuid,
    court_id: Uuid,
    update: CourtUpdate,
) -> BookingResult<Court> {
    let update = CourtUpdate {
        name: normalize_court_name(&update.name)?,
    };

    let court =
        verification::verify(directory, caller_id, &ResourceRef::Id(court_id), business_id).await?;

    let name = update.name.clone();
    let updated = directory
        .update_court(court.id, update)
        .await?
        .ok_or(BookingError::DuplicateResource(name))?;

    info!("Updated court {} in business {}", updated.id, business_id);
    Ok(updated)
}

/// Courts of an existing business. Anyone may list them.
pub async fn list_courts(
    directory: &dyn BusinessDirectory,
    business_id: Uuid,
) -> BookingResult<Vec<Court>> {
    let business = get_business(directory, business_id).await?;
    Ok(directory.list_courts(business.id).await?)
}

pub async fn get_business(
    directory: &dyn BusinessDirectory,
    business_id: Uuid,
) -> BookingResult<Business> {
    directory
        .get_business(business_id)
        .await?
        .ok_or(BookingError::BusinessNotFound(business_id))
}

pub async fn get_court(
    directory: &dyn BusinessDirectory,
    resource: &ResourceRef,
    business_id: Uuid,
) -> BookingResult<Court> {
    directory
        .get_resource(resource, business_id)
        .await?
        .ok_or_else(|| BookingError::ResourceNotFound(resource.to_string()))
}

/// Trims `value` and checks the trimmed length, returning what gets stored.
fn normalize_name(field: &str, value: &str) -> BookingResult<String> {
    let trimmed = value.trim();
    let len = trimmed.chars().count();
    if len == 0 || len > MAX_NAME_LEN {
        return Err(BookingError::Validation(format!(
            "{field} must be between 1 and {MAX_NAME_LEN} characters"
        )));
    }
    Ok(trimmed.to_string())
}

fn normalize_court_name(value: &str) -> BookingResult<String> {
    let name = normalize_name("court name", value)?;
    // an id-shaped name could never be looked up by name
    if Uuid::parse_str(&name).is_ok() {
        return Err(BookingError::Validation(
            "court name must not be a UUID".to_string(),
        ));
    }
    Ok(name)
}
