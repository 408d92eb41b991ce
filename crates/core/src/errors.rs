use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("The information is not acceptable. Reason: {0}")]
    InvalidRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Available match already exists")]
    DuplicateSlot,

    #[error("Resource already exists: {0}")]
    DuplicateResource(String),

    #[error("Business not found: {0}")]
    BusinessNotFound(Uuid),

    #[error("Padel court not found: {0}")]
    ResourceNotFound(String),

    #[error("Available match not found at hour {hour}")]
    SlotNotFound { hour: i32 },

    #[error("User is not the owner")]
    NotOwner,

    #[error("Padel court {0} is already reserved")]
    AlreadyReserved(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),
}

pub type BookingResult<T> = Result<T, BookingError>;
