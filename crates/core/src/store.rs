//! Persistence seams consumed by the booking core.
//!
//! [`AvailabilityStore`] owns the slots; [`BusinessDirectory`] answers
//! ownership questions about businesses and their courts. Every call may
//! suspend on I/O.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::business::{Business, Court, CourtUpdate, NewBusiness, NewCourt, ResourceRef};
use crate::models::slot::{Slot, SlotRecord, SlotScope};

/// Outcomes a store reports besides success.
///
/// Conflicts are ordinary results here; only `Backend` is an actual failure.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("slot collides with an existing (resource, business, date, hour)")]
    DuplicateSlot,

    #[error("no slot at that key")]
    NotFound,

    #[error("slot is already reserved")]
    AlreadyReserved,

    #[error("store backend error: {0}")]
    Backend(#[from] eyre::Report),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait AvailabilityStore: Send + Sync {
    /// Inserts every slot or none of them.
    ///
    /// Any collision with an existing natural key rejects the whole batch with
    /// `StoreError::DuplicateSlot`.
    async fn create_many(&self, slots: Vec<Slot>) -> StoreResult<Vec<SlotRecord>>;

    /// All slots in the scope, in no particular order.
    async fn list(&self, scope: &SlotScope) -> StoreResult<Vec<Slot>>;

    async fn get(&self, scope: &SlotScope, hour: u8) -> StoreResult<Slot>;

    /// Removes every slot in the scope regardless of reservation. Deleting an
    /// empty scope succeeds.
    async fn delete_all(&self, scope: &SlotScope) -> StoreResult<()>;

    /// Flips one slot from available to reserved inside a single atomic unit of
    /// work. Of any number of concurrent callers on the same key, at most one
    /// succeeds; the rest observe `StoreError::AlreadyReserved`.
    async fn reserve_atomic(&self, scope: &SlotScope, hour: u8) -> StoreResult<Slot>;
}

#[async_trait]
pub trait BusinessDirectory: Send + Sync {
    async fn get_business(&self, business_id: Uuid) -> eyre::Result<Option<Business>>;

    /// Looks a court up by id or name, restricted to `business_id`.
    async fn get_resource(
        &self,
        resource: &ResourceRef,
        business_id: Uuid,
    ) -> eyre::Result<Option<Court>>;

    async fn create_business(&self, owner_id: Uuid, business: NewBusiness)
    -> eyre::Result<Business>;

    /// Every court of the business, ordered by name.
    async fn list_courts(&self, business_id: Uuid) -> eyre::Result<Vec<Court>>;

    /// Returns `Ok(None)` when the business already has a court by that name.
    async fn create_court(&self, business_id: Uuid, court: NewCourt)
    -> eyre::Result<Option<Court>>;

    /// Applies `update` to an existing court. Returns `Ok(None)` when another
    /// court of the same business already has the new name.
    async fn update_court(&self, court_id: Uuid, update: CourtUpdate)
    -> eyre::Result<Option<Court>>;
}
