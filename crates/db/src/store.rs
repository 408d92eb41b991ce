//! PostgreSQL-backed implementations of the core persistence traits.

use async_trait::async_trait;
use eyre::Result;
use padelbook_core::models::business::{
    Business, Court, CourtUpdate, NewBusiness, NewCourt, ResourceRef,
};
use padelbook_core::models::slot::{Slot, SlotRecord, SlotScope};
use padelbook_core::store::{AvailabilityStore, BusinessDirectory, StoreError, StoreResult};
use uuid::Uuid;

use crate::DbPool;
use crate::repositories::{available_match, business, padel_court};

#[derive(Clone)]
pub struct PgAvailabilityStore {
    pool: DbPool,
}

impl PgAvailabilityStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AvailabilityStore for PgAvailabilityStore {
    async fn create_many(&self, slots: Vec<Slot>) -> StoreResult<Vec<SlotRecord>> {
        let rows = available_match::create_available_matches(&self.pool, &slots).await?;
        let records = rows
            .into_iter()
            .map(|row| row.into_record())
            .collect::<Result<Vec<_>>>()?;
        Ok(records)
    }

    async fn list(&self, scope: &SlotScope) -> StoreResult<Vec<Slot>> {
        let rows = available_match::get_available_matches(&self.pool, scope).await?;
        let slots = rows
            .into_iter()
            .map(|row| row.into_slot())
            .collect::<Result<Vec<_>>>()?;
        Ok(slots)
    }

    async fn get(&self, scope: &SlotScope, hour: u8) -> StoreResult<Slot> {
        let row = available_match::get_available_match(&self.pool, scope, hour)
            .await?
            .ok_or(StoreError::NotFound)?;
        Ok(row.into_slot()?)
    }

    async fn delete_all(&self, scope: &SlotScope) -> StoreResult<()> {
        let removed = available_match::delete_available_matches(&self.pool, scope).await?;
        tracing::debug!(
            "Removed {} available matches for court {} on {}",
            removed,
            scope.resource_id,
            scope.date
        );
        Ok(())
    }

    async fn reserve_atomic(&self, scope: &SlotScope, hour: u8) -> StoreResult<Slot> {
        let row = available_match::reserve_available_match(&self.pool, scope, hour).await?;
        Ok(row.into_slot()?)
    }
}

#[derive(Clone)]
pub struct PgBusinessDirectory {
    pool: DbPool,
}

impl PgBusinessDirectory {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BusinessDirectory for PgBusinessDirectory {
    async fn get_business(&self, business_id: Uuid) -> Result<Option<Business>> {
        let business = business::get_business_by_id(&self.pool, business_id).await?;
        Ok(business.map(Business::from))
    }

    async fn get_resource(
        &self,
        resource: &ResourceRef,
        business_id: Uuid,
    ) -> Result<Option<Court>> {
        let court = match resource {
            ResourceRef::Id(id) => {
                padel_court::get_padel_court_by_id(&self.pool, *id, business_id).await?
            }
            ResourceRef::Name(name) => {
                padel_court::get_padel_court_by_name(&self.pool, name, business_id).await?
            }
        };
        Ok(court.map(Court::from))
    }

    async fn create_business(&self, owner_id: Uuid, new_business: NewBusiness) -> Result<Business> {
        let created = business::create_business(
            &self.pool,
            owner_id,
            &new_business.name,
            new_business.location.as_deref(),
        )
        .await?;
        Ok(created.into())
    }

    async fn list_courts(&self, business_id: Uuid) -> Result<Vec<Court>> {
        let courts = padel_court::get_padel_courts_by_business(&self.pool, business_id).await?;
        Ok(courts.into_iter().map(Court::from).collect())
    }

    async fn create_court(&self, business_id: Uuid, court: NewCourt) -> Result<Option<Court>> {
        let created = padel_court::create_padel_court(&self.pool, business_id, &court.name).await?;
        Ok(created.map(Court::from))
    }

    async fn update_court(&self, court_id: Uuid, update: CourtUpdate) -> Result<Option<Court>> {
        let updated = padel_court::update_padel_court(&self.pool, court_id, &update.name).await?;
        Ok(updated.map(Court::from))
    }
}
