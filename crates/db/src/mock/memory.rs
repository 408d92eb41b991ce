//! In-memory backends that honour the same contracts as the Postgres ones:
//! all-or-nothing batch inserts, idempotent deletes and exclusive
//! reservations. Each operation runs under one mutex and never awaits while
//! holding it.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use eyre::{Result, eyre};
use padelbook_core::models::business::{
    Business, Court, CourtUpdate, NewBusiness, NewCourt, ResourceRef,
};
use padelbook_core::models::slot::{Slot, SlotRecord, SlotScope};
use padelbook_core::reservation;
use padelbook_core::store::{AvailabilityStore, BusinessDirectory, StoreError, StoreResult};
use uuid::Uuid;

type SlotKey = (SlotScope, u8);

#[derive(Default)]
struct SlotTable {
    next_id: i64,
    slots: HashMap<SlotKey, SlotRecord>,
}

#[derive(Default)]
pub struct MemoryAvailabilityStore {
    table: Mutex<SlotTable>,
}

impl MemoryAvailabilityStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self) -> StoreResult<MutexGuard<'_, SlotTable>> {
        self.table
            .lock()
            .map_err(|_| StoreError::Backend(eyre!("availability table lock poisoned")))
    }
}

#[async_trait]
impl AvailabilityStore for MemoryAvailabilityStore {
    async fn create_many(&self, slots: Vec<Slot>) -> StoreResult<Vec<SlotRecord>> {
        let mut table = self.table()?;

        let mut batch_keys = Vec::with_capacity(slots.len());
        for slot in &slots {
            let key = (slot.scope(), slot.hour);
            if table.slots.contains_key(&key) || batch_keys.contains(&key) {
                return Err(StoreError::DuplicateSlot);
            }
            batch_keys.push(key);
        }

        let mut created = Vec::with_capacity(slots.len());
        for (key, slot) in batch_keys.into_iter().zip(slots) {
            table.next_id += 1;
            let record = SlotRecord {
                id: table.next_id,
                slot,
            };
            table.slots.insert(key, record.clone());
            created.push(record);
        }
        Ok(created)
    }

    async fn list(&self, scope: &SlotScope) -> StoreResult<Vec<Slot>> {
        let table = self.table()?;
        let mut slots: Vec<Slot> = table
            .slots
            .iter()
            .filter(|((slot_scope, _), _)| slot_scope == scope)
            .map(|(_, record)| record.slot.clone())
            .collect();
        slots.sort_by_key(|slot| slot.hour);
        Ok(slots)
    }

    async fn get(&self, scope: &SlotScope, hour: u8) -> StoreResult<Slot> {
        let table = self.table()?;
        table
            .slots
            .get(&(*scope, hour))
            .map(|record| record.slot.clone())
            .ok_or(StoreError::NotFound)
    }

    async fn delete_all(&self, scope: &SlotScope) -> StoreResult<()> {
        let mut table = self.table()?;
        table.slots.retain(|(slot_scope, _), _| slot_scope != scope);
        Ok(())
    }

    async fn reserve_atomic(&self, scope: &SlotScope, hour: u8) -> StoreResult<Slot> {
        let mut table = self.table()?;
        let record = table
            .slots
            .get_mut(&(*scope, hour))
            .ok_or(StoreError::NotFound)?;
        reservation::reserve(&mut record.slot)?;
        Ok(record.slot.clone())
    }
}

#[derive(Default)]
struct DirectoryTables {
    businesses: HashMap<Uuid, Business>,
    courts: HashMap<Uuid, Court>,
}

#[derive(Default)]
pub struct MemoryDirectory {
    tables: Mutex<DirectoryTables>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> Result<MutexGuard<'_, DirectoryTables>> {
        self.tables
            .lock()
            .map_err(|_| eyre!("directory lock poisoned"))
    }
}

#[async_trait]
impl BusinessDirectory for MemoryDirectory {
    async fn get_business(&self, business_id: Uuid) -> Result<Option<Business>> {
        Ok(self.tables()?.businesses.get(&business_id).cloned())
    }

    async fn get_resource(
        &self,
        resource: &ResourceRef,
        business_id: Uuid,
    ) -> Result<Option<Court>> {
        let tables = self.tables()?;
        let court = tables
            .courts
            .values()
            .find(|court| court.business_id == business_id && resource.matches(court))
            .cloned();
        Ok(court)
    }

    async fn create_business(&self, owner_id: Uuid, business: NewBusiness) -> Result<Business> {
        let created = Business {
            id: Uuid::new_v4(),
            owner_id,
            name: business.name,
            location: business.location,
            created_at: Utc::now(),
        };
        self.tables()?
            .businesses
            .insert(created.id, created.clone());
        Ok(created)
    }

    async fn list_courts(&self, business_id: Uuid) -> Result<Vec<Court>> {
        let mut courts: Vec<Court> = self
            .tables()?
            .courts
            .values()
            .filter(|court| court.business_id == business_id)
            .cloned()
            .collect();
        courts.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(courts)
    }

    async fn create_court(&self, business_id: Uuid, court: NewCourt) -> Result<Option<Court>> {
        let mut tables = self.tables()?;
        if !tables.businesses.contains_key(&business_id) {
            return Err(eyre!("business {} does not exist", business_id));
        }
        let taken = tables
            .courts
            .values()
            .any(|existing| existing.business_id == business_id && existing.name == court.name);
        if taken {
            return Ok(None);
        }

        let created = Court {
            id: Uuid::new_v4(),
            business_id,
            name: court.name,
            created_at: Utc::now(),
        };
        tables.courts.insert(created.id, created.clone());
        Ok(Some(created))
    }

    async fn update_court(&self, court_id: Uuid, update: CourtUpdate) -> Result<Option<Court>> {
        let mut tables = self.tables()?;
        let business_id = tables
            .courts
            .get(&court_id)
            .map(|court| court.business_id)
            .ok_or_else(|| eyre!("court {} does not exist", court_id))?;
        let taken = tables.courts.values().any(|other| {
            other.id != court_id && other.business_id == business_id && other.name == update.name
        });
        if taken {
            return Ok(None);
        }

        let Some(court) = tables.courts.get_mut(&court_id) else {
            return Err(eyre!("court {} does not exist", court_id));
        };
        court.name = update.name;
        Ok(Some(court.clone()))
    }
}
