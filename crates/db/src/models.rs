use chrono::{DateTime, NaiveDate, Utc};
use eyre::{Result, WrapErr};
use padelbook_core::models::business::{Business, Court};
use padelbook_core::models::slot::{Slot, SlotRecord};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBusiness {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbPadelCourt {
    pub id: Uuid,
    pub business_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAvailableMatch {
    pub id: i64,
    pub resource_id: Uuid,
    pub business_id: Uuid,
    pub date: NaiveDate,
    pub hour: i32,
    pub reserved: bool,
    pub created_at: DateTime<Utc>,
}

impl From<DbBusiness> for Business {
    fn from(row: DbBusiness) -> Self {
        Business {
            id: row.id,
            owner_id: row.owner_id,
            name: row.name,
            location: row.location,
            created_at: row.created_at,
        }
    }
}

impl From<DbPadelCourt> for Court {
    fn from(row: DbPadelCourt) -> Self {
        Court {
            id: row.id,
            business_id: row.business_id,
            name: row.name,
            created_at: row.created_at,
        }
    }
}

impl DbAvailableMatch {
    pub fn into_slot(self) -> Result<Slot> {
        let hour = u8::try_from(self.hour).wrap_err_with(|| {
            format!("available match {} has invalid hour {}", self.id, self.hour)
        })?;

        Ok(Slot {
            resource_id: self.resource_id,
            business_id: self.business_id,
            date: self.date,
            hour,
            reserved: self.reserved,
        })
    }

    pub fn into_record(self) -> Result<SlotRecord> {
        let id = self.id;
        Ok(SlotRecord {
            id,
            slot: self.into_slot()?,
        })
    }
}
