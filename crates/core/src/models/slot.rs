use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// First bookable hour of a day.
pub const FIRST_HOUR: i32 = 0;
/// Last bookable hour of a day; a slot starting here ends at midnight.
pub const LAST_HOUR: i32 = 23;
pub const HOURS_PER_DAY: i32 = LAST_HOUR + 1;

/// One reservable hour of a padel court on a date.
///
/// Identity is the natural key `(resource_id, business_id, date, hour)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub resource_id: Uuid,
    pub business_id: Uuid,
    pub date: NaiveDate,
    pub hour: u8,
    #[serde(default)]
    pub reserved: bool,
}

impl Slot {
    pub fn scope(&self) -> SlotScope {
        SlotScope {
            resource_id: self.resource_id,
            business_id: self.business_id,
            date: self.date,
        }
    }
}

/// A slot as returned by a store, carrying its storage id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRecord {
    pub id: i64,
    pub slot: Slot,
}

/// The `(resource, business, date)` tuple grouping slots for batch operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotScope {
    pub resource_id: Uuid,
    pub business_id: Uuid,
    pub date: NaiveDate,
}

impl SlotScope {
    pub fn new(resource_id: Uuid, business_id: Uuid, date: NaiveDate) -> Self {
        Self {
            resource_id,
            business_id,
            date,
        }
    }
}

/// "Publish `count` hourly slots starting at `start_hour`" for one scope.
///
/// Not persisted; expanded into slots by [`crate::factory::expand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationRequest {
    pub resource_id: Uuid,
    pub business_id: Uuid,
    pub date: NaiveDate,
    pub start_hour: i32,
    pub count: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishSlotsRequest {
    pub date: NaiveDate,
    pub start_hour: i32,
    #[serde(default = "default_count")]
    pub count: i32,
}

fn default_count() -> i32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotsResponse {
    pub data: Vec<Slot>,
    pub count: usize,
}

impl From<Vec<Slot>> for SlotsResponse {
    fn from(data: Vec<Slot>) -> Self {
        let count = data.len();
        Self { data, count }
    }
}
