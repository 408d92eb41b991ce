use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Business {
    pub fn is_owned_by(&self, caller_id: Uuid) -> bool {
        self.owner_id == caller_id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBusiness {
    pub name: String,
    pub location: Option<String>,
}

/// A bookable padel court. Belongs to exactly one business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Court {
    pub id: Uuid,
    pub business_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCourt {
    pub name: String,
}

/// Changes an owner may make to an existing court.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourtUpdate {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourtsResponse {
    pub data: Vec<Court>,
    pub count: usize,
}

impl From<Vec<Court>> for CourtsResponse {
    fn from(data: Vec<Court>) -> Self {
        let count = data.len();
        Self { data, count }
    }
}

/// How a caller names a court: by its id or by its name within a business.
///
/// Parsed from a path segment: anything that reads as a UUID is an id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum ResourceRef {
    Id(Uuid),
    Name(String),
}

impl ResourceRef {
    pub fn matches(&self, court: &Court) -> bool {
        match self {
            ResourceRef::Id(id) => court.id == *id,
            ResourceRef::Name(name) => court.name == *name,
        }
    }
}

impl From<String> for ResourceRef {
    fn from(segment: String) -> Self {
        match Uuid::parse_str(&segment) {
            Ok(id) => ResourceRef::Id(id),
            Err(_) => ResourceRef::Name(segment),
        }
    }
}

impl FromStr for ResourceRef {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ResourceRef::from(s.to_string()))
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceRef::Id(id) => write!(f, "{id}"),
            ResourceRef::Name(name) => f.write_str(name),
        }
    }
}
