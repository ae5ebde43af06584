//! Property domain model: the listing record, its closed enums, and the
//! draft payload used for create/update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::error::DomainError;

pub mod filter;
pub mod paginate;
pub mod similar;
pub mod stats;

pub use filter::{filter_properties, sort_properties, PropertyFilter, SortKey};
pub use paginate::{paginate, PageSlice};
pub use similar::similar_properties;
pub use stats::{compute_stats, PropertyStats};

/// Kind of listing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    House,
    Apartment,
    Commercial,
    Land,
    Office,
    CountryHouse,
}

/// Commercial operation offered for a listing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    Sale,
    Rent,
    TemporaryRent,
}

/// Lifecycle status of a listing.
///
/// Soft-delete is the only transition this service performs: any status can
/// move to `Inactive` via [`Property::retire`], and nothing moves out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Available,
    Reserved,
    Sold,
    Rented,
    Inactive,
}

/// Geographic coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Listing agent. This deployment attaches one shared agent record to every
/// property; drafts carry an `agent_id` but there is no per-agent ownership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Agent {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar: Option<String>,
}

/// A full property record as stored and served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Property {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub location: String,
    pub address: Option<String>,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub operation: Operation,
    pub rooms: u32,
    pub bathrooms: u32,
    /// Built area in square meters.
    pub area: f64,
    /// Lot area in square meters, for properties that have their own lot.
    pub lot_area: Option<f64>,
    pub age_years: Option<u32>,
    pub maintenance_fee: Option<f64>,
    pub features: Vec<String>,
    pub services: Vec<String>,
    pub images: Vec<String>,
    pub coordinates: Option<Coordinates>,
    pub status: PropertyStatus,
    pub featured: bool,
    pub published_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub agent: Agent,
    pub views: u64,
}

impl Property {
    pub fn is_available(&self) -> bool {
        self.status == PropertyStatus::Available
    }

    /// Soft-delete: one-way transition into `Inactive`. The record is
    /// retained; there is no API to reactivate it.
    pub fn retire(&mut self, at: DateTime<Utc>) {
        self.status = PropertyStatus::Inactive;
        self.updated_at = Some(at);
    }
}

/// Create/update payload: every mutable field of a [`Property`], plus the
/// agent reference. Id, status, featured flag, timestamps and view counter
/// are owned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PropertyDraft {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub location: String,
    pub address: Option<String>,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub operation: Operation,
    pub rooms: u32,
    pub bathrooms: u32,
    pub area: f64,
    pub lot_area: Option<f64>,
    pub age_years: Option<u32>,
    pub maintenance_fee: Option<f64>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub coordinates: Option<Coordinates>,
    pub agent_id: u64,
}

impl PropertyDraft {
    /// Boundary validation for incoming drafts. Limits match the published
    /// API contract (lengths in characters, areas in square meters).
    pub fn validate(&self) -> Result<(), DomainError> {
        fn fail(msg: impl Into<String>) -> Result<(), DomainError> {
            Err(DomainError::Validation(msg.into()))
        }

        if !(10..=200).contains(&self.title.chars().count()) {
            return fail("title must be between 10 and 200 characters");
        }
        if !(50..=2000).contains(&self.description.chars().count()) {
            return fail("description must be between 50 and 2000 characters");
        }
        if !(5..=200).contains(&self.location.chars().count()) {
            return fail("location must be between 5 and 200 characters");
        }
        if let Some(address) = &self.address {
            if address.chars().count() > 300 {
                return fail("address must be at most 300 characters");
            }
        }
        if self.price <= 0.0 {
            return fail("price must be greater than 0");
        }
        if self.rooms > 20 {
            return fail("rooms must be at most 20");
        }
        if self.bathrooms > 10 {
            return fail("bathrooms must be at most 10");
        }
        if self.area <= 0.0 || self.area > 10_000.0 {
            return fail("area must be greater than 0 and at most 10000");
        }
        if let Some(lot) = self.lot_area {
            if lot <= 0.0 || lot > 50_000.0 {
                return fail("lot_area must be greater than 0 and at most 50000");
            }
        }
        if let Some(age) = self.age_years {
            if age > 200 {
                return fail("age_years must be at most 200");
            }
        }
        if let Some(fee) = self.maintenance_fee {
            if fee < 0.0 {
                return fail("maintenance_fee must not be negative");
            }
        }
        if let Some(coords) = &self.coordinates {
            if !coords.is_valid() {
                return fail("coordinates out of range (lat in [-90,90], lng in [-180,180])");
            }
        }
        Ok(())
    }
}
