//! Provider catalog records.
//!
//! `ProviderRecord` is the unit of the durable catalog. Field names are
//! serialized in camelCase because that is the stored JSON shape; changing a
//! rename here is a storage-format change.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{Category, ServiceStatus};

/// A customer review attached to a provider.
///
/// Reviews are immutable once created; there is no edit or delete operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Stable review id.
    pub id: String,
    /// Display name of the reviewer.
    pub user: String,
    /// Star rating, 1 through 5.
    pub rating: u8,
    /// Free-text comment.
    pub comment: String,
    /// Date the review was left.
    pub date: NaiveDate,
}

/// A catalog entry representing a bookable service professional.
///
/// Records are seeded at first load, hydrated from durable storage
/// thereafter, and mutated in place by role-scoped operations. They are
/// never deleted: rejection (`is_rejected`) is a soft, reversible state,
/// and `verified` is independent of it — a rejected listing may still carry
/// a stale verified flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRecord {
    /// Stable id, unique within the catalog.
    pub id: String,
    pub name: String,
    pub category: Category,
    /// Free text, comma-separated city/region (e.g. "Indiranagar, Bengaluru").
    pub location: String,
    pub availability: ServiceStatus,
    /// Aggregate star rating.
    pub rating: f32,
    pub reviews_count: u32,
    pub reviews: Vec<Review>,
    /// Display rate string, e.g. "₹450/hr".
    pub price: String,
    /// Avatar image URL.
    pub avatar: String,
    pub lat: f64,
    pub lng: f64,
    /// Short headline bio shown on cards.
    pub description: String,
    /// Long-form bio shown on the profile screen.
    pub long_bio: String,
    pub skills: Vec<String>,
    pub years_experience: u32,
    /// Typical response time, e.g. "Under 30 min".
    pub response_time: String,
    /// Moderation flag set by the admin console.
    pub verified: bool,
    pub repeat_customers: u32,
    pub certifications: Vec<String>,
    pub equipment: Vec<String>,
    pub completed_jobs: u32,
    /// Soft-rejection flag; hidden from the consumer role while set.
    #[serde(default)]
    pub is_rejected: bool,
    /// Optional gallery images.
    #[serde(default)]
    pub images: Vec<String>,
}

impl ProviderRecord {
    /// First segment of the location, typically the neighbourhood.
    pub fn locality(&self) -> &str {
        self.location
            .split(',')
            .next()
            .map(str::trim)
            .unwrap_or(&self.location)
    }

    /// Whether this listing is visible to the consumer role.
    pub fn is_active(&self) -> bool {
        !self.is_rejected
    }
}
