//! Servizo marketplace data model definitions.
//!
//! Pure data types shared by the persistence layer and the application
//! engine: the provider catalog record, the closed enumerations (category,
//! availability, role, theme, view), the listing filter, the shortlist set,
//! and the geographic distance helper.
//!
//! Serde representations in this crate double as the durable storage
//! format, so renames and defaults here are load-bearing.

pub mod enums;
pub mod filter;
pub mod geo;
pub mod provider;
pub mod shortlist;

pub use enums::{AppView, Category, ServiceStatus, ThemeMode, UserRole};
pub use filter::FilterState;
pub use geo::distance_km;
pub use provider::{ProviderRecord, Review};
pub use shortlist::ShortlistSet;
