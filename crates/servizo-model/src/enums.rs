//! Closed enumerations used across the marketplace.
//!
//! These mirror the values stored in the durable catalog, so the serde
//! representations are part of the storage format and must stay stable.

use serde::{Deserialize, Serialize};

// =============================================================================
// SERVICE STATUS
// =============================================================================

/// Live availability of a provider.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceStatus {
    /// Accepting bookings right now.
    #[default]
    Available,

    /// Currently on a job.
    Busy,

    /// Not reachable.
    Offline,
}

impl ServiceStatus {
    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Busy => "Busy",
            Self::Offline => "Offline",
        }
    }

    /// All statuses in display order.
    pub const fn all() -> &'static [ServiceStatus] {
        &[Self::Available, Self::Busy, Self::Offline]
    }
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// CATEGORY
// =============================================================================

/// Service category.
///
/// Multi-word variants carry explicit serde renames because the stored
/// catalog uses the spaced spelling (e.g. `"Home Maintenance"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Plumbing,
    Electrical,
    Tutoring,
    Mechanic,
    #[serde(rename = "Home Maintenance")]
    HomeMaintenance,
    Gardening,
    Cleaning,
    Moving,
    #[serde(rename = "Pet Care")]
    PetCare,
    Beauty,
    Wellness,
    #[serde(rename = "Appliance Repair")]
    ApplianceRepair,
    #[serde(rename = "AC Repair")]
    AcRepair,
}

impl Category {
    /// Human-readable label, matching the serialized spelling.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Plumbing => "Plumbing",
            Self::Electrical => "Electrical",
            Self::Tutoring => "Tutoring",
            Self::Mechanic => "Mechanic",
            Self::HomeMaintenance => "Home Maintenance",
            Self::Gardening => "Gardening",
            Self::Cleaning => "Cleaning",
            Self::Moving => "Moving",
            Self::PetCare => "Pet Care",
            Self::Beauty => "Beauty",
            Self::Wellness => "Wellness",
            Self::ApplianceRepair => "Appliance Repair",
            Self::AcRepair => "AC Repair",
        }
    }

    /// All categories in display order.
    pub const fn all() -> &'static [Category] {
        &[
            Self::Plumbing,
            Self::Electrical,
            Self::Tutoring,
            Self::Mechanic,
            Self::HomeMaintenance,
            Self::Gardening,
            Self::Cleaning,
            Self::Moving,
            Self::PetCare,
            Self::Beauty,
            Self::Wellness,
            Self::ApplianceRepair,
            Self::AcRepair,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// USER ROLE
// =============================================================================

/// UI mode determining visibility and available actions.
///
/// This is a locally chosen mode, not an authentication boundary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Anonymous consumer browsing the catalog.
    #[default]
    User,

    /// Service provider managing their own listing.
    Provider,

    /// Administrator moderating the catalog.
    Admin,
}

impl UserRole {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Provider => "Provider",
            Self::Admin => "Admin",
        }
    }

    /// All roles in display order.
    pub const fn all() -> &'static [UserRole] {
        &[Self::User, Self::Provider, Self::Admin]
    }
}

// =============================================================================
// THEME MODE
// =============================================================================

/// Persisted theme preference.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// The other mode; used by the theme toggle.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

// =============================================================================
// APP VIEW
// =============================================================================

/// Current screen in the application.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppView {
    /// Landing screen with the search form.
    #[default]
    Home,

    /// Marketplace listings (grid or map).
    Listings,

    /// A single provider's profile.
    Profile,

    /// The saved-provider shortlist.
    Shortlist,

    /// Role dashboard (provider self-service or admin console).
    Dashboard,
}

impl AppView {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Listings => "Listings",
            Self::Profile => "Profile",
            Self::Shortlist => "Shortlist",
            Self::Dashboard => "Dashboard",
        }
    }

    /// All views in display order.
    pub const fn all() -> &'static [AppView] {
        &[
            Self::Home,
            Self::Listings,
            Self::Profile,
            Self::Shortlist,
            Self::Dashboard,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_with_spaced_labels() {
        let json = serde_json::to_string(&Category::HomeMaintenance).expect("serialize");
        assert_eq!(json, "\"Home Maintenance\"");
        let round: Category = serde_json::from_str("\"AC Repair\"").expect("deserialize");
        assert_eq!(round, Category::AcRepair);
    }

    #[test]
    fn role_and_theme_use_lowercase_wire_values() {
        assert_eq!(
            serde_json::to_string(&UserRole::Admin).expect("serialize"),
            "\"admin\""
        );
        assert_eq!(
            serde_json::to_string(&ThemeMode::Dark).expect("serialize"),
            "\"dark\""
        );
    }

    #[test]
    fn theme_toggle_is_involutive() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn defaults_match_documented_fallbacks() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
        assert_eq!(UserRole::default(), UserRole::User);
        assert_eq!(AppView::default(), AppView::Home);
    }
}
