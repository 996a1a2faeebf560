//! Inbound messages.
//!
//! All user interactions and host events flow through this enum into
//! [`crate::app::AppController::update`]; the returned effects tell the
//! host what to do next.

use servizo_model::{AppView, FilterState, ProviderRecord, ThemeMode, UserRole};

use crate::navigation::TransitionToken;

/// Root message enum for the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // =========================================================================
    // User intents
    // =========================================================================
    /// Navigate to a view, optionally selecting a provider.
    NavigateTo {
        view: AppView,
        provider_id: Option<String>,
    },

    /// Switch the active role.
    SwitchRole(UserRole),

    /// Replace the filter predicate.
    SetFilters(FilterState),

    /// Set the theme preference.
    SetTheme(ThemeMode),

    /// Toggle a provider in the shortlist.
    ToggleShortlist(String),

    /// Replace a catalog record (read-copy-update mutation).
    UpdateProvider(ProviderRecord),

    /// Home-screen search submit: store the query and open the listings.
    SubmitSearch(String),

    // =========================================================================
    // Host events
    // =========================================================================
    /// The browser moved through history (back/forward); the path is the
    /// new location. Applied synchronously, with no URL re-write.
    PathChanged(String),

    /// A scheduled transition delay elapsed. Stale tokens are discarded.
    TransitionElapsed(TransitionToken),
}

impl Message {
    /// Navigation message without a selection.
    pub fn go(view: AppView) -> Self {
        Self::NavigateTo {
            view,
            provider_id: None,
        }
    }

    /// Navigation message opening a provider profile.
    pub fn open_profile(provider_id: impl Into<String>) -> Self {
        Self::NavigateTo {
            view: AppView::Profile,
            provider_id: Some(provider_id.into()),
        }
    }
}
