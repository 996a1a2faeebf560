//! URL route codec.
//!
//! Bidirectional mapping between a navigation target and a URL path. Role
//! and view share the same path space: the admin and provider roles claim
//! the first segment outright, so a role switch while deep in a profile
//! loses the profile segment. That is accepted, observable behavior.

use servizo_model::{AppView, UserRole};

/// A parsed navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTarget {
    pub view: AppView,
    pub role: UserRole,
    pub provider_id: Option<String>,
}

impl RouteTarget {
    fn new(view: AppView, role: UserRole) -> Self {
        Self {
            view,
            role,
            provider_id: None,
        }
    }
}

/// Encode a navigation target as a URL path.
///
/// First match wins, in the same order `decode` resolves segments:
/// admin and provider roles before views, then the view table, then `/`.
pub fn encode(role: UserRole, view: AppView, provider_id: Option<&str>) -> String {
    match (role, view, provider_id) {
        (UserRole::Admin, _, _) => "/admin".to_string(),
        (UserRole::Provider, _, _) => "/provider".to_string(),
        (_, AppView::Listings, _) => "/listings".to_string(),
        (_, AppView::Profile, Some(id)) => format!("/profile/{id}"),
        (_, AppView::Shortlist, _) => "/shortlist".to_string(),
        _ => "/".to_string(),
    }
}

/// Decode a URL path into a navigation target.
///
/// Total: unrecognized paths degrade to the home route, never an error.
/// `/profile` without an id is unrecognized.
pub fn decode(path: &str) -> RouteTarget {
    let mut segments = path.trim_start_matches('/').split('/');
    let head = segments.next().unwrap_or("");
    let rest = segments.next().filter(|s| !s.is_empty());

    match (head, rest) {
        ("admin", _) => RouteTarget::new(AppView::Dashboard, UserRole::Admin),
        ("provider", _) => RouteTarget::new(AppView::Dashboard, UserRole::Provider),
        ("listings", _) => RouteTarget::new(AppView::Listings, UserRole::User),
        ("profile", Some(id)) => RouteTarget {
            view: AppView::Profile,
            role: UserRole::User,
            provider_id: Some(id.to_string()),
        },
        ("shortlist", _) => RouteTarget::new(AppView::Shortlist, UserRole::User),
        _ => RouteTarget::new(AppView::Home, UserRole::User),
    }
}
