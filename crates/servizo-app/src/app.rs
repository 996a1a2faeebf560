//! The top-level application controller.
//!
//! Owns every state slice for the lifetime of the session and is the only
//! writer: the presentation layer reads snapshots and calls the mutation
//! surface, the host shell feeds history events and elapsed transition
//! timers back in through [`AppController::update`].

use servizo_model::{
    AppView, FilterState, ProviderRecord, ServiceStatus, ShortlistSet, ThemeMode, UserRole,
};
use servizo_persistence::{StorageKey, Store};

use crate::catalog::CatalogStore;
use crate::effect::Effect;
use crate::filter_engine;
use crate::message::Message;
use crate::navigation::{NavigationController, NavigationState, TransitionToken};
use crate::route;
use crate::seed::seed_catalog;

/// Composes the stores, the filter engine, and the navigation machine.
pub struct AppController {
    store: Store,
    catalog: CatalogStore,
    nav: NavigationController,
    filters: FilterState,
    theme: ThemeMode,
    shortlist: ShortlistSet,
    /// Derived listing, recomputed whenever catalog, filters, or role
    /// change; those three are its only inputs.
    visible: Vec<ProviderRecord>,
}

impl AppController {
    /// Boot the application from durable storage and the initial URL.
    ///
    /// Hydration order: the URL decides view, role, and selection; storage
    /// supplies theme, shortlist, and catalog; anything missing or corrupt
    /// falls back to the documented default (dark theme, empty shortlist,
    /// seed catalog). The initial selection is resolved against the
    /// catalog and dropped when it points nowhere.
    pub fn new(store: Store, initial_path: &str) -> Self {
        let theme = store.load::<ThemeMode>(StorageKey::Theme).unwrap_or_default();
        let shortlist = store
            .load::<ShortlistSet>(StorageKey::Shortlist)
            .unwrap_or_default();
        let catalog = CatalogStore::new(
            store
                .load::<Vec<ProviderRecord>>(StorageKey::Providers)
                .unwrap_or_else(seed_catalog),
        );

        let target = route::decode(initial_path);
        let selected = target
            .provider_id
            .filter(|id| catalog.get(id).is_some());
        let nav = NavigationController::with_state(NavigationState {
            view: target.view,
            role: target.role,
            selected_provider_id: selected,
        });

        tracing::info!(
            path = initial_path,
            view = nav.state().view.label(),
            role = nav.state().role.label(),
            providers = catalog.len(),
            "application state hydrated"
        );

        let mut controller = Self {
            store,
            catalog,
            nav,
            filters: FilterState::default(),
            theme,
            shortlist,
            visible: Vec::new(),
        };
        controller.recompute_visible();
        controller
    }

    // ========================================================================
    // Message dispatch
    // ========================================================================

    /// Process one inbound message and return the effects the host must
    /// perform. All state changes funnel through here.
    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::NavigateTo { view, provider_id } => {
                self.navigate_to(view, provider_id.as_deref())
            }
            Message::SwitchRole(role) => self.switch_role(role),
            Message::SetFilters(filters) => {
                self.set_filters(filters);
                Vec::new()
            }
            Message::SetTheme(theme) => {
                self.set_theme(theme);
                Vec::new()
            }
            Message::ToggleShortlist(id) => {
                self.toggle_shortlist(&id);
                Vec::new()
            }
            Message::UpdateProvider(record) => {
                self.update_provider(record);
                Vec::new()
            }
            Message::SubmitSearch(query) => self.submit_search(query),
            Message::PathChanged(path) => {
                self.path_changed(&path);
                Vec::new()
            }
            Message::TransitionElapsed(token) => self.transition_elapsed(token),
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Start a transition toward `view`.
    ///
    /// A profile target is resolved first: when the id is missing from the
    /// catalog or the listing is rejected, navigation degrades to the
    /// listings view with no selection.
    pub fn navigate_to(&mut self, view: AppView, provider_id: Option<&str>) -> Vec<Effect> {
        let (view, provider_id) = self.resolve_target(view, provider_id);
        self.nav.request(view, provider_id)
    }

    fn resolve_target(
        &self,
        view: AppView,
        provider_id: Option<&str>,
    ) -> (AppView, Option<String>) {
        if view != AppView::Profile {
            return (view, None);
        }
        match provider_id.and_then(|id| self.catalog.get(id)) {
            Some(record) if record.is_active() => (AppView::Profile, Some(record.id.clone())),
            _ => {
                tracing::warn!(?provider_id, "profile target unresolved, opening listings");
                (AppView::Listings, None)
            }
        }
    }

    /// Switch the active role and transition to its landing view.
    pub fn switch_role(&mut self, role: UserRole) -> Vec<Effect> {
        let effects = self.nav.switch_role(role);
        self.persist(StorageKey::Role, &role);
        self.recompute_visible();
        effects
    }

    /// A scheduled transition delay elapsed.
    pub fn transition_elapsed(&mut self, token: TransitionToken) -> Vec<Effect> {
        self.nav.complete(token)
    }

    /// The browser moved through history.
    ///
    /// Decodes the new path, resolves the selection against the catalog
    /// (no selection when unresolved), and applies everything
    /// synchronously — no loading indicator, no URL re-write.
    pub fn path_changed(&mut self, path: &str) {
        let target = route::decode(path);
        let resolved = target
            .provider_id
            .filter(|id| self.catalog.get(id).is_some());
        let role_changed = target.role != self.nav.state().role;

        self.nav.apply_history(target.view, target.role, resolved);

        if role_changed {
            self.persist(StorageKey::Role, &target.role);
            self.recompute_visible();
        }
    }

    /// Home-screen search submit: stash the query and open the listings.
    pub fn submit_search(&mut self, query: String) -> Vec<Effect> {
        self.filters.search = query;
        self.recompute_visible();
        self.navigate_to(AppView::Listings, None)
    }

    // ========================================================================
    // Filters, theme, shortlist
    // ========================================================================

    /// Replace the filter predicate. Filters are session state and are not
    /// persisted.
    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
        self.recompute_visible();
    }

    /// Set and persist the theme preference.
    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.theme = theme;
        self.persist(StorageKey::Theme, &theme);
    }

    /// Toggle a provider in the shortlist; returns `true` when the id is
    /// now shortlisted. Independent of catalog and filter state.
    pub fn toggle_shortlist(&mut self, id: &str) -> bool {
        let now_member = self.shortlist.toggle(id);
        self.persist(StorageKey::Shortlist, &self.shortlist);
        now_member
    }

    // ========================================================================
    // Catalog mutations
    // ========================================================================

    /// Replace a catalog record and write the catalog through.
    ///
    /// A record whose id is not in the catalog is ignored; nothing is
    /// inserted and nothing is persisted.
    pub fn update_provider(&mut self, record: ProviderRecord) {
        if self.catalog.update(record) {
            self.persist(StorageKey::Providers, &self.catalog.all());
            self.recompute_visible();
        }
    }

    /// Admin action: mark a listing verified.
    pub fn verify_provider(&mut self, id: &str) {
        self.modify_provider(id, |record| record.verified = true);
    }

    /// Admin action: soft-reject a listing. Reversible; the record stays
    /// in the catalog.
    pub fn reject_provider(&mut self, id: &str) {
        self.modify_provider(id, |record| record.is_rejected = true);
    }

    /// Admin action: restore a rejected listing.
    pub fn restore_provider(&mut self, id: &str) {
        self.modify_provider(id, |record| record.is_rejected = false);
    }

    /// Provider action: publish a new availability status.
    pub fn set_availability(&mut self, id: &str, status: ServiceStatus) {
        self.modify_provider(id, |record| record.availability = status);
    }

    /// Provider action: update the headline bio.
    pub fn set_description(&mut self, id: &str, description: &str) {
        self.modify_provider(id, |record| record.description = description.to_string());
    }

    fn modify_provider(&mut self, id: &str, apply: impl FnOnce(&mut ProviderRecord)) {
        let Some(mut record) = self.catalog.get(id).cloned() else {
            tracing::debug!(id, "mutation for unknown provider ignored");
            return;
        };
        apply(&mut record);
        self.update_provider(record);
    }

    // ========================================================================
    // Snapshot accessors
    // ========================================================================

    pub fn navigation(&self) -> &NavigationState {
        self.nav.state()
    }

    pub fn view(&self) -> AppView {
        self.nav.state().view
    }

    pub fn role(&self) -> UserRole {
        self.nav.state().role
    }

    pub fn is_transitioning(&self) -> bool {
        self.nav.is_transitioning()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn shortlist(&self) -> &ShortlistSet {
        &self.shortlist
    }

    pub fn is_shortlisted(&self, id: &str) -> bool {
        self.shortlist.contains(id)
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// The currently selected provider, when the selection resolves.
    pub fn selected_provider(&self) -> Option<&ProviderRecord> {
        self.nav
            .state()
            .selected_provider_id
            .as_deref()
            .and_then(|id| self.catalog.get(id))
    }

    /// The derived, role-gated, filtered listing in catalog order.
    pub fn visible_providers(&self) -> &[ProviderRecord] {
        &self.visible
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn recompute_visible(&mut self) {
        self.visible =
            filter_engine::visible(self.catalog.all(), &self.filters, self.nav.state().role);
    }

    fn persist<T: serde::Serialize>(&self, key: StorageKey, value: &T) {
        if let Err(err) = self.store.save(key, value) {
            tracing::warn!(%err, "best-effort save failed");
        }
    }
}
