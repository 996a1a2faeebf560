//! Navigation state machine.
//!
//! Two states: idle and transitioning. A navigation request pushes the URL
//! immediately, then the view and selection land together once the
//! transition delay elapses. A newer request supersedes a pending one —
//! later request wins, no queueing — and a monotonically increasing token
//! keeps a superseded completion from stomping the newer target.

use servizo_model::{AppView, UserRole};

use crate::constants::TRANSITION_DELAY;
use crate::effect::Effect;
use crate::route;

/// Opaque handle identifying one navigation transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionToken(u64);

/// The navigation slice of application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub view: AppView,
    pub role: UserRole,
    pub selected_provider_id: Option<String>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            view: AppView::Home,
            role: UserRole::User,
            selected_provider_id: None,
        }
    }
}

#[derive(Debug, Clone)]
struct PendingTransition {
    token: TransitionToken,
    view: AppView,
    provider_id: Option<String>,
}

/// Orchestrates view transitions and history events.
#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    state: NavigationState,
    pending: Option<PendingTransition>,
    next_token: u64,
}

impl NavigationController {
    /// Controller starting from an already-resolved navigation state.
    pub fn with_state(state: NavigationState) -> Self {
        Self {
            state,
            pending: None,
            next_token: 0,
        }
    }

    /// Current navigation state. The view and selection only change when a
    /// transition completes or a history event arrives.
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Whether a transition is in flight.
    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    fn mint_token(&mut self) -> TransitionToken {
        self.next_token += 1;
        TransitionToken(self.next_token)
    }

    /// Start a transition toward `view`.
    ///
    /// The URL moves immediately, encoded from the *current* role and the
    /// *target* view; the state lands when the host delivers the token
    /// back. A request issued while another is pending replaces it.
    pub fn request(&mut self, view: AppView, provider_id: Option<String>) -> Vec<Effect> {
        let token = self.mint_token();
        let url = route::encode(self.state.role, view, provider_id.as_deref());
        tracing::debug!(?view, url = %url, "navigation requested");
        self.pending = Some(PendingTransition {
            token,
            view,
            provider_id,
        });
        vec![
            Effect::PushUrl(url),
            Effect::ScheduleTransition {
                token,
                delay: TRANSITION_DELAY,
            },
        ]
    }

    /// Complete the transition identified by `token`.
    ///
    /// Applies view and selection atomically and asks the host to reset
    /// scroll. A token that no longer matches the pending transition is a
    /// superseded completion and is discarded.
    pub fn complete(&mut self, token: TransitionToken) -> Vec<Effect> {
        match self.pending.take() {
            Some(pending) if pending.token == token => {
                self.state.view = pending.view;
                self.state.selected_provider_id = pending.provider_id;
                tracing::debug!(view = ?self.state.view, "transition landed");
                vec![Effect::ResetScroll]
            }
            other => {
                tracing::debug!(?token, "stale transition completion discarded");
                self.pending = other;
                Vec::new()
            }
        }
    }

    /// Switch the active role.
    ///
    /// The role applies immediately — it is not deferred behind the
    /// transition — then the canonical landing view for that role runs
    /// through the normal transition sequence.
    pub fn switch_role(&mut self, role: UserRole) -> Vec<Effect> {
        self.state.role = role;
        tracing::info!(role = role.label(), "role switched");
        self.request(Self::landing_view(role), None)
    }

    /// Canonical landing view after a role switch.
    pub fn landing_view(role: UserRole) -> AppView {
        match role {
            UserRole::User => AppView::Home,
            UserRole::Provider | UserRole::Admin => AppView::Dashboard,
        }
    }

    /// Apply a browser history event.
    ///
    /// Bypasses the timed transition entirely: the state lands
    /// synchronously, any pending transition is abandoned, and no URL is
    /// written — the browser already moved. `resolved_provider_id` is the
    /// decoded id after catalog resolution, or `None` when it resolved to
    /// nothing.
    pub fn apply_history(
        &mut self,
        view: AppView,
        role: UserRole,
        resolved_provider_id: Option<String>,
    ) {
        self.pending = None;
        self.state.view = view;
        self.state.role = role;
        self.state.selected_provider_id = resolved_provider_id;
        tracing::debug!(?view, role = role.label(), "history event applied");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule_token(effects: &[Effect]) -> TransitionToken {
        effects
            .iter()
            .find_map(|effect| match effect {
                Effect::ScheduleTransition { token, .. } => Some(*token),
                _ => None,
            })
            .expect("a scheduled transition")
    }

    #[test]
    fn request_pushes_url_immediately_and_defers_the_view() {
        let mut nav = NavigationController::default();
        let effects = nav.request(AppView::Listings, None);

        assert_eq!(effects[0], Effect::PushUrl("/listings".to_string()));
        assert!(nav.is_transitioning());
        // View has not moved yet.
        assert_eq!(nav.state().view, AppView::Home);

        let done = nav.complete(schedule_token(&effects));
        assert_eq!(done, vec![Effect::ResetScroll]);
        assert_eq!(nav.state().view, AppView::Listings);
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn later_request_wins_and_stale_completion_is_discarded() {
        let mut nav = NavigationController::default();
        let first = schedule_token(&nav.request(AppView::Listings, None));
        let second = schedule_token(&nav.request(AppView::Shortlist, None));

        // The slower first transition lands late: nothing happens.
        assert!(nav.complete(first).is_empty());
        assert_eq!(nav.state().view, AppView::Home);
        assert!(nav.is_transitioning());

        nav.complete(second);
        assert_eq!(nav.state().view, AppView::Shortlist);
    }

    #[test]
    fn completing_twice_is_inert() {
        let mut nav = NavigationController::default();
        let token = schedule_token(&nav.request(AppView::Listings, None));
        nav.complete(token);
        assert!(nav.complete(token).is_empty());
        assert_eq!(nav.state().view, AppView::Listings);
    }

    #[test]
    fn role_switch_applies_role_immediately() {
        let mut nav = NavigationController::default();
        let effects = nav.switch_role(UserRole::Admin);

        assert_eq!(nav.state().role, UserRole::Admin);
        // Still transitioning toward the dashboard.
        assert_eq!(nav.state().view, AppView::Home);
        assert_eq!(effects[0], Effect::PushUrl("/admin".to_string()));

        nav.complete(schedule_token(&effects));
        assert_eq!(nav.state().view, AppView::Dashboard);
    }

    #[test]
    fn landing_views_per_role() {
        assert_eq!(NavigationController::landing_view(UserRole::User), AppView::Home);
        assert_eq!(
            NavigationController::landing_view(UserRole::Provider),
            AppView::Dashboard
        );
        assert_eq!(
            NavigationController::landing_view(UserRole::Admin),
            AppView::Dashboard
        );
    }

    #[test]
    fn history_event_cancels_pending_transition() {
        let mut nav = NavigationController::default();
        let token = schedule_token(&nav.request(AppView::Listings, None));

        nav.apply_history(AppView::Shortlist, UserRole::User, None);
        assert!(!nav.is_transitioning());
        assert_eq!(nav.state().view, AppView::Shortlist);

        // The abandoned transition's completion must not stomp the state.
        assert!(nav.complete(token).is_empty());
        assert_eq!(nav.state().view, AppView::Shortlist);
    }
}
