//! Servizo application state and view-synchronization engine.
//!
//! Keeps four interdependent sources of truth — current view, active role,
//! filter predicate, and the provider catalog plus the user's shortlist —
//! consistent with each other, with the address bar, and with durable
//! storage, while applying role-scoped visibility rules over the catalog.
//!
//! The architecture is Elm-shaped and headless: presentation reads
//! snapshots off [`AppController`] and sends [`Message`]s in; every update
//! returns the [`Effect`]s the host shell must perform (push a URL,
//! schedule a transition timer, reset scroll). The engine itself never
//! touches the browser, which keeps every state change synchronous and
//! testable.
//!
//! # Module structure
//!
//! - [`app`] - `AppController`, the composition root and mutation surface
//! - [`navigation`] - the two-state transition machine with supersession
//! - [`route`] - URL path codec
//! - [`catalog`] - the canonical mutable provider collection
//! - [`filter_engine`] - pure role-gated filtering
//! - [`seed`] - built-in first-run catalog

pub mod app;
pub mod catalog;
pub mod constants;
pub mod effect;
pub mod filter_engine;
pub mod message;
pub mod navigation;
pub mod route;
pub mod seed;

pub use app::AppController;
pub use catalog::CatalogStore;
pub use effect::Effect;
pub use message::Message;
pub use navigation::{NavigationController, NavigationState, TransitionToken};
pub use route::RouteTarget;
