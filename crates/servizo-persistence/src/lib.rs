//! Typed key/value durable storage for Servizo browser-profile state.
//!
//! Four logical keys back the four persisted state slices: the provider
//! catalog, the shortlist, the theme preference, and the last active role.
//! Each key is one JSON file under a storage root.
//!
//! # Contract
//!
//! - `load` never fails the caller: missing or malformed data yields
//!   `None`, and the caller substitutes its documented default.
//! - `save` is write-through and atomic (temp file + rename); failures are
//!   surfaced as [`PersistenceError`] for the caller to log and drop.
//!
//! # Example
//!
//! ```
//! use servizo_persistence::{StorageKey, Store};
//!
//! let dir = std::env::temp_dir().join("servizo-doc-example");
//! let store = Store::at(&dir);
//! store.save(StorageKey::Shortlist, &vec!["1".to_string()]).ok();
//! let ids: Vec<String> = store.load(StorageKey::Shortlist).unwrap_or_default();
//! assert_eq!(ids, ["1"]);
//! # std::fs::remove_dir_all(&dir).ok();
//! ```

mod error;
mod key;
mod store;

pub use error::{PersistenceError, Result};
pub use key::StorageKey;
pub use store::Store;
