//! Lightweight preference storage contracts and adapters.
//!
//! Preferences are JSON text stored per key. The browser backend (`localStorage`) is synchronous,
//! so the contract is synchronous too.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Failures surfaced by a [`PrefsStore`] or the typed helpers layered on top of it.
#[derive(Debug, Error)]
pub enum PrefsError {
    /// The host has no preference backend (private browsing, non-browser target, ...).
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),
    /// The backend rejected a read or write.
    #[error("preference storage failed: {0}")]
    Storage(String),
    /// The stored value could not be encoded or decoded as JSON.
    #[error("preference codec failed: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Host service for lightweight preference values (JSON stored as text per key).
pub trait PrefsStore {
    /// Loads the raw JSON string stored for `key`.
    fn load_raw(&self, key: &str) -> Result<Option<String>, PrefsError>;

    /// Replaces the raw JSON string stored for `key`.
    fn save_raw(&self, key: &str, raw_json: &str) -> Result<(), PrefsError>;

    /// Removes `key` from the store. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), PrefsError>;
}

/// Preference store that remembers nothing. Used on hosts without storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_raw(&self, _key: &str) -> Result<Option<String>, PrefsError> {
        Ok(None)
    }

    fn save_raw(&self, _key: &str, _raw_json: &str) -> Result<(), PrefsError> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<(), PrefsError> {
        Ok(())
    }
}

/// In-memory preference store keyed by string.
///
/// Clones share the same backing map, which lets tests simulate a page reload by handing a
/// clone to a freshly booted runtime.
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns `true` when nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn save_raw(&self, key: &str, raw_json: &str) -> Result<(), PrefsError> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), raw_json.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PrefsError> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}

/// Loads and deserializes a typed preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when the store read or JSON deserialization fails.
pub fn load_pref_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, PrefsError> {
    let Some(raw) = store.load_raw(key)? else {
        return Ok(None);
    };
    Ok(Some(serde_json::from_str(&raw)?))
}

/// Serializes and saves a typed preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), PrefsError> {
    let raw = serde_json::to_string(value)?;
    store.save_raw(key, &raw)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct PanelPrefs {
        sidebar_visible: bool,
    }

    #[test]
    fn memory_store_round_trips_and_removes_raw_values() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        store_obj.save_raw("pref.key", "{\"k\":1}").expect("save");
        assert_eq!(
            store_obj.load_raw("pref.key").expect("load"),
            Some("{\"k\":1}".to_string())
        );
        store_obj.remove("pref.key").expect("remove");
        assert_eq!(store_obj.load_raw("pref.key").expect("load"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn memory_store_clones_share_backing_map() {
        let store = MemoryPrefsStore::default();
        let reloaded = store.clone();

        store.save_raw("a", "1").expect("save");

        assert_eq!(reloaded.load_raw("a").expect("load"), Some("1".to_string()));
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn typed_helpers_round_trip() {
        let store = MemoryPrefsStore::default();
        save_pref_with(
            &store,
            "panel",
            &PanelPrefs {
                sidebar_visible: true,
            },
        )
        .expect("save typed pref");

        let loaded: Option<PanelPrefs> = load_pref_with(&store, "panel").expect("load typed pref");
        assert_eq!(
            loaded,
            Some(PanelPrefs {
                sidebar_visible: true
            })
        );
    }

    #[test]
    fn typed_load_reports_codec_errors() {
        let store = MemoryPrefsStore::default();
        store.save_raw("panel", "not json").expect("save");

        let err = load_pref_with::<_, PanelPrefs>(&store, "panel").expect_err("decode fails");
        assert!(matches!(err, PrefsError::Codec(_)));
    }

    #[test]
    fn noop_store_is_empty_and_successful() {
        let store = NoopPrefsStore;
        let store_obj: &dyn PrefsStore = &store;
        assert_eq!(store_obj.load_raw("k").expect("load"), None);
        store_obj.save_raw("k", "{}").expect("save");
        store_obj.remove("k").expect("remove");
        assert_eq!(store_obj.load_raw("k").expect("load"), None);
    }
}
