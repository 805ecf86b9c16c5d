//! `localStorage`-backed preference store implementation.

use platform_host::{PrefsError, PrefsStore};

/// Browser preference store backed by `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebPrefsStore;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, PrefsError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| PrefsError::Unavailable("localStorage unavailable".to_string()))
}

impl PrefsStore for WebPrefsStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>, PrefsError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| PrefsError::Storage(format!("localStorage get_item failed: {e:?}")))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn save_raw(&self, key: &str, raw_json: &str) -> Result<(), PrefsError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .set_item(key, raw_json)
                .map_err(|e| PrefsError::Storage(format!("localStorage set_item failed: {e:?}")))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw_json);
            Ok(())
        }
    }

    fn remove(&self, key: &str) -> Result<(), PrefsError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?.remove_item(key).map_err(|e| {
                PrefsError::Storage(format!("localStorage remove_item failed: {e:?}"))
            })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn native_fallback_is_empty_and_accepts_writes() {
        let store = crate::prefs_store();
        store.save_raw("k", "{}").expect("save");
        assert_eq!(store.load_raw("k").expect("load"), None);
        store.remove("k").expect("remove");
    }
}
