use crate::WebPrefsStore;

/// Returns the preference store used by the browser runtime.
pub fn prefs_store() -> WebPrefsStore {
    WebPrefsStore
}
