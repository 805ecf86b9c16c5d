//! Persistence for the cosmetic system settings that survive a reload.
//!
//! Window layout, open/closed status and stacking order are never written; a reload always
//! starts from [`DesktopState::default`](crate::model::DesktopState::default).

use platform_host::{load_pref_with, save_pref_with, PrefsError, PrefsStore};
use thiserror::Error;

use crate::model::{PersistedSettings, SystemState};

/// Preference key for the persisted settings blob.
pub const SETTINGS_PREFS_KEY: &str = "portfolio.system-settings.v1";

#[derive(Debug, Error)]
/// Errors raised while reading or writing persisted settings.
pub enum PersistenceError {
    /// The preference store or JSON codec failed.
    #[error("settings preference failed: {0}")]
    Prefs(#[from] PrefsError),
}

/// Loads previously persisted settings, if any.
///
/// # Errors
///
/// Returns an error when storage is unavailable or the stored blob is malformed.
pub fn load_settings<S: PrefsStore + ?Sized>(
    store: &S,
) -> Result<Option<PersistedSettings>, PersistenceError> {
    Ok(load_pref_with(store, SETTINGS_PREFS_KEY)?)
}

/// Writes the persisted subset of `system`.
///
/// # Errors
///
/// Returns an error when serialization or the storage write fails.
pub fn persist_settings<S: PrefsStore + ?Sized>(
    store: &S,
    system: &SystemState,
) -> Result<(), PersistenceError> {
    save_pref_with(store, SETTINGS_PREFS_KEY, &system.persisted())?;
    Ok(())
}
