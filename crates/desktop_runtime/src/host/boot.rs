use leptos::{logging, Callable, Callback};

use crate::{host::DesktopHostContext, persistence, reducer::DesktopAction};

pub(super) fn hydrate_boot_settings(host: &DesktopHostContext, dispatch: Callback<DesktopAction>) {
    match persistence::load_settings(&*host.prefs_store()) {
        Ok(Some(settings)) => {
            logging::log!("restored persisted system settings");
            dispatch.call(DesktopAction::HydrateSettings { settings });
        }
        Ok(None) => {}
        Err(err) => logging::warn!("restore system settings failed: {err}"),
    }
}
