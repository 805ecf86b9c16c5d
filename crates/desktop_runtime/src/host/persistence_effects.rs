use leptos::{logging, SignalGetUntracked};

use crate::{host::DesktopHostContext, persistence, runtime_context::DesktopRuntimeContext};

pub(super) fn persist_settings(host: &DesktopHostContext, runtime: DesktopRuntimeContext) {
    let system = runtime.state.get_untracked().system;
    if let Err(err) = persistence::persist_settings(&*host.prefs_store(), &system) {
        logging::warn!("persist system settings failed: {err}");
    }
}
