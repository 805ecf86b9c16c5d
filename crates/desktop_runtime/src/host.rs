//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Everything here touches the DOM or storage. On non-wasm targets the browser queries fall back to
//! fixed values so the runtime can be exercised natively.

mod boot;
mod host_ui;
mod persistence_effects;

use std::rc::Rc;

use leptos::Callback;
use platform_host::PrefsStore;
use platform_host_web::prefs_store;

pub(crate) use host_ui::{random_index, SPOTLIGHT_INPUT_DOM_ID};

use crate::{
    model::{AppId, OriginRect},
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
    window_manager::Viewport,
};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    prefs: Rc<dyn PrefsStore>,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::new(Rc::new(prefs_store()))
    }
}

impl DesktopHostContext {
    /// Builds a host context around an explicit preference store.
    pub fn new(prefs: Rc<dyn PrefsStore>) -> Self {
        Self { prefs }
    }

    /// Returns the configured preference service.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.prefs.clone()
    }

    /// Restores persisted settings before the first render.
    pub fn hydrate_boot_settings(&self, dispatch: Callback<DesktopAction>) {
        boot::hydrate_boot_settings(self, dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PersistSettings => {
                persistence_effects::persist_settings(self, runtime)
            }
            RuntimeEffect::ApplyColorScheme { dark } => host_ui::apply_color_scheme(dark),
            RuntimeEffect::FocusSpotlightInput => {
                host_ui::focus_element_by_id(SPOTLIGHT_INPUT_DOM_ID)
            }
        }
    }

    /// Current browser viewport.
    pub fn viewport(&self) -> Viewport {
        host_ui::viewport()
    }

    /// Screen rectangle of the dock icon that launches `app_id`, when it is rendered.
    pub fn dock_icon_origin(&self, app_id: AppId) -> Option<OriginRect> {
        host_ui::dock_icon_origin(app_id)
    }
}
