pub mod apps;
pub mod components;
mod effect_executor;
mod host;
pub mod model;
pub mod persistence;
pub mod reducer;
mod runtime_context;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use host::DesktopHostContext;
pub use model::*;
pub use persistence::{load_settings, persist_settings, SETTINGS_PREFS_KEY};
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
