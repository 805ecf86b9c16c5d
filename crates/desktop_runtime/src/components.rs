//! Desktop shell UI composition and interaction surfaces.

mod control_center;
mod dock;
mod menu_bar;
mod spotlight;
mod window;

use leptos::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use self::{
    control_center::ControlCenter, dock::Dock, menu_bar::MenuBar, spotlight::Spotlight,
    window::DesktopWindow,
};

use crate::{
    model::{AppId, SystemToggle, Wallpaper},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShellShortcut {
    ToggleSpotlight,
    Dismiss,
}

fn shell_shortcut(key: &str, meta: bool, ctrl: bool) -> Option<ShellShortcut> {
    match key {
        " " if meta || ctrl => Some(ShellShortcut::ToggleSpotlight),
        "Escape" => Some(ShellShortcut::Dismiss),
        _ => None,
    }
}

/// CSS `background-image` for the desktop. The animated wallpaper paints its own layer.
fn wallpaper_background(wallpaper: Wallpaper, dark_mode: bool) -> &'static str {
    match wallpaper {
        Wallpaper::Animated => "none",
        Wallpaper::Tahoe if dark_mode => "url(/wallpapers/tahoe-dark.png)",
        Wallpaper::Tahoe => "url(/wallpapers/tahoe-light.png)",
        Wallpaper::Sonoma => {
            "url(https://4kwallpapers.com/images/wallpapers/macos-sonoma-6016x3384-11457.jpg)"
        }
        Wallpaper::Ventura => {
            "url(https://4kwallpapers.com/images/wallpapers/macos-ventura-5k-6016x3384-8841.jpg)"
        }
        Wallpaper::Monterey => {
            "url(https://4kwallpapers.com/images/wallpapers/macos-monterey-stock-purple-dark-mode-layers-5k-6016x3384-5898.jpg)"
        }
    }
}

/// Dimming applied over the desktop; full brightness is fully transparent.
fn brightness_overlay_opacity(brightness: u8) -> f64 {
    f64::from(100 - brightness.min(100)) / 100.0 * 0.8
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

/// Whether the event target sits inside an element matching `selector`.
fn event_target_within(ev: &web_sys::Event, selector: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        ev.target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|element| element.closest(selector).ok().flatten())
            .is_some()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (ev, selector);
        false
    }
}

#[component]
/// Renders the full desktop shell UI: wallpaper, menu bar, windows, dock and overlays.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let viewport = create_rw_signal(runtime.host.get_value().viewport());

    let resize_listener = window_event_listener(ev::resize, move |_| {
        viewport.set(runtime.host.get_value().viewport());
    });
    on_cleanup(move || resize_listener.remove());

    let shortcut_listener = window_event_listener(ev::keydown, move |ev| {
        match shell_shortcut(&ev.key(), ev.meta_key(), ev.ctrl_key()) {
            Some(ShellShortcut::ToggleSpotlight) => {
                ev.prevent_default();
                runtime.dispatch_action(DesktopAction::ToggleSystem {
                    toggle: SystemToggle::Spotlight,
                });
            }
            Some(ShellShortcut::Dismiss) => {
                if state.get_untracked().system.spotlight_open {
                    runtime.dispatch_action(DesktopAction::SetSpotlightOpen { open: false });
                }
            }
            None => {}
        }
    });
    on_cleanup(move || shortcut_listener.remove());

    let open_apps = move || {
        state
            .get()
            .open_windows()
            .into_iter()
            .map(|win| win.app_id)
            .collect::<Vec<AppId>>()
    };

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            class:animated-wallpaper=move || state.get().system.wallpaper == Wallpaper::Animated
            style=move || {
                let system = state.get().system;
                format!(
                    "background-image:{};",
                    wallpaper_background(system.wallpaper, system.dark_mode)
                )
            }
        >
            <div
                class="brightness-overlay"
                aria-hidden="true"
                style=move || {
                    format!(
                        "opacity:{};",
                        brightness_overlay_opacity(state.get().system.brightness)
                    )
                }
            />
            <MenuBar />
            <main class="window-layer">
                <For each=open_apps key=|app_id| *app_id let:app_id>
                    <DesktopWindow app_id=app_id viewport=viewport />
                </For>
            </main>
            <Dock />
            <ControlCenter />
            <Spotlight />
        </div>
    }
}
