use super::*;
use crate::model::SystemSlider;

const PANEL_DOM_ID: &str = "control-center-panel";

#[component]
pub(super) fn ControlCenter() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let system = create_memo(move |_| runtime.state.get().system);

    let outside_listener = window_event_listener(ev::mousedown, move |ev| {
        if !system.get_untracked().control_center_open {
            return;
        }
        if event_target_within(&ev, &format!("#{PANEL_DOM_ID}, #control-center-toggle")) {
            return;
        }
        runtime.dispatch_action(DesktopAction::SetControlCenterOpen { open: false });
    });
    on_cleanup(move || outside_listener.remove());

    let toggle = move |toggle: SystemToggle| {
        runtime.dispatch_action(DesktopAction::ToggleSystem { toggle });
    };
    let set_slider = move |slider: SystemSlider, ev: web_sys::Event| {
        if let Ok(value) = event_target_value(&ev).parse::<i32>() {
            runtime.dispatch_action(DesktopAction::SetSystemValue { slider, value });
        }
    };

    view! {
        <Show when=move || system.get().control_center_open fallback=|| ()>
            <section id=PANEL_DOM_ID class="control-center" aria-label="Control Center">
                <div class="control-center-module connectivity">
                    <ConnectivityTile
                        label="Wi-Fi"
                        active=Signal::derive(move || system.get().wifi)
                        on_toggle=Callback::new(move |_| toggle(SystemToggle::Wifi))
                    />
                    <ConnectivityTile
                        label="Bluetooth"
                        active=Signal::derive(move || system.get().bluetooth)
                        on_toggle=Callback::new(move |_| toggle(SystemToggle::Bluetooth))
                    />
                    <ConnectivityTile
                        label="AirDrop"
                        active=Signal::derive(move || system.get().airdrop)
                        on_toggle=Callback::new(move |_| toggle(SystemToggle::Airdrop))
                    />
                </div>
                <div class="control-center-module tiles">
                    <button
                        class="control-center-tile"
                        class:active=move || system.get().dark_mode
                        on:click=move |_| toggle(SystemToggle::DarkMode)
                    >
                        {move || if system.get().dark_mode { "Dark Mode" } else { "Light Mode" }}
                    </button>
                    <button
                        class="control-center-tile"
                        on:click=move |_| runtime.dispatch_action(DesktopAction::CycleWallpaper)
                    >
                        <span>"Wallpaper"</span>
                        <span class="tile-value">{move || system.get().wallpaper.label()}</span>
                    </button>
                </div>
                <label class="control-center-module slider">
                    <span>"Display"</span>
                    <input
                        type="range"
                        min="10"
                        max="100"
                        prop:value=move || system.get().brightness.to_string()
                        on:input=move |ev| set_slider(SystemSlider::Brightness, ev)
                    />
                </label>
                <label class="control-center-module slider">
                    <span>"Sound"</span>
                    <input
                        type="range"
                        min="0"
                        max="100"
                        prop:value=move || system.get().volume.to_string()
                        on:input=move |ev| set_slider(SystemSlider::Volume, ev)
                    />
                </label>
            </section>
        </Show>
    }
}

#[component]
fn ConnectivityTile(
    label: &'static str,
    #[prop(into)] active: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="connectivity-tile"
            class:active=move || active.get()
            aria-pressed=move || active.get().to_string()
            on:click=move |ev| {
                ev.stop_propagation();
                on_toggle.call(());
            }
        >
            <span class="tile-label">{label}</span>
            <span class="tile-value">{move || if active.get() { "On" } else { "Off" }}</span>
        </button>
    }
}
