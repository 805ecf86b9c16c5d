use std::time::Duration;

use super::*;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MENU_LABELS: [&str; 6] = ["File", "Edit", "View", "Go", "Window", "Help"];

/// Wall-clock fields shown in the menu bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MenuBarClock {
    /// `0` is Sunday.
    weekday: u32,
    /// `0` is January.
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl MenuBarClock {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                weekday: date.get_day(),
                month: date.get_month(),
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                weekday: 4,
                month: 0,
                day: 1,
                hour: 0,
                minute: 0,
            }
        }
    }
}

/// Formats the clock as `EEE MMM d  h:mm AM`, e.g. `Mon Jan 5  3:07 PM`.
fn format_menu_bar_clock(clock: MenuBarClock) -> String {
    let weekday = WEEKDAYS[clock.weekday as usize % WEEKDAYS.len()];
    let month = MONTHS[clock.month as usize % MONTHS.len()];
    let meridiem = if clock.hour < 12 { "AM" } else { "PM" };
    let hour = match clock.hour % 12 {
        0 => 12,
        hour => hour,
    };
    format!(
        "{weekday} {month} {}  {hour}:{:02} {meridiem}",
        clock.day, clock.minute
    )
}

#[component]
pub(super) fn MenuBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let apple_menu_open = create_rw_signal(false);
    let clock = create_rw_signal(MenuBarClock::now());

    if let Ok(interval) =
        set_interval_with_handle(move || clock.set(MenuBarClock::now()), Duration::from_secs(1))
    {
        on_cleanup(move || interval.clear());
    }

    let open_from_menu = move |app_id: AppId| {
        apple_menu_open.set(false);
        runtime.dispatch_action(DesktopAction::OpenApp {
            app_id,
            origin: None,
        });
    };

    view! {
        <header class="menu-bar">
            <div class="menu-bar-left">
                <button
                    class="apple-menu-toggle"
                    aria-label="Apple menu"
                    aria-expanded=move || apple_menu_open.get().to_string()
                    on:click=move |_| apple_menu_open.update(|open| *open = !*open)
                >
                    <img src="/icons/apple.svg" alt="" />
                </button>
                <Show when=move || apple_menu_open.get() fallback=|| ()>
                    <ul class="apple-menu" role="menu">
                        <li role="menuitem" on:click=move |_| open_from_menu(AppId::About)>
                            "About This Mac"
                        </li>
                        <li role="menuitem" on:click=move |_| open_from_menu(AppId::Settings)>
                            "System Settings..."
                        </li>
                    </ul>
                </Show>
                <span class="menu-bar-app-name">"Finder"</span>
                {MENU_LABELS
                    .iter()
                    .map(|label| view! { <span class="menu-bar-label">{*label}</span> })
                    .collect_view()}
            </div>
            <div class="menu-bar-right">
                <button
                    class="menu-bar-button"
                    aria-label="Spotlight Search"
                    on:click=move |_| {
                        runtime.dispatch_action(DesktopAction::ToggleSystem {
                            toggle: SystemToggle::Spotlight,
                        })
                    }
                >
                    <img src="/icons/search.svg" alt="" />
                </button>
                <button
                    id="control-center-toggle"
                    class="menu-bar-button"
                    aria-label="Control Center"
                    on:click=move |_| {
                        runtime.dispatch_action(DesktopAction::ToggleSystem {
                            toggle: SystemToggle::ControlCenter,
                        })
                    }
                >
                    <img src="/icons/control-center.svg" alt="" />
                </button>
                <time class="menu-bar-clock">{move || format_menu_bar_clock(clock.get())}</time>
            </div>
        </header>
    }
}
