//! Reducer helpers for system preference and panel transitions.

use crate::{
    model::{PersistedSettings, SystemSlider, SystemState, SystemToggle},
    reducer::{DesktopAction, RuntimeEffect},
};

pub(super) fn reduce_system_action(
    system: &mut SystemState,
    action: DesktopAction,
    effects: &mut Vec<RuntimeEffect>,
) {
    let persisted_before = system.persisted();
    match action {
        DesktopAction::ToggleSystem { toggle } => match toggle {
            SystemToggle::Wifi => system.wifi = !system.wifi,
            SystemToggle::Bluetooth => system.bluetooth = !system.bluetooth,
            SystemToggle::Airdrop => system.airdrop = !system.airdrop,
            SystemToggle::DarkMode => system.dark_mode = !system.dark_mode,
            SystemToggle::ControlCenter => system.control_center_open = !system.control_center_open,
            SystemToggle::Spotlight => set_spotlight_open(system, !system.spotlight_open, effects),
        },
        DesktopAction::SetSystemValue { slider, value } => {
            let value = clamp_percent(value);
            match slider {
                SystemSlider::Brightness => system.brightness = value,
                SystemSlider::Volume => system.volume = value,
            }
        }
        DesktopAction::SetWallpaper { wallpaper } => system.wallpaper = wallpaper,
        DesktopAction::CycleWallpaper => system.wallpaper = system.wallpaper.next(),
        DesktopAction::SetControlCenterOpen { open } => system.control_center_open = open,
        DesktopAction::SetSpotlightOpen { open } => set_spotlight_open(system, open, effects),
        DesktopAction::HydrateSettings { settings } => {
            apply_persisted(system, settings);
            effects.push(RuntimeEffect::ApplyColorScheme {
                dark: system.dark_mode,
            });
            return;
        }
        _ => return,
    }

    let persisted_after = system.persisted();
    if persisted_after != persisted_before {
        effects.push(RuntimeEffect::PersistSettings);
    }
    if persisted_after.dark_mode != persisted_before.dark_mode {
        effects.push(RuntimeEffect::ApplyColorScheme {
            dark: system.dark_mode,
        });
    }
}

fn set_spotlight_open(system: &mut SystemState, open: bool, effects: &mut Vec<RuntimeEffect>) {
    if open && !system.spotlight_open {
        effects.push(RuntimeEffect::FocusSpotlightInput);
    }
    system.spotlight_open = open;
}

fn apply_persisted(system: &mut SystemState, settings: PersistedSettings) {
    system.dark_mode = settings.dark_mode;
    system.wallpaper = settings.wallpaper;
    system.brightness = settings.brightness.min(100);
    system.volume = settings.volume.min(100);
}

fn clamp_percent(value: i32) -> u8 {
    value.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        model::{AppId, DesktopState, Wallpaper},
        reducer::reduce_desktop,
    };

    use super::*;

    #[test]
    fn toggles_flip_flags_and_persist_only_cosmetic_ones() {
        let mut state = DesktopState::default();

        let effects = reduce_desktop(
            &mut state,
            DesktopAction::ToggleSystem {
                toggle: SystemToggle::Wifi,
            },
        );
        assert!(!state.system.wifi);
        assert!(effects.is_empty());

        let effects = reduce_desktop(
            &mut state,
            DesktopAction::ToggleSystem {
                toggle: SystemToggle::DarkMode,
            },
        );
        assert!(state.system.dark_mode);
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::PersistSettings,
                RuntimeEffect::ApplyColorScheme { dark: true },
            ]
        );
    }

    #[test]
    fn slider_values_are_clamped_to_percent_range() {
        let mut state = DesktopState::default();

        let effects = reduce_desktop(
            &mut state,
            DesktopAction::SetSystemValue {
                slider: SystemSlider::Brightness,
                value: 42,
            },
        );
        assert_eq!(state.system.brightness, 42);
        assert_eq!(effects, vec![RuntimeEffect::PersistSettings]);

        reduce_desktop(
            &mut state,
            DesktopAction::SetSystemValue {
                slider: SystemSlider::Volume,
                value: 250,
            },
        );
        assert_eq!(state.system.volume, 100);

        reduce_desktop(
            &mut state,
            DesktopAction::SetSystemValue {
                slider: SystemSlider::Volume,
                value: -3,
            },
        );
        assert_eq!(state.system.volume, 0);
    }

    #[test]
    fn setting_unchanged_value_does_not_persist() {
        let mut state = DesktopState::default();

        let effects = reduce_desktop(
            &mut state,
            DesktopAction::SetSystemValue {
                slider: SystemSlider::Brightness,
                value: 100,
            },
        );

        assert!(effects.is_empty());
    }

    #[test]
    fn wallpaper_actions_select_and_cycle() {
        let mut state = DesktopState::default();

        reduce_desktop(
            &mut state,
            DesktopAction::SetWallpaper {
                wallpaper: Wallpaper::Monterey,
            },
        );
        assert_eq!(state.system.wallpaper, Wallpaper::Monterey);

        let effects = reduce_desktop(&mut state, DesktopAction::CycleWallpaper);
        assert_eq!(state.system.wallpaper, Wallpaper::Animated);
        assert_eq!(effects, vec![RuntimeEffect::PersistSettings]);
    }

    #[test]
    fn opening_spotlight_requests_input_focus_once() {
        let mut state = DesktopState::default();

        let effects = reduce_desktop(&mut state, DesktopAction::SetSpotlightOpen { open: true });
        assert!(state.system.spotlight_open);
        assert_eq!(effects, vec![RuntimeEffect::FocusSpotlightInput]);

        let effects = reduce_desktop(&mut state, DesktopAction::SetSpotlightOpen { open: true });
        assert!(effects.is_empty());

        let effects = reduce_desktop(
            &mut state,
            DesktopAction::ToggleSystem {
                toggle: SystemToggle::Spotlight,
            },
        );
        assert!(!state.system.spotlight_open);
        assert!(effects.is_empty());
    }

    #[test]
    fn control_center_panel_flag_is_not_persisted() {
        let mut state = DesktopState::default();

        let effects =
            reduce_desktop(&mut state, DesktopAction::SetControlCenterOpen { open: true });
        assert!(state.system.control_center_open);
        assert!(effects.is_empty());

        reduce_desktop(
            &mut state,
            DesktopAction::ToggleSystem {
                toggle: SystemToggle::ControlCenter,
            },
        );
        assert!(!state.system.control_center_open);
    }

    #[test]
    fn hydrate_restores_persisted_subset_only() {
        let mut state = DesktopState::default();
        reduce_desktop(
            &mut state,
            DesktopAction::OpenApp {
                app_id: AppId::Games,
                origin: None,
            },
        );
        let windows_before = state.windows.clone();

        let effects = reduce_desktop(
            &mut state,
            DesktopAction::HydrateSettings {
                settings: PersistedSettings {
                    dark_mode: true,
                    wallpaper: Wallpaper::Sonoma,
                    brightness: 42,
                    volume: 7,
                },
            },
        );

        assert!(state.system.dark_mode);
        assert_eq!(state.system.wallpaper, Wallpaper::Sonoma);
        assert_eq!(state.system.brightness, 42);
        assert_eq!(state.system.volume, 7);
        assert!(state.system.wifi);
        assert_eq!(state.windows, windows_before);
        assert_eq!(effects, vec![RuntimeEffect::ApplyColorScheme { dark: true }]);
    }
}
