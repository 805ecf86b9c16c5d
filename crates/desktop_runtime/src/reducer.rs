//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

mod system;

use crate::model::{
    AppId, DesktopState, OriginRect, PersistedSettings, SystemSlider, SystemToggle, Wallpaper,
    WindowPosition, WindowSize,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open (or re-open, or restore) an app window and bring it to the front.
    OpenApp {
        /// App to open.
        app_id: AppId,
        /// Screen rect of the launching dock icon; `None` keeps the previous origin.
        origin: Option<OriginRect>,
    },
    /// Hide an app window, keeping its geometry for the next open.
    CloseApp {
        /// App to close.
        app_id: AppId,
    },
    /// Minimize an app window into the dock.
    MinimizeApp {
        /// App to minimize.
        app_id: AppId,
    },
    /// Flip the maximized flag of an app window.
    ToggleMaximizeApp {
        /// App whose maximized flag flips.
        app_id: AppId,
    },
    /// Focus (and raise) an app window.
    FocusApp {
        /// App to focus.
        app_id: AppId,
    },
    /// Overwrite the stored top-left position of an app window.
    UpdateWindowPosition {
        /// App being moved.
        app_id: AppId,
        /// New top-left offset in desktop coordinates.
        position: WindowPosition,
    },
    /// Overwrite the stored size of an app window.
    UpdateWindowSize {
        /// App being resized.
        app_id: AppId,
        /// New window size.
        size: WindowSize,
    },
    /// Flip a boolean system preference or panel flag.
    ToggleSystem {
        /// Flag to flip.
        toggle: SystemToggle,
    },
    /// Set a numeric system preference.
    SetSystemValue {
        /// Slider being set.
        slider: SystemSlider,
        /// Requested value, clamped to `0..=100`.
        value: i32,
    },
    /// Select a wallpaper.
    SetWallpaper {
        /// Wallpaper to show.
        wallpaper: Wallpaper,
    },
    /// Advance to the next wallpaper in the control-center cycle.
    CycleWallpaper,
    /// Open or close the control center panel.
    SetControlCenterOpen {
        /// Whether the panel is open.
        open: bool,
    },
    /// Open or close spotlight search.
    SetSpotlightOpen {
        /// Whether spotlight is open.
        open: bool,
    },
    /// Apply settings restored from preference storage at boot.
    HydrateSettings {
        /// Persisted settings payload.
        settings: PersistedSettings,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Write the persisted subset of system settings.
    PersistSettings,
    /// Sync the document color scheme with the dark-mode flag.
    ApplyColorScheme {
        /// Whether dark mode is on.
        dark: bool,
    },
    /// Move keyboard focus into the spotlight search field.
    FocusSpotlightInput,
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// Every action is valid for every [`AppId`], so the reducer is total. Window actions never
/// emit effects because window layout is not persisted.
pub fn reduce_desktop(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenApp { app_id, origin } => {
            let z_index = next_z_index(state);
            let window = &mut state.windows[app_id];
            window.is_open = true;
            window.is_minimized = false;
            window.z_index = z_index;
            if origin.is_some() {
                window.origin = origin;
            }
            state.active_app = Some(app_id);
        }
        DesktopAction::CloseApp { app_id } => {
            state.windows[app_id].is_open = false;
            release_focus(state, app_id);
        }
        DesktopAction::MinimizeApp { app_id } => {
            state.windows[app_id].is_minimized = true;
            release_focus(state, app_id);
        }
        DesktopAction::ToggleMaximizeApp { app_id } => {
            let window = &mut state.windows[app_id];
            window.is_maximized = !window.is_maximized;
        }
        DesktopAction::FocusApp { app_id } => {
            if state.active_app != Some(app_id) {
                let z_index = next_z_index(state);
                let window = &mut state.windows[app_id];
                window.z_index = z_index;
                window.is_minimized = false;
                state.active_app = Some(app_id);
            }
        }
        DesktopAction::UpdateWindowPosition { app_id, position } => {
            state.windows[app_id].position = position;
        }
        DesktopAction::UpdateWindowSize { app_id, size } => {
            state.windows[app_id].size = size;
        }
        action => system::reduce_system_action(&mut state.system, action, &mut effects),
    }
    effects
}

fn next_z_index(state: &mut DesktopState) -> u32 {
    state.max_z_index = state.max_z_index.saturating_add(1);
    state.max_z_index
}

fn release_focus(state: &mut DesktopState, app_id: AppId) {
    if state.active_app == Some(app_id) {
        state.active_app = None;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn dispatch(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
        reduce_desktop(state, action)
    }

    fn open(state: &mut DesktopState, app_id: AppId) {
        dispatch(
            state,
            DesktopAction::OpenApp {
                app_id,
                origin: None,
            },
        );
    }

    fn dock_origin() -> OriginRect {
        OriginRect {
            left: 10.0,
            top: 20.0,
            width: 40.0,
            height: 40.0,
        }
    }

    #[test]
    fn open_assigns_next_z_index_and_focuses() {
        for app_id in AppId::ALL {
            let mut state = DesktopState::default();
            dispatch(&mut state, DesktopAction::MinimizeApp { app_id });
            let max_before = state.max_z_index;

            let effects = dispatch(
                &mut state,
                DesktopAction::OpenApp {
                    app_id,
                    origin: None,
                },
            );

            let window = state.window(app_id);
            assert!(window.is_open);
            assert!(!window.is_minimized);
            assert_eq!(window.z_index, max_before + 1);
            assert_eq!(state.max_z_index, max_before + 1);
            assert_eq!(state.active_app(), Some(app_id));
            assert!(effects.is_empty());
        }
    }

    #[test]
    fn open_on_focused_window_still_promotes() {
        let mut state = DesktopState::default();
        assert!(state.is_active(AppId::About));

        open(&mut state, AppId::About);

        assert_eq!(state.window(AppId::About).z_index, 2);
        assert_eq!(state.max_z_index, 2);
    }

    #[test]
    fn open_keeps_previous_origin_when_none_supplied() {
        let mut state = DesktopState::default();
        dispatch(
            &mut state,
            DesktopAction::OpenApp {
                app_id: AppId::Safari,
                origin: Some(dock_origin()),
            },
        );
        dispatch(
            &mut state,
            DesktopAction::CloseApp {
                app_id: AppId::Safari,
            },
        );
        open(&mut state, AppId::Safari);
        assert_eq!(state.window(AppId::Safari).origin, Some(dock_origin()));

        let moved = OriginRect {
            left: 300.0,
            ..dock_origin()
        };
        dispatch(
            &mut state,
            DesktopAction::OpenApp {
                app_id: AppId::Safari,
                origin: Some(moved),
            },
        );
        assert_eq!(state.window(AppId::Safari).origin, Some(moved));
    }

    #[test]
    fn close_hides_window_and_keeps_layout() {
        let mut state = DesktopState::default();
        dispatch(
            &mut state,
            DesktopAction::OpenApp {
                app_id: AppId::Projects,
                origin: Some(dock_origin()),
            },
        );
        dispatch(
            &mut state,
            DesktopAction::UpdateWindowPosition {
                app_id: AppId::Projects,
                position: WindowPosition { x: 7, y: 9 },
            },
        );
        let before = state.window(AppId::Projects).clone();
        let about_before = state.window(AppId::About).clone();

        dispatch(
            &mut state,
            DesktopAction::CloseApp {
                app_id: AppId::Projects,
            },
        );

        let after = state.window(AppId::Projects);
        assert!(!after.is_open);
        assert_eq!(after.position, before.position);
        assert_eq!(after.size, before.size);
        assert_eq!(after.z_index, before.z_index);
        assert_eq!(after.origin, before.origin);
        assert_eq!(state.active_app(), None);
        assert_eq!(state.window(AppId::About), &about_before);
    }

    #[test]
    fn closing_inactive_window_keeps_active_app() {
        let mut state = DesktopState::default();
        open(&mut state, AppId::Skills);
        open(&mut state, AppId::Contact);

        dispatch(
            &mut state,
            DesktopAction::CloseApp {
                app_id: AppId::Skills,
            },
        );

        assert_eq!(state.active_app(), Some(AppId::Contact));
    }

    #[test]
    fn minimize_clears_focus_but_keeps_window_open_and_stacked() {
        let mut state = DesktopState::default();
        let z_before = state.window(AppId::About).z_index;

        dispatch(
            &mut state,
            DesktopAction::MinimizeApp {
                app_id: AppId::About,
            },
        );

        let window = state.window(AppId::About);
        assert!(window.is_open);
        assert!(window.is_minimized);
        assert_eq!(window.z_index, z_before);
        assert_eq!(state.active_app(), None);
    }

    #[test]
    fn minimize_preserves_origin() {
        let mut state = DesktopState::default();
        dispatch(
            &mut state,
            DesktopAction::OpenApp {
                app_id: AppId::Safari,
                origin: Some(dock_origin()),
            },
        );
        dispatch(
            &mut state,
            DesktopAction::MinimizeApp {
                app_id: AppId::Safari,
            },
        );

        assert_eq!(state.window(AppId::Safari).origin, Some(dock_origin()));
    }

    #[test]
    fn toggle_maximize_is_its_own_inverse() {
        let mut state = DesktopState::default();
        let before = state.window(AppId::About).clone();

        dispatch(
            &mut state,
            DesktopAction::ToggleMaximizeApp {
                app_id: AppId::About,
            },
        );
        let maximized = state.window(AppId::About).clone();
        assert!(maximized.is_maximized);
        assert_eq!(maximized.position, before.position);
        assert_eq!(maximized.size, before.size);

        dispatch(
            &mut state,
            DesktopAction::ToggleMaximizeApp {
                app_id: AppId::About,
            },
        );
        assert_eq!(state.window(AppId::About), &before);
    }

    #[test]
    fn repeated_focus_only_promotes_once() {
        let mut state = DesktopState::default();
        open(&mut state, AppId::Terminal);

        dispatch(
            &mut state,
            DesktopAction::FocusApp {
                app_id: AppId::About,
            },
        );
        let after_first = state.clone();
        dispatch(
            &mut state,
            DesktopAction::FocusApp {
                app_id: AppId::About,
            },
        );

        assert_eq!(after_first.window(AppId::About).z_index, 3);
        assert_eq!(state, after_first);
    }

    #[test]
    fn focus_restores_minimized_window() {
        let mut state = DesktopState::default();
        dispatch(
            &mut state,
            DesktopAction::MinimizeApp {
                app_id: AppId::About,
            },
        );

        dispatch(
            &mut state,
            DesktopAction::FocusApp {
                app_id: AppId::About,
            },
        );

        assert!(!state.window(AppId::About).is_minimized);
        assert_eq!(state.active_app(), Some(AppId::About));
        assert_eq!(state.window(AppId::About).z_index, 2);
    }

    #[test]
    fn most_recent_open_or_focus_is_strictly_on_top() {
        let mut state = DesktopState::default();
        let sequence = [
            DesktopAction::OpenApp {
                app_id: AppId::Games,
                origin: None,
            },
            DesktopAction::FocusApp {
                app_id: AppId::About,
            },
            DesktopAction::OpenApp {
                app_id: AppId::VsCode,
                origin: None,
            },
            DesktopAction::OpenApp {
                app_id: AppId::Games,
                origin: None,
            },
            DesktopAction::FocusApp {
                app_id: AppId::VsCode,
            },
            DesktopAction::FocusApp {
                app_id: AppId::Downloads,
            },
        ];

        for action in sequence {
            let target = match &action {
                DesktopAction::OpenApp { app_id, .. } | DesktopAction::FocusApp { app_id } => {
                    *app_id
                }
                _ => unreachable!(),
            };
            dispatch(&mut state, action);
            let top = state.window(target).z_index;
            assert_eq!(top, state.max_z_index);
            for other in AppId::ALL.into_iter().filter(|id| *id != target) {
                assert!(state.window(other).z_index < top, "{other:?} not below {target:?}");
            }
        }
    }

    #[test]
    fn geometry_updates_are_idempotent_overwrites() {
        let mut state = DesktopState::default();
        let position = WindowPosition { x: -400, y: 5000 };
        let size = WindowSize {
            width: 10,
            height: 3,
        };

        for _ in 0..2 {
            dispatch(
                &mut state,
                DesktopAction::UpdateWindowPosition {
                    app_id: AppId::Contact,
                    position,
                },
            );
            dispatch(
                &mut state,
                DesktopAction::UpdateWindowSize {
                    app_id: AppId::Contact,
                    size,
                },
            );
        }

        assert_eq!(state.window(AppId::Contact).position, position);
        assert_eq!(state.window(AppId::Contact).size, size);
        assert_eq!(state.max_z_index, 1);
    }

    #[test]
    fn open_focus_minimize_scenario() {
        let mut state = DesktopState::default();

        open(&mut state, AppId::Projects);
        assert!(state.window(AppId::Projects).is_open);
        assert_eq!(state.window(AppId::Projects).z_index, 2);
        assert_eq!(state.max_z_index, 2);
        assert_eq!(state.active_app(), Some(AppId::Projects));

        let projects = state.window(AppId::Projects).clone();
        dispatch(
            &mut state,
            DesktopAction::FocusApp {
                app_id: AppId::About,
            },
        );
        assert_eq!(state.window(AppId::About).z_index, 3);
        assert_eq!(state.max_z_index, 3);
        assert_eq!(state.active_app(), Some(AppId::About));
        assert_eq!(state.window(AppId::Projects), &projects);

        dispatch(
            &mut state,
            DesktopAction::MinimizeApp {
                app_id: AppId::About,
            },
        );
        assert!(state.window(AppId::About).is_minimized);
        assert_eq!(state.active_app(), None);
    }

    #[test]
    fn open_windows_follow_stacking_order() {
        let mut state = DesktopState::default();
        open(&mut state, AppId::Terminal);
        open(&mut state, AppId::Safari);
        dispatch(
            &mut state,
            DesktopAction::FocusApp {
                app_id: AppId::Terminal,
            },
        );

        let order: Vec<AppId> = state.open_windows().iter().map(|w| w.app_id).collect();
        assert_eq!(order, vec![AppId::About, AppId::Safari, AppId::Terminal]);
    }
}
