use std::ops::{Index, IndexMut};

use serde::{Deserialize, Deserializer, Serialize};

/// Height of the fixed menu bar; maximized windows are laid out below it.
pub const MENU_BAR_HEIGHT_PX: i32 = 30;
/// Viewports narrower than this render every window maximized.
pub const COMPACT_VIEWPORT_MAX_WIDTH_PX: i32 = 768;
/// Smallest width the window frame's resize handle will request.
pub const MIN_WINDOW_WIDTH: i32 = 320;
/// Smallest height the window frame's resize handle will request.
pub const MIN_WINDOW_HEIGHT: i32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppId {
    About,
    Projects,
    Experience,
    Skills,
    Contact,
    Settings,
    Safari,
    VsCode,
    Terminal,
    Games,
    Downloads,
}

impl AppId {
    pub const COUNT: usize = 11;

    pub const ALL: [AppId; Self::COUNT] = [
        Self::About,
        Self::Projects,
        Self::Experience,
        Self::Skills,
        Self::Contact,
        Self::Settings,
        Self::Safari,
        Self::VsCode,
        Self::Terminal,
        Self::Games,
        Self::Downloads,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::About => "About Me",
            Self::Projects => "Projects",
            Self::Experience => "Experience",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
            Self::Settings => "Settings",
            Self::Safari => "Safari",
            Self::VsCode => "VS Code",
            Self::Terminal => "Terminal",
            Self::Games => "Games",
            Self::Downloads => "Downloads",
        }
    }

    /// Stable lowercase identifier used for DOM ids.
    pub fn slug(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Contact => "contact",
            Self::Settings => "settings",
            Self::Safari => "safari",
            Self::VsCode => "vscode",
            Self::Terminal => "terminal",
            Self::Games => "games",
            Self::Downloads => "downloads",
        }
    }

    fn default_geometry(self) -> (WindowPosition, WindowSize) {
        let (x, y, width, height) = match self {
            Self::About => (50, 50, 800, 600),
            Self::Projects => (100, 100, 900, 700),
            Self::Experience => (150, 150, 700, 600),
            Self::Skills => (200, 200, 600, 500),
            Self::Contact => (250, 250, 500, 500),
            Self::Settings => (300, 300, 400, 400),
            Self::Safari => (80, 60, 1024, 700),
            Self::VsCode => (120, 80, 1000, 680),
            Self::Terminal => (160, 120, 680, 440),
            Self::Games => (140, 90, 800, 600),
            Self::Downloads => (220, 140, 720, 480),
        };
        (WindowPosition { x, y }, WindowSize { width, height })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

/// Screen rectangle of the dock icon a window was last launched from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OriginRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowState {
    pub app_id: AppId,
    pub title: &'static str,
    pub is_open: bool,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub position: WindowPosition,
    pub size: WindowSize,
    pub z_index: u32,
    pub origin: Option<OriginRect>,
}

impl WindowState {
    pub fn initial(app_id: AppId) -> Self {
        let (position, size) = app_id.default_geometry();
        Self {
            app_id,
            title: app_id.title(),
            is_open: false,
            is_minimized: false,
            is_maximized: false,
            position,
            size,
            z_index: 1,
            origin: None,
        }
    }

    /// Open and not minimized.
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }
}

/// Exactly one [`WindowState`] per [`AppId`], indexed by the id itself.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowTable {
    entries: [WindowState; AppId::COUNT],
}

impl WindowTable {
    pub fn iter(&self) -> impl Iterator<Item = &WindowState> {
        self.entries.iter()
    }
}

impl Default for WindowTable {
    fn default() -> Self {
        Self {
            entries: AppId::ALL.map(WindowState::initial),
        }
    }
}

impl Index<AppId> for WindowTable {
    type Output = WindowState;

    fn index(&self, app_id: AppId) -> &WindowState {
        &self.entries[app_id.index()]
    }
}

impl IndexMut<AppId> for WindowTable {
    fn index_mut(&mut self, app_id: AppId) -> &mut WindowState {
        &mut self.entries[app_id.index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wallpaper {
    Animated,
    #[default]
    Tahoe,
    Sonoma,
    Ventura,
    Monterey,
}

impl Wallpaper {
    pub const ALL: [Wallpaper; 5] = [
        Self::Animated,
        Self::Tahoe,
        Self::Sonoma,
        Self::Ventura,
        Self::Monterey,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Animated => "animated",
            Self::Tahoe => "tahoe",
            Self::Sonoma => "sonoma",
            Self::Ventura => "ventura",
            Self::Monterey => "monterey",
        }
    }

    /// Next wallpaper in the control-center cycle, wrapping at the end.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|w| *w == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemToggle {
    Wifi,
    Bluetooth,
    Airdrop,
    DarkMode,
    ControlCenter,
    Spotlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemSlider {
    Brightness,
    Volume,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemState {
    pub wifi: bool,
    pub bluetooth: bool,
    pub airdrop: bool,
    pub dark_mode: bool,
    pub brightness: u8,
    pub volume: u8,
    pub control_center_open: bool,
    pub spotlight_open: bool,
    pub wallpaper: Wallpaper,
}

impl Default for SystemState {
    fn default() -> Self {
        Self {
            wifi: true,
            bluetooth: true,
            airdrop: false,
            dark_mode: false,
            brightness: 100,
            volume: 50,
            control_center_open: false,
            spotlight_open: false,
            wallpaper: Wallpaper::default(),
        }
    }
}

impl SystemState {
    pub fn persisted(&self) -> PersistedSettings {
        PersistedSettings {
            dark_mode: self.dark_mode,
            wallpaper: self.wallpaper,
            brightness: self.brightness,
            volume: self.volume,
        }
    }
}

/// The only desktop state that survives a reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSettings {
    pub dark_mode: bool,
    pub wallpaper: Wallpaper,
    #[serde(deserialize_with = "deserialize_percent")]
    pub brightness: u8,
    #[serde(deserialize_with = "deserialize_percent")]
    pub volume: u8,
}

/// Reads any integer and clamps it to `0..=100`.
fn deserialize_percent<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(raw.clamp(0, 100) as u8)
}

#[derive(Debug, Clone, PartialEq)]
pub struct DesktopState {
    pub windows: WindowTable,
    pub active_app: Option<AppId>,
    pub max_z_index: u32,
    pub system: SystemState,
}

impl Default for DesktopState {
    fn default() -> Self {
        let mut windows = WindowTable::default();
        windows[AppId::About].is_open = true;
        Self {
            windows,
            active_app: Some(AppId::About),
            max_z_index: 1,
            system: SystemState::default(),
        }
    }
}

impl DesktopState {
    pub fn window(&self, app_id: AppId) -> &WindowState {
        &self.windows[app_id]
    }

    pub fn active_app(&self) -> Option<AppId> {
        self.active_app
    }

    pub fn is_active(&self, app_id: AppId) -> bool {
        self.active_app == Some(app_id)
    }

    /// Open windows (minimized included) from bottom to top of the stack.
    pub fn open_windows(&self) -> Vec<&WindowState> {
        let mut open: Vec<&WindowState> = self.windows.iter().filter(|w| w.is_open).collect();
        open.sort_by_key(|w| (w.z_index, w.app_id));
        open
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn initial_state_opens_only_about() {
        let state = DesktopState::default();

        let open: Vec<AppId> = state.open_windows().iter().map(|w| w.app_id).collect();
        assert_eq!(open, vec![AppId::About]);
        assert_eq!(state.active_app(), Some(AppId::About));
        assert_eq!(state.max_z_index, 1);
        assert!(state.windows.iter().all(|w| w.z_index == 1));
        assert!(state.windows.iter().all(|w| w.origin.is_none()));
    }

    #[test]
    fn window_table_has_one_entry_per_app_in_order() {
        let table = WindowTable::default();

        let ids: Vec<AppId> = table.iter().map(|w| w.app_id).collect();
        assert_eq!(ids, AppId::ALL.to_vec());
        for app_id in AppId::ALL {
            assert_eq!(table[app_id].app_id, app_id);
            assert_eq!(table[app_id].title, app_id.title());
        }
    }

    #[test]
    fn default_geometry_matches_app() {
        let table = WindowTable::default();

        assert_eq!(table[AppId::Safari].position, WindowPosition { x: 80, y: 60 });
        assert_eq!(
            table[AppId::Safari].size,
            WindowSize {
                width: 1024,
                height: 700
            }
        );
        assert_eq!(table[AppId::About].title, "About Me");
    }

    #[test]
    fn wallpaper_cycle_wraps() {
        assert_eq!(Wallpaper::Animated.next(), Wallpaper::Tahoe);
        assert_eq!(Wallpaper::Monterey.next(), Wallpaper::Animated);
    }

    #[test]
    fn persisted_settings_use_camel_case_keys() {
        let settings = SystemState {
            dark_mode: true,
            brightness: 42,
            ..SystemState::default()
        }
        .persisted();

        let json = serde_json::to_value(settings).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "darkMode": true,
                "wallpaper": "tahoe",
                "brightness": 42,
                "volume": 50,
            })
        );
    }

    #[test]
    fn out_of_range_percentages_are_clamped_on_decode() {
        let settings: PersistedSettings = serde_json::from_value(serde_json::json!({
            "darkMode": true,
            "wallpaper": "ventura",
            "brightness": 300,
            "volume": -5,
        }))
        .expect("decode");

        assert_eq!(
            settings,
            PersistedSettings {
                dark_mode: true,
                wallpaper: Wallpaper::Ventura,
                brightness: 100,
                volume: 0,
            }
        );
    }
}
