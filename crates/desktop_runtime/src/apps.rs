//! Application registry and the content view mapped to every [`AppId`].

mod portfolio;
mod views;

use leptos::*;

use self::views::{
    AboutApp, ContactApp, DownloadsApp, ExperienceApp, GamesApp, ProjectsApp, SafariApp,
    SettingsApp, SkillsApp, TerminalApp, VsCodeApp,
};

use crate::model::AppId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockSection {
    Apps,
    Folders,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub app_id: AppId,
    pub dock_label: &'static str,
    pub icon: &'static str,
    pub dock_section: DockSection,
}

const APP_REGISTRY: [AppDescriptor; AppId::COUNT] = [
    app(AppId::About, "Finder", "/icons/finder.ico", DockSection::Apps),
    app(AppId::Safari, "Safari", "/icons/safari.ico", DockSection::Apps),
    app(AppId::VsCode, "VS Code", "/icons/vscode.ico", DockSection::Apps),
    app(AppId::Terminal, "Terminal", "/icons/terminal.png", DockSection::Apps),
    app(AppId::Projects, "Projects", "/icons/projects.ico", DockSection::Apps),
    app(AppId::Experience, "Experience", "/icons/anythingllm.ico", DockSection::Apps),
    app(AppId::Skills, "Skills", "/icons/typora.png", DockSection::Apps),
    app(AppId::Contact, "Contact", "/icons/mail.ico", DockSection::Apps),
    app(AppId::Games, "Games", "/icons/games.png", DockSection::Apps),
    app(AppId::Settings, "Settings", "/icons/settings.ico", DockSection::Apps),
    app(AppId::Downloads, "Downloads", "/icons/folder.svg", DockSection::Folders),
];

/// Dock entry with no window behind it; clicking it does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockPlaceholder {
    pub slug: &'static str,
    pub dock_label: &'static str,
    pub icon: &'static str,
}

/// Rendered after the folders section.
pub const TRASH: DockPlaceholder = DockPlaceholder {
    slug: "trash",
    dock_label: "Trash",
    icon: "/icons/trash.svg",
};

const fn app(
    app_id: AppId,
    dock_label: &'static str,
    icon: &'static str,
    dock_section: DockSection,
) -> AppDescriptor {
    AppDescriptor {
        app_id,
        dock_label,
        icon,
        dock_section,
    }
}

/// Every app in dock order.
pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

pub fn dock_apps(section: DockSection) -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|entry| entry.dock_section == section)
        .collect()
}

/// DOM id of the dock icon; its bounding box becomes the window's animation origin.
pub fn dock_item_dom_id(app_id: AppId) -> String {
    format!("dock-item-{}", app_id.slug())
}

pub fn dock_placeholder_dom_id(placeholder: DockPlaceholder) -> String {
    format!("dock-item-{}", placeholder.slug)
}

pub fn render_app_contents(app_id: AppId) -> View {
    match app_id {
        AppId::About => view! { <AboutApp /> }.into_view(),
        AppId::Projects => view! { <ProjectsApp /> }.into_view(),
        AppId::Experience => view! { <ExperienceApp /> }.into_view(),
        AppId::Skills => view! { <SkillsApp /> }.into_view(),
        AppId::Contact => view! { <ContactApp /> }.into_view(),
        AppId::Settings => view! { <SettingsApp /> }.into_view(),
        AppId::Safari => view! { <SafariApp /> }.into_view(),
        AppId::VsCode => view! { <VsCodeApp /> }.into_view(),
        AppId::Terminal => view! { <TerminalApp /> }.into_view(),
        AppId::Games => view! { <GamesApp /> }.into_view(),
        AppId::Downloads => view! { <DownloadsApp /> }.into_view(),
    }
}
