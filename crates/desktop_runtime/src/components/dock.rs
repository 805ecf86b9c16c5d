use super::*;
use crate::apps::{
    dock_apps, dock_item_dom_id, dock_placeholder_dom_id, AppDescriptor, DockPlaceholder,
    DockSection, TRASH,
};

#[component]
pub(super) fn Dock() -> impl IntoView {
    view! {
        <nav class="dock" aria-label="Dock">
            <div class="dock-items">
                {dock_apps(DockSection::Apps)
                    .into_iter()
                    .map(|entry| view! { <DockItem entry=entry /> })
                    .collect_view()}
                <div class="dock-separator" aria-hidden="true"></div>
                {dock_apps(DockSection::Folders)
                    .into_iter()
                    .map(|entry| view! { <DockItem entry=entry /> })
                    .collect_view()}
                <DockPlaceholderItem placeholder=TRASH />
            </div>
        </nav>
    }
}

#[component]
fn DockItem(entry: AppDescriptor) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let app_id = entry.app_id;
    let is_open = create_memo(move |_| runtime.state.get().window(app_id).is_open);

    let launch = move |_| {
        let origin = runtime.host.get_value().dock_icon_origin(app_id);
        runtime.dispatch_action(DesktopAction::OpenApp { app_id, origin });
    };

    view! {
        <button
            id=dock_item_dom_id(app_id)
            class="dock-item"
            aria-label=entry.dock_label
            on:click=launch
        >
            <img class="dock-icon" src=entry.icon alt=entry.dock_label draggable="false" />
            <span class="dock-tooltip">{entry.dock_label}</span>
            <Show when=move || is_open.get() fallback=|| ()>
                <span class="dock-open-indicator" aria-hidden="true"></span>
            </Show>
        </button>
    }
}

#[component]
fn DockPlaceholderItem(placeholder: DockPlaceholder) -> impl IntoView {
    view! {
        <button
            id=dock_placeholder_dom_id(placeholder)
            class="dock-item"
            aria-label=placeholder.dock_label
        >
            <img
                class="dock-icon"
                src=placeholder.icon
                alt=placeholder.dock_label
                draggable="false"
            />
            <span class="dock-tooltip">{placeholder.dock_label}</span>
        </button>
    }
}
