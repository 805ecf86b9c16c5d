use super::*;
use crate::{
    apps,
    model::{WindowPosition, WindowSize},
    window_manager::{
        dragged_position, opening_frame, renders_maximized, resized_dimensions, window_frame,
        Viewport,
    },
};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

/// Pointer and window geometry captured when a drag or resize starts.
#[derive(Debug, Clone, Copy)]
struct PointerGesture {
    pointer_x: i32,
    pointer_y: i32,
    position: WindowPosition,
    size: WindowSize,
}

impl PointerGesture {
    fn delta(&self, ev: &web_sys::PointerEvent) -> (i32, i32) {
        (ev.client_x() - self.pointer_x, ev.client_y() - self.pointer_y)
    }
}

/// Action that raises a pressed window, or `None` when it already has focus.
fn press_focus_action(app_id: AppId, is_active: bool) -> Option<DesktopAction> {
    (!is_active).then_some(DesktopAction::FocusApp { app_id })
}

#[component]
pub(super) fn DesktopWindow(
    app_id: AppId,
    #[prop(into)] viewport: Signal<Viewport>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window = create_memo(move |_| runtime.state.get().window(app_id).clone());
    let is_active = create_memo(move |_| runtime.state.get().is_active(app_id));
    let maximized = move || renders_maximized(&window.get(), viewport.get());
    let settled = create_rw_signal(false);
    let drag = store_value(None::<PointerGesture>);
    let resize = store_value(None::<PointerGesture>);

    request_animation_frame(move || settled.set(true));

    let begin_gesture = move |ev: &web_sys::PointerEvent| {
        let win = window.get_untracked();
        PointerGesture {
            pointer_x: ev.client_x(),
            pointer_y: ev.client_y(),
            position: win.position,
            size: win.size,
        }
    };

    let raise = move || {
        if let Some(action) = press_focus_action(app_id, is_active.get_untracked()) {
            runtime.dispatch_action(action);
        }
    };
    let focus = move |_: web_sys::PointerEvent| raise();
    let toggle_maximize = move || {
        if !viewport.get_untracked().is_compact() {
            runtime.dispatch_action(DesktopAction::ToggleMaximizeApp { app_id });
        }
    };

    let begin_move = move |ev: web_sys::PointerEvent| {
        let pinned = renders_maximized(&window.get_untracked(), viewport.get_untracked());
        if pinned || !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        drag.set_value(Some(begin_gesture(&ev)));
    };
    let update_move = move |ev: web_sys::PointerEvent| {
        let Some(gesture) = drag.get_value() else {
            return;
        };
        let (dx, dy) = gesture.delta(&ev);
        runtime.dispatch_action(DesktopAction::UpdateWindowPosition {
            app_id,
            position: dragged_position(gesture.position, dx, dy),
        });
    };
    let end_move = move |_| drag.set_value(None);

    let begin_resize = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        raise();
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        resize.set_value(Some(begin_gesture(&ev)));
    };
    let update_resize = move |ev: web_sys::PointerEvent| {
        let Some(gesture) = resize.get_value() else {
            return;
        };
        let (dx, dy) = gesture.delta(&ev);
        let (width, height) =
            resized_dimensions(gesture.size.width, gesture.size.height, dx, dy);
        runtime.dispatch_action(DesktopAction::UpdateWindowSize {
            app_id,
            size: WindowSize { width, height },
        });
    };
    let end_resize = move |_| resize.set_value(None);

    let style = move || {
        let win = window.get();
        let frame = if settled.get() {
            window_frame(&win, viewport.get())
        } else {
            opening_frame(&win, viewport.get())
        };
        frame.css(win.z_index)
    };
    let contents = apps::render_app_contents(app_id);

    view! {
        <section
            class="desktop-window"
            class:focused=move || is_active.get()
            class:minimized=move || window.get().is_minimized
            class:maximized=maximized
            style=style
            role="dialog"
            aria-label=app_id.title()
            on:pointerdown=focus
        >
            <header
                class="titlebar"
                on:pointerdown=begin_move
                on:pointermove=update_move
                on:pointerup=end_move
                on:pointercancel=end_move
                on:dblclick=move |ev: web_sys::MouseEvent| {
                    stop_mouse_event(&ev);
                    toggle_maximize();
                }
            >
                <div class="traffic-lights">
                    <button
                        class="traffic-light close"
                        aria-label="Close window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:dblclick=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::CloseApp { app_id });
                        }
                    />
                    <button
                        class="traffic-light minimize"
                        aria-label="Minimize window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:dblclick=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::MinimizeApp { app_id });
                        }
                    />
                    <button
                        class="traffic-light maximize"
                        disabled=move || viewport.get().is_compact()
                        aria-label=move || {
                            if window.get().is_maximized { "Restore window" } else { "Maximize window" }
                        }
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:dblclick=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            toggle_maximize();
                        }
                    />
                </div>
                <span class="titlebar-title">{app_id.title()}</span>
            </header>
            <div class="window-body">{contents}</div>
            <Show when=move || !maximized() fallback=|| ()>
                <div
                    class="window-resize-handle south-east"
                    aria-hidden="true"
                    on:pointerdown=begin_resize
                    on:pointermove=update_resize
                    on:pointerup=end_resize
                    on:pointercancel=end_resize
                />
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{model::DesktopState, reducer::reduce_desktop};

    #[test]
    fn pressing_a_background_window_raises_it() {
        let mut state = DesktopState::default();
        reduce_desktop(
            &mut state,
            DesktopAction::OpenApp {
                app_id: AppId::Projects,
                origin: None,
            },
        );
        assert_eq!(press_focus_action(AppId::Projects, state.is_active(AppId::Projects)), None);

        let action = press_focus_action(AppId::About, state.is_active(AppId::About))
            .expect("background window gets focused");
        assert_eq!(action, DesktopAction::FocusApp { app_id: AppId::About });

        reduce_desktop(&mut state, action);
        assert_eq!(state.active_app(), Some(AppId::About));
        assert!(state.window(AppId::About).z_index > state.window(AppId::Projects).z_index);
    }
}
