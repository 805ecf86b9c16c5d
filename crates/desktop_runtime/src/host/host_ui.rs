#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    model::{AppId, OriginRect},
    window_manager::Viewport,
};

/// DOM id of the spotlight search field.
pub(crate) const SPOTLIGHT_INPUT_DOM_ID: &str = "spotlight-search-input";

const DARK_CLASS: &str = "dark";

pub(super) fn viewport() -> Viewport {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(1440);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(900);

            return Viewport { width, height };
        }
    }

    Viewport {
        width: 1440,
        height: 900,
    }
}

pub(super) fn apply_color_scheme(dark: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            return;
        };
        let classes = root.class_list();
        let result = if dark {
            classes.add_1(DARK_CLASS)
        } else {
            classes.remove_1(DARK_CLASS)
        };
        if result.is_err() {
            leptos::logging::warn!("toggle `{DARK_CLASS}` class failed");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (dark, DARK_CLASS);
}

pub(super) fn focus_element_by_id(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let id = id.to_string();
        // The element is mounted by the same render pass that queued this effect.
        let callback = Closure::once_into_js(move || {
            let element = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id(&id))
                .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
            if let Some(element) = element {
                let _ = element.focus();
            }
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}

pub(super) fn dock_icon_origin(app_id: AppId) -> Option<OriginRect> {
    #[cfg(target_arch = "wasm32")]
    {
        let element = web_sys::window()?
            .document()?
            .get_element_by_id(&crate::apps::dock_item_dom_id(app_id))?;
        let rect = element.get_bounding_client_rect();
        Some(OriginRect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = app_id;
        None
    }
}

/// Uniform index in `0..len`; always `0` off the browser.
pub(crate) fn random_index(len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    #[cfg(target_arch = "wasm32")]
    {
        ((js_sys::Math::random() * len as f64) as usize).min(len - 1)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn native_fallbacks_are_stable() {
        assert_eq!(random_index(0), 0);
        assert_eq!(random_index(8), 0);
        assert_eq!(
            viewport(),
            Viewport {
                width: 1440,
                height: 900
            }
        );
        assert_eq!(dock_icon_origin(AppId::Safari), None);
    }
}
