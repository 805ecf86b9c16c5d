//! Pure layout helpers that turn stored window state into rendered geometry.
//!
//! Stored position/size is only ever written by the reducer. Maximize and compact-viewport
//! behavior is computed here at render time, so toggling maximize can never corrupt the
//! geometry a window restores to.

use crate::model::{
    OriginRect, WindowPosition, WindowState, COMPACT_VIEWPORT_MAX_WIDTH_PX, MENU_BAR_HEIGHT_PX,
    MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};

/// Browser viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    /// Phone-sized viewports force every window to render maximized.
    pub fn is_compact(self) -> bool {
        self.width < COMPACT_VIEWPORT_MAX_WIDTH_PX
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl From<OriginRect> for LayoutRect {
    fn from(origin: OriginRect) -> Self {
        Self {
            x: origin.left,
            y: origin.top,
            w: origin.width,
            h: origin.height,
        }
    }
}

/// A window's rendered rectangle plus the transition properties the frame animates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowFrame {
    pub rect: LayoutRect,
    pub opacity: f64,
    pub scale: f64,
}

impl WindowFrame {
    /// Inline CSS for an absolutely positioned frame at this geometry.
    pub fn css(&self, z_index: u32) -> String {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;opacity:{};transform:scale({});z-index:{};",
            self.rect.x, self.rect.y, self.rect.w, self.rect.h, self.opacity, self.scale, z_index
        )
    }
}

/// Whether the window renders at full desktop size in this viewport.
pub fn renders_maximized(window: &WindowState, viewport: Viewport) -> bool {
    window.is_maximized || viewport.is_compact()
}

/// Rectangle a window occupies when shown.
pub fn effective_window_rect(window: &WindowState, viewport: Viewport) -> LayoutRect {
    if renders_maximized(window, viewport) {
        return LayoutRect {
            x: 0.0,
            y: f64::from(MENU_BAR_HEIGHT_PX),
            w: f64::from(viewport.width),
            h: f64::from((viewport.height - MENU_BAR_HEIGHT_PX).max(0)),
        };
    }

    LayoutRect {
        x: f64::from(window.position.x),
        y: f64::from(window.position.y),
        w: f64::from(window.size.width),
        h: f64::from(window.size.height),
    }
}

/// Resting frame for a window: collapsed into its dock icon when minimized.
pub fn window_frame(window: &WindowState, viewport: Viewport) -> WindowFrame {
    if window.is_minimized {
        return match window.origin {
            Some(origin) => WindowFrame {
                rect: origin.into(),
                opacity: 0.0,
                scale: 0.0,
            },
            None => WindowFrame {
                rect: effective_window_rect(window, viewport),
                opacity: 0.0,
                scale: 0.0,
            },
        };
    }

    WindowFrame {
        rect: effective_window_rect(window, viewport),
        opacity: 1.0,
        scale: 1.0,
    }
}

/// Frame a window starts from when it first appears.
pub fn opening_frame(window: &WindowState, viewport: Viewport) -> WindowFrame {
    if renders_maximized(window, viewport) {
        return WindowFrame {
            rect: effective_window_rect(window, viewport),
            opacity: 0.0,
            scale: 0.95,
        };
    }

    match window.origin {
        Some(origin) => WindowFrame {
            rect: origin.into(),
            opacity: 0.0,
            scale: 0.0,
        },
        None => WindowFrame {
            rect: effective_window_rect(window, viewport),
            opacity: 0.0,
            scale: 0.9,
        },
    }
}

/// Position requested by a title-bar drag that moved the pointer by `(dx, dy)`.
pub fn dragged_position(start: WindowPosition, dx: i32, dy: i32) -> WindowPosition {
    WindowPosition {
        x: start.x + dx,
        y: start.y + dy,
    }
}

/// Size requested by a resize drag, floored at the frame's minimum.
pub fn resized_dimensions(start_width: i32, start_height: i32, dx: i32, dy: i32) -> (i32, i32) {
    (
        (start_width + dx).max(MIN_WINDOW_WIDTH),
        (start_height + dy).max(MIN_WINDOW_HEIGHT),
    )
}
