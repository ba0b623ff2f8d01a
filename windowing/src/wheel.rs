//! Mouse wheel routing.
//!
//! Once per input frame the router turns the change in the platform's
//! absolute wheel counter into exactly one action: zooming a viewport,
//! scrolling a scroll area or pressing a spinner button.

use crate::common::geometry::ScreenCoords;
use crate::common::ids::{ImageId, StringId, WidgetIndex, WindowClass, WindowIdentity};
use crate::manager::{DirtyRegions, ScreenFlags, WindowManager};
use crate::scroll::{
    WINDOW_SCROLL_PIXELS, apply_wheel_to_scroll, find_scroll_index_for_widget, route_wheel_input,
};
use crate::widget::WidgetType;
use crate::window::Window;

/// How many buttons above a group's anchor widget the cursor may be.
const MAX_GROUP_WALK_BACK: usize = 2;

/// Cursor position and the platform's absolute wheel counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorState {
    pub position: ScreenCoords,
    pub wheel: i32,
}

/// What a frame's wheel movement did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    Ignored,
    ViewportZoom(WindowIdentity),
    Scrolled(WindowIdentity),
    SpinnerPressed {
        window: WindowIdentity,
        widget_index: WidgetIndex,
    },
}

#[derive(Debug, Default)]
pub struct MouseWheelRouter {
    previous_absolute_wheel: i32,
}

impl MouseWheelRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes this frame's wheel movement.
    ///
    /// The wheel counter is tracked even when input is locked, so movement
    /// made while locked is discarded rather than replayed afterwards.
    pub fn process(&mut self, windows: &mut WindowManager, cursor: CursorState) -> WheelOutcome {
        // The platform counter may wrap; only the step since last frame matters
        let relative = cursor.wheel.wrapping_sub(self.previous_absolute_wheel);
        let pixels = relative.saturating_mul(WINDOW_SCROLL_PIXELS);
        self.previous_absolute_wheel = cursor.wheel;

        if relative == 0 || windows.is_input_locked() {
            return WheelOutcome::Ignored;
        }

        let Some(identity) = windows.find_from_point(cursor.position) else {
            return WheelOutcome::Ignored;
        };
        let screen_flags = windows.screen_flags();
        let Some((window, dirty)) = windows.get_with_dirty(identity) else {
            return WheelOutcome::Ignored;
        };

        if matches!(window.class, WindowClass::MainWindow | WindowClass::Viewport) {
            viewport_wheel_input(window, dirty, screen_flags, relative);
            return WheelOutcome::ViewportZoom(identity);
        }

        let Some(widget_index) = window.find_widget_from_point(cursor.position) else {
            return WheelOutcome::Ignored;
        };

        if window.widgets()[widget_index].kind == WidgetType::Scroll {
            if let Some(scroll_index) = find_scroll_index_for_widget(window, widget_index) {
                if window.scrolls()[scroll_index].has_visible_scrollbar() {
                    apply_wheel_to_scroll(window, dirty, scroll_index, pixels);
                    return WheelOutcome::Scrolled(identity);
                }
            }
        } else if let Some(pressed) = route_wheel_to_spinner_group(window, widget_index, pixels) {
            return WheelOutcome::SpinnerPressed {
                window: identity,
                widget_index: pressed,
            };
        }

        if route_wheel_input(window, dirty, pixels) {
            return WheelOutcome::Scrolled(identity);
        }
        WheelOutcome::Ignored
    }
}

/// Zooms the viewport in for wheel-up and out for wheel-down, except on the
/// title screen and in the track manager.
fn viewport_wheel_input(
    window: &mut Window,
    dirty: &mut DirtyRegions,
    screen_flags: ScreenFlags,
    wheel: i32,
) {
    if screen_flags.intersects(ScreenFlags::TRACK_MANAGER | ScreenFlags::TITLE_DEMO) {
        return;
    }
    window.zoom_viewport(wheel.signum(), dirty);
}

/// Presses the increase or decrease button of a spinner-style group.
///
/// The cursor may be over the group's anchor widget or up to two of its
/// buttons. Two group shapes are recognised:
///
/// - an image button followed by two translucent buttons showing the land
///   tool decrease and increase sprites; wheel-up presses the second one
/// - a spinner followed by two buttons labelled up/increase then
///   down/decrease; wheel-up presses the first one
///
/// Returns the pressed button, or `None` when the widget is not part of a
/// group or the chosen button is disabled.
pub fn route_wheel_to_spinner_group(
    window: &mut Window,
    widget_index: WidgetIndex,
    wheel: i32,
) -> Option<WidgetIndex> {
    let widgets = window.widgets();
    let mut anchor = widget_index;
    let mut kind = widgets.get(anchor)?.kind;

    let mut attempts = 0;
    while kind != WidgetType::ImgBtn && kind != WidgetType::Spinner && anchor > 0 {
        if !kind.is_group_button() {
            return None;
        }
        if attempts > 0 && widgets[anchor + 1].kind != kind {
            return None;
        }
        attempts += 1;
        if attempts > MAX_GROUP_WALK_BACK {
            return None;
        }
        anchor -= 1;
        kind = widgets[anchor].kind;
    }

    let first = widgets.get(anchor + 1)?;
    let second = widgets.get(anchor + 2)?;
    let target = match kind {
        WidgetType::ImgBtn => {
            let shape_matches = first.kind == WidgetType::TrnBtn
                && second.kind == WidgetType::TrnBtn
                && first.image() == Some(ImageId::LAND_TOOL_DECREASE)
                && second.image() == Some(ImageId::LAND_TOOL_INCREASE);
            if !shape_matches {
                return None;
            }
            if wheel < 0 { anchor + 2 } else { anchor + 1 }
        }
        WidgetType::Spinner => {
            let is_up =
                |text| text == Some(StringId::NUMERIC_UP) || text == Some(StringId::INCREASE);
            let is_down =
                |text| text == Some(StringId::NUMERIC_DOWN) || text == Some(StringId::DECREASE);
            let shape_matches = first.kind == WidgetType::Button
                && second.kind == WidgetType::Button
                && is_up(first.text())
                && is_down(second.text());
            if !shape_matches {
                return None;
            }
            if wheel < 0 { anchor + 1 } else { anchor + 2 }
        }
        _ => return None,
    };

    if window.is_widget_disabled(target) {
        return None;
    }
    window.call_mouse_down(target);
    Some(target)
}
