//! Scroll areas attached to scroll widgets.
//!
//! The Nth [`WidgetType::Scroll`] widget of a window owns the Nth
//! [`ScrollArea`]. [`WindowState::set_widgets`] keeps both lists the same
//! length; every function here relies on that pairing.

use crate::common::ids::WidgetIndex;
use crate::manager::DirtyRegions;
use crate::widget::{ScrollAxes, Widget, WidgetType};
use crate::window::{Window, WindowState};
use bitflags::bitflags;

/// Pixels scrolled per wheel notch.
pub const WINDOW_SCROLL_PIXELS: i32 = 17;

/// Content extent that never matches a real size, forcing a refresh.
pub const SCROLL_CONTENT_UNDEFINED: i32 = -1;

const SCROLLBAR_WIDTH: i32 = 11;
const SCROLLBAR_ARROWS: i32 = 21;
const MIN_THUMB_SIZE: i32 = 20;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ScrollFlags: u16 {
        const HSCROLLBAR_VISIBLE = 1 << 0;
        const HSCROLLBAR_THUMB_PRESSED = 1 << 1;
        const HSCROLLBAR_LEFT_PRESSED = 1 << 2;
        const HSCROLLBAR_RIGHT_PRESSED = 1 << 3;
        const VSCROLLBAR_VISIBLE = 1 << 4;
        const VSCROLLBAR_THUMB_PRESSED = 1 << 5;
        const VSCROLLBAR_UP_PRESSED = 1 << 6;
        const VSCROLLBAR_DOWN_PRESSED = 1 << 7;
        const ANY_VISIBLE = Self::HSCROLLBAR_VISIBLE.bits() | Self::VSCROLLBAR_VISIBLE.bits();
    }
}

/// Scroll offsets, content extents and thumb positions of one scroll widget.
///
/// `h_right` and `v_bottom` hold the content width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollArea {
    pub flags: ScrollFlags,
    pub h_left: i32,
    pub h_right: i32,
    pub h_thumb_left: i32,
    pub h_thumb_right: i32,
    pub v_top: i32,
    pub v_bottom: i32,
    pub v_thumb_top: i32,
    pub v_thumb_bottom: i32,
}

impl ScrollArea {
    pub fn has_visible_scrollbar(&self) -> bool {
        self.flags.intersects(ScrollFlags::ANY_VISIBLE)
    }

    pub fn horizontal_visible(&self) -> bool {
        self.flags.contains(ScrollFlags::HSCROLLBAR_VISIBLE)
    }

    pub fn vertical_visible(&self) -> bool {
        self.flags.contains(ScrollFlags::VSCROLLBAR_VISIBLE)
    }
}

/// Returns the scroll index of the widget at `widget_index`, or `None` when
/// that widget is not a scroll widget.
pub fn find_scroll_index_for_widget(
    window: &WindowState,
    widget_index: WidgetIndex,
) -> Option<usize> {
    let widgets = window.widgets();
    if widgets.get(widget_index)?.kind != WidgetType::Scroll {
        return None;
    }

    Some(
        widgets[..widget_index]
            .iter()
            .filter(|widget| widget.kind == WidgetType::Scroll)
            .count(),
    )
}

/// Index of the `scroll_index`-th scroll widget in the widget list.
pub fn find_scroll_widget_index(window: &WindowState, scroll_index: usize) -> Option<WidgetIndex> {
    window
        .widgets()
        .iter()
        .enumerate()
        .filter(|(_, widget)| widget.kind == WidgetType::Scroll)
        .nth(scroll_index)
        .map(|(index, _)| index)
}

pub fn find_scroll_widget_for_index(window: &WindowState, scroll_index: usize) -> Option<&Widget> {
    find_scroll_widget_index(window, scroll_index).map(|index| &window.widgets()[index])
}

/// Recomputes the thumb positions of the scroll widget at `widget_index`.
pub fn update_scroll_thumbs(window: &mut WindowState, widget_index: WidgetIndex) {
    let Some(scroll_index) = find_scroll_index_for_widget(window, widget_index) else {
        return;
    };
    let widget = window.widgets()[widget_index].clone();
    let Some(scroll) = window.scrolls_mut().get_mut(scroll_index) else {
        return;
    };

    if scroll.horizontal_visible() {
        let (thumb_left, thumb_right) = thumb_extent(
            widget.right - widget.left,
            scroll.vertical_visible(),
            scroll.h_left,
            scroll.h_right,
        );
        scroll.h_thumb_left = thumb_left;
        scroll.h_thumb_right = thumb_right;
    }

    if scroll.vertical_visible() {
        let (thumb_top, thumb_bottom) = thumb_extent(
            widget.bottom - widget.top,
            scroll.horizontal_visible(),
            scroll.v_top,
            scroll.v_bottom,
        );
        scroll.v_thumb_top = thumb_top;
        scroll.v_thumb_bottom = thumb_bottom;
    }
}

/// Thumb start and end along one axis. `span` is the widget's inclusive
/// extent minus one, `offset` the scroll offset and `content` the content
/// extent on that axis.
fn thumb_extent(span: i32, other_bar_visible: bool, offset: i32, content: i32) -> (i32, i32) {
    let corner = if other_bar_visible { SCROLLBAR_WIDTH } else { 0 };
    let view_size = span - SCROLLBAR_ARROWS - corner;

    let mut start = offset * view_size;
    if content != 0 {
        start /= content;
    }
    start += SCROLLBAR_WIDTH;

    let mut end = span - 2 - corner + offset;
    if content != 0 {
        end = (end * view_size) / content;
    }
    end += SCROLLBAR_WIDTH;
    let track = view_size + 10;
    end = end.min(track);

    if end - start < MIN_THUMB_SIZE {
        let bar_position = f64::from(end) / f64::from(track);
        let min_size = f64::from(MIN_THUMB_SIZE);
        start = (f64::from(start) - min_size * bar_position).round() as i32;
        end = (f64::from(end) + min_size * (1.0 - bar_position)).round() as i32;
    }

    (start, end)
}

/// Scrolls the area at `scroll_index` by `delta` pixels.
///
/// The vertical bar takes the wheel when it is visible, otherwise the
/// horizontal one does. Offsets are clamped to `[0, content - visible]`,
/// where the visible extent loses 11 pixels when the other bar is also
/// shown. A zero delta changes nothing.
pub fn apply_wheel_to_scroll(
    window: &mut WindowState,
    dirty: &mut DirtyRegions,
    scroll_index: usize,
    delta: i32,
) {
    if delta == 0 {
        return;
    }
    let Some(widget_index) = find_scroll_widget_index(window, scroll_index) else {
        return;
    };
    let widget = window.widgets()[widget_index].clone();
    let Some(scroll) = window.scrolls_mut().get_mut(scroll_index) else {
        return;
    };

    if scroll.vertical_visible() {
        let mut visible = widget.bottom - widget.top - 1;
        if scroll.horizontal_visible() {
            visible -= SCROLLBAR_WIDTH;
        }
        let max_offset = (scroll.v_bottom - visible).max(0);
        scroll.v_top = scroll.v_top.saturating_add(delta).max(0).min(max_offset);
    } else {
        let mut visible = widget.right - widget.left - 1;
        if scroll.vertical_visible() {
            visible -= SCROLLBAR_WIDTH;
        }
        let max_offset = (scroll.h_right - visible).max(0);
        scroll.h_left = scroll.h_left.saturating_add(delta).max(0).min(max_offset);
    }

    update_scroll_thumbs(window, widget_index);
    window.invalidate_widget(widget_index, dirty);
}

/// Sends the wheel to the first scroll widget that shows any scrollbar,
/// whichever widget the cursor is nearest to.
pub fn route_wheel_input(window: &mut WindowState, dirty: &mut DirtyRegions, delta: i32) -> bool {
    let target = window
        .scrolls()
        .iter()
        .position(ScrollArea::has_visible_scrollbar);

    match target {
        Some(scroll_index) => {
            apply_wheel_to_scroll(window, dirty, scroll_index, delta);
            true
        }
        None => false,
    }
}

fn scroll_widget_indices(window: &WindowState) -> Vec<WidgetIndex> {
    window
        .widgets()
        .iter()
        .enumerate()
        .filter(|(_, widget)| widget.kind == WidgetType::Scroll)
        .map(|(index, _)| index)
        .collect()
}

/// Resets every scroll area: offsets to zero, content extents from the
/// window's content size plus one, scrollbar visibility from the widget's
/// declared axes.
pub fn init_scroll_widgets(window: &mut Window) {
    for (scroll_index, widget_index) in scroll_widget_indices(window).into_iter().enumerate() {
        let content = window.call_scroll_get_size(scroll_index);
        let axes = window.widgets()[widget_index].scroll_axes();

        let mut flags = ScrollFlags::empty();
        flags.set(
            ScrollFlags::HSCROLLBAR_VISIBLE,
            axes.contains(ScrollAxes::HORIZONTAL),
        );
        flags.set(
            ScrollFlags::VSCROLLBAR_VISIBLE,
            axes.contains(ScrollAxes::VERTICAL),
        );

        window.scrolls_mut()[scroll_index] = ScrollArea {
            flags,
            h_left: 0,
            h_right: content.width + 1,
            v_top: 0,
            v_bottom: content.height + 1,
            ..ScrollArea::default()
        };
        update_scroll_thumbs(window, widget_index);
    }
}

/// Re-queries content sizes after a resize or content change.
///
/// A zero content height pins the vertical offset to 0; otherwise a zero
/// width pins the horizontal offset. Extents are only replaced, and the
/// window only redrawn, when a scrollable axis actually changed.
pub fn update_scroll_widgets(window: &mut Window, dirty: &mut DirtyRegions) {
    for (scroll_index, widget_index) in scroll_widget_indices(window).into_iter().enumerate() {
        let content = window.call_scroll_get_size(scroll_index);
        let axes = window.widgets()[widget_index].scroll_axes();

        if content.height == 0 {
            window.scrolls_mut()[scroll_index].v_top = 0;
            update_scroll_thumbs(window, widget_index);
        } else if content.width == 0 {
            window.scrolls_mut()[scroll_index].h_left = 0;
            update_scroll_thumbs(window, widget_index);
        }

        let width = content.width + 1;
        let height = content.height + 1;
        let scroll = &mut window.scrolls_mut()[scroll_index];
        let mut changed = false;
        if axes.contains(ScrollAxes::HORIZONTAL) && width != scroll.h_right {
            scroll.h_right = width;
            changed = true;
        }
        if axes.contains(ScrollAxes::VERTICAL) && height != scroll.v_bottom {
            scroll.v_bottom = height;
            changed = true;
        }

        if changed {
            update_scroll_thumbs(window, widget_index);
            window.invalidate(dirty);
        }
    }
}
