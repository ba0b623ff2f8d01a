//! Widget definitions.
//!
//! A window's widgets live in one ordered list. Coordinates are
//! window-local and inclusive on all four edges, so a widget spanning
//! `left = 0, right = 9` is ten pixels wide.

use crate::common::geometry::{ScreenCoords, ScreenRect};
use crate::common::ids::{ImageId, StringId, WidgetIndex};
use crate::window::WindowState;
use bitflags::bitflags;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetType {
    Empty,
    Frame,
    Resize,
    ImgBtn,
    ColourBtn,
    TrnBtn,
    Tab,
    FlatBtn,
    Button,
    LabelCentred,
    Label,
    Spinner,
    DropdownMenu,
    Viewport,
    Groupbox,
    Caption,
    CloseBox,
    Scroll,
    Checkbox,
    TextBox,
    Placeholder,
}

impl WidgetType {
    /// Button kinds that can take part in a spinner group.
    pub fn is_group_button(self) -> bool {
        matches!(self, WidgetType::TrnBtn | WidgetType::Button)
    }
}

bitflags! {
    /// Which scrollbars a scroll widget may show.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ScrollAxes: u8 {
        const HORIZONTAL = 1 << 0;
        const VERTICAL = 1 << 1;
        const BOTH = Self::HORIZONTAL.bits() | Self::VERTICAL.bits();
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WidgetFlags: u8 {
        const IS_DISABLED = 1 << 0;
        const IS_HIDDEN = 1 << 1;
        const IS_PRESSED = 1 << 2;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WidgetContent {
    #[default]
    None,
    Image(ImageId),
    Text(StringId),
    Scroll(ScrollAxes),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    pub kind: WidgetType,
    /// Which of the window's six colour slots the widget is drawn with.
    pub colour: u8,
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
    pub content: WidgetContent,
    pub flags: WidgetFlags,
}

impl Widget {
    pub fn new(kind: WidgetType, left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            kind,
            colour: 0,
            left,
            right,
            top,
            bottom,
            content: WidgetContent::None,
            flags: WidgetFlags::empty(),
        }
    }

    pub fn scroll(left: i32, top: i32, right: i32, bottom: i32, axes: ScrollAxes) -> Self {
        Self::new(WidgetType::Scroll, left, top, right, bottom)
            .with_content(WidgetContent::Scroll(axes))
    }

    pub fn with_content(mut self, content: WidgetContent) -> Self {
        self.content = content;
        self
    }

    pub fn with_text(self, text: StringId) -> Self {
        self.with_content(WidgetContent::Text(text))
    }

    pub fn with_image(self, image: ImageId) -> Self {
        self.with_content(WidgetContent::Image(image))
    }

    pub fn with_colour(mut self, colour: u8) -> Self {
        self.colour = colour;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.flags.insert(WidgetFlags::IS_DISABLED);
        self
    }

    pub fn width(&self) -> i32 {
        self.right - self.left + 1
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top + 1
    }

    pub fn is_disabled(&self) -> bool {
        self.flags.contains(WidgetFlags::IS_DISABLED)
    }

    pub fn is_visible(&self) -> bool {
        !self.flags.contains(WidgetFlags::IS_HIDDEN)
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.flags.set(WidgetFlags::IS_DISABLED, disabled);
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.flags.set(WidgetFlags::IS_HIDDEN, !visible);
    }

    pub fn scroll_axes(&self) -> ScrollAxes {
        match self.content {
            WidgetContent::Scroll(axes) => axes,
            _ => ScrollAxes::empty(),
        }
    }

    pub fn image(&self) -> Option<ImageId> {
        match self.content {
            WidgetContent::Image(image) => Some(image),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<StringId> {
        match self.content {
            WidgetContent::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Whether `point` (screen space) lies on the widget of a window at `origin`.
    pub fn contains(&self, origin: ScreenCoords, point: ScreenCoords) -> bool {
        point.x >= origin.x + self.left
            && point.x <= origin.x + self.right
            && point.y >= origin.y + self.top
            && point.y <= origin.y + self.bottom
    }

    /// Screen-space area covered by the widget, as a half-open rectangle.
    pub fn screen_rect(&self, origin: ScreenCoords) -> ScreenRect {
        ScreenRect::new(
            origin.x + self.left,
            origin.y + self.top,
            origin.x + self.right + 1,
            origin.y + self.bottom + 1,
        )
    }
}

/// Finds the index of `widget` in the window's widget list by identity.
///
/// A widget that merely compares equal, such as a clone, does not match.
pub fn find_widget_index(window: &WindowState, widget: &Widget) -> Option<WidgetIndex> {
    window
        .widgets()
        .iter()
        .position(|candidate| std::ptr::eq(candidate, widget))
}

/// Stretches the standard frame, caption and close box to the window size.
///
/// Windows built with [`frame_widgets`] keep these three widgets at
/// indices 0, 1 and 2.
pub fn resize_frame(window: &mut WindowState) {
    let width = window.size.width;
    let height = window.size.height;
    let widgets = window.widgets_mut();
    if widgets.len() < 3 {
        return;
    }

    widgets[0].right = width - 1;
    widgets[0].bottom = height - 1;
    widgets[1].right = width - 2;
    widgets[2].left = width - 13;
    widgets[2].right = width - 3;
}

/// Frame, caption and close box for a window of the given size.
pub fn frame_widgets(width: i32, height: i32, title: StringId) -> Vec<Widget> {
    vec![
        Widget::new(WidgetType::Frame, 0, 0, width - 1, height - 1),
        Widget::new(WidgetType::Caption, 1, 1, width - 2, 14).with_text(title),
        Widget::new(WidgetType::CloseBox, width - 13, 2, width - 3, 13),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::geometry::ScreenSize;
    use crate::common::ids::WindowClass;
    use crate::window::Window;

    #[test]
    fn test_find_widget_index_matches_identity_not_value() {
        let widgets = vec![
            Widget::new(WidgetType::Button, 0, 0, 10, 10),
            Widget::new(WidgetType::Button, 0, 0, 10, 10),
        ];
        let window = Window::new(
            WindowClass::Options,
            0,
            ScreenCoords::new(0, 0),
            ScreenSize::new(100, 100),
        )
        .with_widgets(widgets);

        let second = &window.widgets()[1];
        assert_eq!(find_widget_index(&window, second), Some(1));

        let lookalike = second.clone();
        assert_eq!(find_widget_index(&window, &lookalike), None);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let widget = Widget::new(WidgetType::Button, 5, 5, 14, 14);
        let origin = ScreenCoords::new(100, 100);
        assert!(widget.contains(origin, ScreenCoords::new(105, 105)));
        assert!(widget.contains(origin, ScreenCoords::new(114, 114)));
        assert!(!widget.contains(origin, ScreenCoords::new(115, 114)));
        assert_eq!(widget.screen_rect(origin), ScreenRect::new(105, 105, 115, 115));
    }

    #[test]
    fn test_resize_frame_tracks_window_size() {
        let mut window = Window::new(
            WindowClass::Options,
            0,
            ScreenCoords::new(0, 0),
            ScreenSize::new(200, 150),
        )
        .with_widgets(frame_widgets(100, 100, StringId::NONE));

        resize_frame(&mut window);

        let widgets = window.widgets();
        assert_eq!(widgets[0].right, 199);
        assert_eq!(widgets[0].bottom, 149);
        assert_eq!(widgets[1].right, 198);
        assert_eq!((widgets[2].left, widgets[2].right), (187, 197));
    }
}
