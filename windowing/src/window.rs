//! Window state and the hooks concrete windows implement.
//!
//! A [`Window`] pairs the shared [`WindowState`] (position, widgets, scroll
//! areas, colours) with a boxed [`WindowHandler`]. The core only reaches
//! into a window through that state and those hooks.

use crate::colour::ColourWithFlags;
use crate::common::geometry::{ScreenCoords, ScreenRect, ScreenSize};
use crate::common::ids::{WidgetIndex, WindowClass, WindowIdentity, WindowNumber};
use crate::manager::DirtyRegions;
use crate::scroll::ScrollArea;
use crate::widget::{Widget, WidgetType};
use bitflags::bitflags;
use std::any::Any;
use std::ops::{Deref, DerefMut};

/// Number of colour slots every window carries.
pub const WINDOW_COLOUR_COUNT: usize = 6;

/// Result payload of a background job, handed back to the owning window.
pub type TaskOutput = Box<dyn Any + Send>;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WindowFlags: u32 {
        const STICK_TO_BACK = 1 << 0;
        const STICK_TO_FRONT = 1 << 1;
        const TRANSPARENT = 1 << 4;
        const NO_BACKGROUND = 1 << 5;
        const STICKY = Self::STICK_TO_BACK.bits() | Self::STICK_TO_FRONT.bits();
    }
}

/// Camera into the park shown inside a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub position: ScreenCoords,
    pub size: ScreenSize,
    /// World position shown at the viewport's top-left corner.
    pub view_position: ScreenCoords,
    pub zoom: u8,
}

impl Viewport {
    pub const MAX_ZOOM: u8 = 3;

    pub fn new(position: ScreenCoords, size: ScreenSize) -> Self {
        Self {
            position,
            size,
            view_position: ScreenCoords::default(),
            zoom: 0,
        }
    }

    /// Changes zoom by `steps` (negative zooms in), keeping the view centred.
    /// Returns `false` when already at the limit.
    pub fn zoom_by(&mut self, steps: i32) -> bool {
        let target = (i32::from(self.zoom) + steps).clamp(0, i32::from(Self::MAX_ZOOM)) as u8;
        if target == self.zoom {
            return false;
        }

        let centre = ScreenCoords::new(
            self.view_position.x + ((self.size.width << self.zoom) / 2),
            self.view_position.y + ((self.size.height << self.zoom) / 2),
        );
        self.zoom = target;
        self.view_position = ScreenCoords::new(
            centre.x - ((self.size.width << self.zoom) / 2),
            centre.y - ((self.size.height << self.zoom) / 2),
        );
        true
    }
}

/// Hooks a concrete window supplies. Every hook has a no-op default.
pub trait WindowHandler {
    fn on_close(&mut self, _window: &mut WindowState) {}

    fn on_resize(&mut self, _window: &mut WindowState) {}

    /// Called before drawing and before hit testing so the window can lay
    /// out its widgets for the current state.
    fn on_prepare_draw(&mut self, _window: &mut WindowState) {}

    fn on_mouse_down(&mut self, _window: &mut WindowState, _widget_index: WidgetIndex) {}

    /// Size of the content shown in scroll area `scroll_index`.
    fn on_scroll_get_size(&mut self, _window: &WindowState, _scroll_index: usize) -> ScreenSize {
        ScreenSize::default()
    }

    /// Text typed into a widget. `None` means the session was cancelled.
    fn on_text_input(
        &mut self,
        _window: &mut WindowState,
        _widget_index: WidgetIndex,
        _text: Option<&str>,
    ) {
    }

    fn on_viewport_zoom(&mut self, _window: &mut WindowState, _zoom: u8) {}

    fn on_task_complete(&mut self, _window: &mut WindowState, _key: &str, _output: TaskOutput) {}
}

/// Handler for windows with no behaviour of their own.
#[derive(Debug, Default)]
pub struct NoopHandler;

impl WindowHandler for NoopHandler {}

#[derive(Debug, Clone)]
pub struct WindowState {
    pub class: WindowClass,
    pub number: WindowNumber,
    pub position: ScreenCoords,
    pub size: ScreenSize,
    pub min_size: ScreenSize,
    pub max_size: ScreenSize,
    pub flags: WindowFlags,
    pub colours: [ColourWithFlags; WINDOW_COLOUR_COUNT],
    pub viewport: Option<Viewport>,
    widgets: Vec<Widget>,
    scrolls: Vec<ScrollArea>,
}

impl WindowState {
    pub fn identity(&self) -> WindowIdentity {
        WindowIdentity::new(self.class, self.number)
    }

    pub fn bounds(&self) -> ScreenRect {
        ScreenRect::from_position_and_size(self.position, self.size)
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// Widgets can be edited in place; use [`WindowState::set_widgets`] to
    /// add or remove them.
    pub fn widgets_mut(&mut self) -> &mut [Widget] {
        &mut self.widgets
    }

    /// Replaces the widget list and sizes the scroll areas to match.
    pub fn set_widgets(&mut self, widgets: Vec<Widget>) {
        let scroll_count = widgets
            .iter()
            .filter(|widget| widget.kind == WidgetType::Scroll)
            .count();
        self.widgets = widgets;
        self.scrolls = vec![ScrollArea::default(); scroll_count];
    }

    pub fn scrolls(&self) -> &[ScrollArea] {
        &self.scrolls
    }

    pub fn scrolls_mut(&mut self) -> &mut [ScrollArea] {
        &mut self.scrolls
    }

    pub fn is_widget_disabled(&self, widget_index: WidgetIndex) -> bool {
        self.widgets
            .get(widget_index)
            .is_some_and(Widget::is_disabled)
    }

    pub fn is_sticky(&self) -> bool {
        self.flags.intersects(WindowFlags::STICKY)
    }

    pub fn invalidate(&self, dirty: &mut DirtyRegions) {
        dirty.mark(self.bounds());
    }

    /// Marks one widget for redraw. Hidden widgets are skipped.
    pub fn invalidate_widget(&self, widget_index: WidgetIndex, dirty: &mut DirtyRegions) {
        let Some(widget) = self.widgets.get(widget_index) else {
            return;
        };
        if !widget.is_visible() {
            return;
        }
        dirty.mark(widget.screen_rect(self.position));
    }

    /// Moves the window and its viewport by `delta` without invalidating.
    pub(crate) fn offset_by(&mut self, delta: ScreenCoords) {
        self.position = self.position + delta;
        if let Some(viewport) = self.viewport.as_mut() {
            viewport.position = viewport.position + delta;
        }
    }
}

pub struct Window {
    state: WindowState,
    handler: Box<dyn WindowHandler>,
}

impl Window {
    pub fn new(
        class: WindowClass,
        number: WindowNumber,
        position: ScreenCoords,
        size: ScreenSize,
    ) -> Self {
        Self {
            state: WindowState {
                class,
                number,
                position,
                size,
                min_size: size,
                max_size: size,
                flags: WindowFlags::empty(),
                colours: [ColourWithFlags::default(); WINDOW_COLOUR_COUNT],
                viewport: None,
                widgets: Vec::new(),
                scrolls: Vec::new(),
            },
            handler: Box::new(NoopHandler),
        }
    }

    pub fn with_widgets(mut self, widgets: Vec<Widget>) -> Self {
        self.state.set_widgets(widgets);
        self
    }

    pub fn with_flags(mut self, flags: WindowFlags) -> Self {
        self.state.flags = flags;
        self
    }

    pub fn with_size_bounds(mut self, min_size: ScreenSize, max_size: ScreenSize) -> Self {
        self.state.min_size = min_size;
        self.state.max_size = max_size;
        self
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.state.viewport = Some(viewport);
        self
    }

    pub fn with_handler(mut self, handler: impl WindowHandler + 'static) -> Self {
        self.handler = Box::new(handler);
        self
    }

    pub fn state(&self) -> &WindowState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut WindowState {
        &mut self.state
    }

    pub fn call_close(&mut self) {
        self.handler.on_close(&mut self.state);
    }

    pub fn call_resize(&mut self) {
        self.handler.on_resize(&mut self.state);
    }

    pub fn call_prepare_draw(&mut self) {
        self.handler.on_prepare_draw(&mut self.state);
    }

    pub fn call_mouse_down(&mut self, widget_index: WidgetIndex) {
        self.handler.on_mouse_down(&mut self.state, widget_index);
    }

    pub fn call_scroll_get_size(&mut self, scroll_index: usize) -> ScreenSize {
        self.handler.on_scroll_get_size(&self.state, scroll_index)
    }

    pub fn call_text_input(&mut self, widget_index: WidgetIndex, text: Option<&str>) {
        self.handler.on_text_input(&mut self.state, widget_index, text);
    }

    pub fn call_task_complete(&mut self, key: &str, output: TaskOutput) {
        self.handler.on_task_complete(&mut self.state, key, output);
    }

    /// Zooms the window's viewport by `steps`, invalidating on change.
    pub fn zoom_viewport(&mut self, steps: i32, dirty: &mut DirtyRegions) -> bool {
        let Some(viewport) = self.state.viewport.as_mut() else {
            return false;
        };
        if !viewport.zoom_by(steps) {
            return false;
        }

        let zoom = viewport.zoom;
        self.handler.on_viewport_zoom(&mut self.state, zoom);
        self.state.invalidate(dirty);
        true
    }

    /// Returns the widget under `point`.
    ///
    /// The window lays itself out first. When widgets overlap the last one in
    /// list order wins. A hit on a dropdown field reports the dropdown
    /// button that follows it.
    pub fn find_widget_from_point(&mut self, point: ScreenCoords) -> Option<WidgetIndex> {
        self.call_prepare_draw();

        let origin = self.state.position;
        let hit = self
            .state
            .widgets
            .iter()
            .enumerate()
            .filter(|(_, widget)| widget.kind != WidgetType::Empty && widget.is_visible())
            .filter(|(_, widget)| widget.contains(origin, point))
            .map(|(index, _)| index)
            .last()?;

        if self.state.widgets[hit].kind == WidgetType::DropdownMenu
            && hit + 1 < self.state.widgets.len()
        {
            return Some(hit + 1);
        }
        Some(hit)
    }
}

impl Deref for Window {
    type Target = WindowState;

    fn deref(&self) -> &WindowState {
        &self.state
    }
}

impl DerefMut for Window {
    fn deref_mut(&mut self) -> &mut WindowState {
        &mut self.state
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window").field("state", &self.state).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::Widget;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct CountingHandler {
        prepared: Rc<RefCell<u32>>,
    }

    impl WindowHandler for CountingHandler {
        fn on_prepare_draw(&mut self, window: &mut WindowState) {
            *self.prepared.borrow_mut() += 1;
            // Hide the button while the window is narrow.
            let narrow = window.size.width < 100;
            window.widgets_mut()[2].set_visible(!narrow);
        }
    }

    fn window_with_handler(prepared: Rc<RefCell<u32>>) -> Window {
        Window::new(
            WindowClass::Options,
            0,
            ScreenCoords::new(50, 50),
            ScreenSize::new(200, 100),
        )
        .with_widgets(vec![
            Widget::new(WidgetType::Frame, 0, 0, 199, 99),
            Widget::new(WidgetType::DropdownMenu, 10, 20, 100, 31),
            Widget::new(WidgetType::Button, 89, 21, 99, 30),
            Widget::new(WidgetType::Empty, 0, 0, 199, 99),
        ])
        .with_handler(CountingHandler { prepared })
    }

    #[test]
    fn test_last_overlapping_widget_wins() {
        let prepared = Rc::new(RefCell::new(0));
        let mut window = window_with_handler(prepared.clone());

        assert_eq!(window.find_widget_from_point(ScreenCoords::new(145, 75)), Some(2));
        assert_eq!(window.find_widget_from_point(ScreenCoords::new(55, 55)), Some(0));
        assert_eq!(*prepared.borrow(), 2);
    }

    #[test]
    fn test_dropdown_hit_reports_its_button() {
        let mut window = window_with_handler(Rc::new(RefCell::new(0)));
        assert_eq!(window.find_widget_from_point(ScreenCoords::new(70, 75)), Some(2));
    }

    #[test]
    fn test_point_outside_every_widget_misses() {
        let mut window = window_with_handler(Rc::new(RefCell::new(0)));
        assert_eq!(window.find_widget_from_point(ScreenCoords::new(10, 10)), None);
    }

    #[test]
    fn test_prepare_draw_runs_before_hit_test() {
        let mut window = window_with_handler(Rc::new(RefCell::new(0)));
        window.size.width = 90;
        // The button is hidden by the handler, so the dropdown underneath
        // is hit and forwards to index 2 anyway.
        assert_eq!(window.find_widget_from_point(ScreenCoords::new(145, 75)), Some(2));
        assert!(!window.widgets()[2].is_visible());
        assert_eq!(window.find_widget_from_point(ScreenCoords::new(141, 75)), Some(2));
    }

    #[test]
    fn test_viewport_zoom_is_clamped_and_keeps_centre() {
        let mut viewport = Viewport::new(ScreenCoords::new(0, 0), ScreenSize::new(100, 100));
        viewport.view_position = ScreenCoords::new(1000, 1000);

        assert!(!viewport.zoom_by(-1));
        assert!(viewport.zoom_by(1));
        assert_eq!(viewport.zoom, 1);
        assert_eq!(viewport.view_position, ScreenCoords::new(950, 950));

        assert!(viewport.zoom_by(5));
        assert_eq!(viewport.zoom, Viewport::MAX_ZOOM);
        assert!(!viewport.zoom_by(1));
    }

    #[test]
    fn test_set_widgets_sizes_scroll_areas() {
        let mut window = Window::new(
            WindowClass::Map,
            0,
            ScreenCoords::default(),
            ScreenSize::new(10, 10),
        );
        window.set_widgets(vec![
            Widget::scroll(0, 0, 5, 5, crate::widget::ScrollAxes::BOTH),
            Widget::new(WidgetType::Button, 0, 0, 5, 5),
            Widget::scroll(0, 0, 5, 5, crate::widget::ScrollAxes::VERTICAL),
        ]);
        assert_eq!(window.scrolls().len(), 2);
    }
}
