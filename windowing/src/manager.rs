//! The window registry.
//!
//! Windows are kept in z-order, back to front. Every change to the list
//! (insert, close, bring to front) is visible to the very next lookup or hit
//! test; nothing is deferred.

use crate::common::errors::WindowError;
use crate::common::geometry::{ScreenCoords, ScreenRect, ScreenSize};
use crate::common::ids::{WindowClass, WindowIdentity};
use crate::window::{Window, WindowFlags};
use bitflags::bitflags;

bitflags! {
    /// Global screen modes that change input behaviour.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ScreenFlags: u8 {
        const TITLE_DEMO = 1 << 0;
        const TRACK_MANAGER = 1 << 3;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct InputFlags: u8 {
        /// Set while a modal interaction owns the mouse; wheel input is ignored.
        const LOCKED = 1 << 0;
    }
}

/// Screen areas that need redrawing before the next frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirtyRegions {
    regions: Vec<ScreenRect>,
}

impl DirtyRegions {
    pub fn mark(&mut self, rect: ScreenRect) {
        if rect.is_empty() {
            return;
        }
        if self.covers(&rect) {
            return;
        }
        self.regions.push(rect);
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn regions(&self) -> &[ScreenRect] {
        &self.regions
    }

    /// Whether some marked region fully covers `rect`.
    pub fn covers(&self, rect: &ScreenRect) -> bool {
        self.regions.iter().any(|region| region.union(rect) == *region)
    }

    pub fn take(&mut self) -> Vec<ScreenRect> {
        std::mem::take(&mut self.regions)
    }
}

pub struct WindowManager {
    windows: Vec<Window>,
    dirty: DirtyRegions,
    screen_size: ScreenSize,
    screen_flags: ScreenFlags,
    input_flags: InputFlags,
}

impl WindowManager {
    pub fn new(screen_size: ScreenSize) -> Self {
        Self {
            windows: Vec::new(),
            dirty: DirtyRegions::default(),
            screen_size,
            screen_flags: ScreenFlags::empty(),
            input_flags: InputFlags::empty(),
        }
    }

    pub fn screen_size(&self) -> ScreenSize {
        self.screen_size
    }

    pub fn screen_rect(&self) -> ScreenRect {
        ScreenRect::from_position_and_size(ScreenCoords::default(), self.screen_size)
    }

    pub fn screen_flags(&self) -> ScreenFlags {
        self.screen_flags
    }

    pub fn set_screen_flags(&mut self, flags: ScreenFlags) {
        self.screen_flags = flags;
    }

    pub fn input_flags(&self) -> InputFlags {
        self.input_flags
    }

    pub fn set_input_locked(&mut self, locked: bool) {
        self.input_flags.set(InputFlags::LOCKED, locked);
    }

    pub fn is_input_locked(&self) -> bool {
        self.input_flags.contains(InputFlags::LOCKED)
    }

    pub fn dirty(&self) -> &DirtyRegions {
        &self.dirty
    }

    pub fn take_dirty(&mut self) -> Vec<ScreenRect> {
        self.dirty.take()
    }

    pub fn invalidate_screen(&mut self) {
        let screen = self.screen_rect();
        self.dirty.mark(screen);
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Windows from back to front.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Window> {
        self.windows.iter()
    }

    /// Adds a window to the registry and returns its identity.
    ///
    /// Stick-to-back windows go below every ordinary window, stick-to-front
    /// windows on top of everything, and other windows just below the first
    /// stick-to-front window.
    pub fn insert(&mut self, window: Window) -> Result<WindowIdentity, WindowError> {
        let identity = window.identity();
        if self.index_of(identity).is_some() {
            return Err(WindowError::DuplicateWindow(identity));
        }

        let position = if window.flags.contains(WindowFlags::STICK_TO_BACK) {
            self.windows
                .iter()
                .position(|other| !other.flags.contains(WindowFlags::STICK_TO_BACK))
                .unwrap_or(self.windows.len())
        } else if window.flags.contains(WindowFlags::STICK_TO_FRONT) {
            self.windows.len()
        } else {
            self.front_insert_position()
        };

        window.invalidate(&mut self.dirty);
        log::debug!("Opening window {identity} at z-index {position}");
        self.windows.insert(position, window);
        Ok(identity)
    }

    /// Position just above the topmost window that is not stick-to-front.
    fn front_insert_position(&self) -> usize {
        self.windows
            .iter()
            .rposition(|other| !other.flags.contains(WindowFlags::STICK_TO_FRONT))
            .map_or(0, |index| index + 1)
    }

    pub fn index_of(&self, identity: WindowIdentity) -> Option<usize> {
        self.windows
            .iter()
            .position(|window| window.class == identity.class && window.number == identity.number)
    }

    pub fn get(&self, identity: WindowIdentity) -> Option<&Window> {
        self.index_of(identity).map(|index| &self.windows[index])
    }

    pub fn get_mut(&mut self, identity: WindowIdentity) -> Option<&mut Window> {
        let index = self.index_of(identity)?;
        Some(&mut self.windows[index])
    }

    /// The window together with the dirty-region tracker, for operations
    /// that mutate a window and mark it for redraw.
    pub fn get_with_dirty(
        &mut self,
        identity: WindowIdentity,
    ) -> Option<(&mut Window, &mut DirtyRegions)> {
        let index = self.index_of(identity)?;
        Some((&mut self.windows[index], &mut self.dirty))
    }

    pub fn find_by_class(&self, class: WindowClass) -> Option<&Window> {
        self.windows.iter().find(|window| window.class == class)
    }

    pub fn find_by_number(&self, identity: WindowIdentity) -> Option<&Window> {
        self.get(identity)
    }

    pub fn main_window(&self) -> Option<&Window> {
        self.find_by_class(WindowClass::MainWindow)
    }

    /// Calls `visit` on every window, back to front.
    pub fn visit_each(&mut self, mut visit: impl FnMut(&mut Window, &mut DirtyRegions)) {
        for window in &mut self.windows {
            visit(window, &mut self.dirty);
        }
    }

    /// Closes a window: runs its close hook, marks its area dirty and drops it.
    pub fn close(&mut self, identity: WindowIdentity) -> bool {
        let Some(index) = self.index_of(identity) else {
            return false;
        };
        self.windows[index].call_close();

        let window = self.windows.remove(index);
        window.invalidate(&mut self.dirty);
        log::debug!("Closed window {identity}");
        true
    }

    pub fn close_by_class(&mut self, class: WindowClass) -> usize {
        let targets: Vec<WindowIdentity> = self
            .windows
            .iter()
            .filter(|window| window.class == class)
            .map(|window| window.identity())
            .collect();
        targets.into_iter().filter(|identity| self.close(*identity)).count()
    }

    /// Closes every non-sticky window except the one identified.
    pub fn close_all_except_number_and_class(&mut self, keep: WindowIdentity) -> usize {
        let targets: Vec<WindowIdentity> = self
            .windows
            .iter()
            .filter(|window| window.identity() != keep && !window.is_sticky())
            .map(|window| window.identity())
            .collect();
        targets.into_iter().filter(|identity| self.close(*identity)).count()
    }

    /// Raises a window above every window that is not stick-to-front.
    ///
    /// A window dragged almost entirely off the left edge is pulled back so
    /// at least part of it can be grabbed.
    pub fn bring_to_front(&mut self, identity: WindowIdentity) -> bool {
        let Some(index) = self.index_of(identity) else {
            return false;
        };
        if self.windows[index].is_sticky() {
            return true;
        }

        let window = self.windows.remove(index);
        let position = self.front_insert_position();
        self.windows.insert(position, window);

        let window = &mut self.windows[position];
        window.invalidate(&mut self.dirty);
        if window.position.x + window.size.width < 20 {
            let shift = 20 - window.position.x;
            window.offset_by(ScreenCoords::new(shift, 0));
            window.invalidate(&mut self.dirty);
        }
        true
    }

    /// Topmost window under `point`. Windows without a background only count
    /// where one of their widgets is hit.
    pub fn find_from_point(&mut self, point: ScreenCoords) -> Option<WindowIdentity> {
        for window in self.windows.iter_mut().rev() {
            if !window.bounds().contains(point) {
                continue;
            }
            if window.flags.contains(WindowFlags::NO_BACKGROUND)
                && window.find_widget_from_point(point).is_none()
            {
                continue;
            }
            return Some(window.identity());
        }
        None
    }

    pub fn invalidate_window(&mut self, identity: WindowIdentity) {
        if let Some(index) = self.index_of(identity) {
            self.windows[index].invalidate(&mut self.dirty);
        }
    }

    pub fn invalidate_by_class(&mut self, class: WindowClass) {
        for window in self.windows.iter().filter(|window| window.class == class) {
            window.invalidate(&mut self.dirty);
        }
    }

    pub fn invalidate_all(&mut self) {
        for window in &self.windows {
            window.invalidate(&mut self.dirty);
        }
    }

    pub(crate) fn set_screen_size(&mut self, size: ScreenSize) {
        self.screen_size = size;
    }

    pub(crate) fn windows_mut(&mut self) -> &mut [Window] {
        &mut self.windows
    }

    pub(crate) fn split_mut(&mut self) -> (&mut [Window], &mut DirtyRegions) {
        (&mut self.windows, &mut self.dirty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::geometry::ScreenSize;
    use crate::widget::{Widget, WidgetType};
    use crate::window::{WindowHandler, WindowState};
    use claims::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn window(class: WindowClass, number: u32, x: i32, y: i32) -> Window {
        Window::new(class, number, ScreenCoords::new(x, y), ScreenSize::new(100, 80))
    }

    fn z_order(manager: &WindowManager) -> Vec<WindowClass> {
        manager.iter().map(|window| window.class).collect()
    }

    #[test]
    fn test_insert_respects_sticky_layers() {
        let mut manager = WindowManager::new(ScreenSize::new(640, 480));
        assert_ok!(manager.insert(window(WindowClass::Ride, 0, 0, 0)));
        assert_ok!(manager.insert(
            window(WindowClass::TopToolbar, 0, 0, 0).with_flags(WindowFlags::STICK_TO_FRONT)
        ));
        assert_ok!(manager.insert(
            window(WindowClass::MainWindow, 0, 0, 0).with_flags(WindowFlags::STICK_TO_BACK)
        ));
        assert_ok!(manager.insert(window(WindowClass::Options, 0, 0, 0)));

        assert_eq!(
            z_order(&manager),
            vec![
                WindowClass::MainWindow,
                WindowClass::Ride,
                WindowClass::Options,
                WindowClass::TopToolbar
            ]
        );
    }

    #[test]
    fn test_insert_rejects_duplicate_identity() {
        let mut manager = WindowManager::new(ScreenSize::new(640, 480));
        assert_ok!(manager.insert(window(WindowClass::Ride, 3, 0, 0)));
        let err = assert_err!(manager.insert(window(WindowClass::Ride, 3, 10, 10)));
        assert_eq!(
            err,
            WindowError::DuplicateWindow(WindowIdentity::new(WindowClass::Ride, 3))
        );
        assert_ok!(manager.insert(window(WindowClass::Ride, 4, 0, 0)));
    }

    #[test]
    fn test_bring_to_front_stays_below_stick_to_front() {
        let mut manager = WindowManager::new(ScreenSize::new(640, 480));
        let ride = assert_ok!(manager.insert(window(WindowClass::Ride, 0, 100, 100)));
        assert_ok!(manager.insert(
            window(WindowClass::TopToolbar, 0, 0, 0).with_flags(WindowFlags::STICK_TO_FRONT)
        ));
        assert_ok!(manager.insert(window(WindowClass::Options, 0, 0, 0)));

        assert!(manager.bring_to_front(ride));
        assert_eq!(
            z_order(&manager),
            vec![WindowClass::Options, WindowClass::Ride, WindowClass::TopToolbar]
        );
    }

    #[test]
    fn test_bring_to_front_pulls_back_offscreen_window() {
        let mut manager = WindowManager::new(ScreenSize::new(640, 480));
        let ride = assert_ok!(manager.insert(window(WindowClass::Ride, 0, -90, 100)));
        assert!(manager.bring_to_front(ride));
        assert_eq!(assert_some!(manager.get(ride)).position.x, 20);
    }

    #[test]
    fn test_find_from_point_prefers_topmost() {
        let mut manager = WindowManager::new(ScreenSize::new(640, 480));
        assert_ok!(manager.insert(window(WindowClass::Ride, 0, 0, 0)));
        let options = assert_ok!(manager.insert(window(WindowClass::Options, 0, 50, 50)));

        assert_eq!(manager.find_from_point(ScreenCoords::new(60, 60)), Some(options));
        assert_eq!(
            manager.find_from_point(ScreenCoords::new(10, 10)),
            Some(WindowIdentity::new(WindowClass::Ride, 0))
        );
        assert_eq!(manager.find_from_point(ScreenCoords::new(500, 400)), None);
    }

    #[test]
    fn test_no_background_window_needs_widget_hit() {
        let mut manager = WindowManager::new(ScreenSize::new(640, 480));
        let ride = assert_ok!(manager.insert(window(WindowClass::Ride, 0, 0, 0)));
        assert_ok!(manager.insert(
            window(WindowClass::TitleMenu, 0, 0, 0)
                .with_flags(WindowFlags::NO_BACKGROUND)
                .with_widgets(vec![Widget::new(WidgetType::ImgBtn, 0, 0, 9, 9)])
        ));

        assert_eq!(
            manager.find_from_point(ScreenCoords::new(5, 5)),
            Some(WindowIdentity::new(WindowClass::TitleMenu, 0))
        );
        assert_eq!(manager.find_from_point(ScreenCoords::new(50, 50)), Some(ride));
    }

    struct CloseRecorder(Rc<RefCell<Vec<WindowIdentity>>>);

    impl WindowHandler for CloseRecorder {
        fn on_close(&mut self, window: &mut WindowState) {
            self.0.borrow_mut().push(window.identity());
        }
    }

    #[test]
    fn test_close_calls_hook_and_marks_area_dirty() {
        let closed = Rc::new(RefCell::new(Vec::new()));
        let mut manager = WindowManager::new(ScreenSize::new(640, 480));
        let ride = assert_ok!(manager.insert(
            window(WindowClass::Ride, 1, 10, 10).with_handler(CloseRecorder(closed.clone()))
        ));
        manager.take_dirty();

        assert!(manager.close(ride));
        assert!(!manager.close(ride));
        assert_eq!(*closed.borrow(), vec![ride]);
        assert!(manager.dirty().covers(&ScreenRect::new(10, 10, 110, 90)));
        assert!(manager.is_empty());
    }

    #[test]
    fn test_invalidate_by_class_and_all() {
        let mut manager = WindowManager::new(ScreenSize::new(640, 480));
        assert_ok!(manager.insert(window(WindowClass::Ride, 1, 0, 0)));
        assert_ok!(manager.insert(window(WindowClass::Ride, 2, 200, 0)));
        assert_ok!(manager.insert(window(WindowClass::Finances, 0, 0, 200)));
        manager.take_dirty();

        manager.invalidate_by_class(WindowClass::Ride);
        assert_eq!(manager.take_dirty().len(), 2);

        manager.invalidate_all();
        assert_eq!(manager.take_dirty().len(), 3);
    }

    #[test]
    fn test_close_all_except_keeps_sticky_and_named_window() {
        let mut manager = WindowManager::new(ScreenSize::new(640, 480));
        assert_ok!(manager.insert(
            window(WindowClass::MainWindow, 0, 0, 0).with_flags(WindowFlags::STICK_TO_BACK)
        ));
        let keep = assert_ok!(manager.insert(window(WindowClass::Ride, 1, 0, 0)));
        assert_ok!(manager.insert(window(WindowClass::Ride, 2, 0, 0)));
        assert_ok!(manager.insert(window(WindowClass::Finances, 0, 0, 0)));

        assert_eq!(manager.close_all_except_number_and_class(keep), 2);
        assert_eq!(z_order(&manager), vec![WindowClass::MainWindow, WindowClass::Ride]);
        assert_some!(manager.get(keep));
    }

    #[test]
    fn test_close_by_class_closes_every_instance() {
        let mut manager = WindowManager::new(ScreenSize::new(640, 480));
        assert_ok!(manager.insert(window(WindowClass::Peep, 1, 0, 0)));
        assert_ok!(manager.insert(window(WindowClass::Peep, 2, 0, 0)));
        assert_ok!(manager.insert(window(WindowClass::Finances, 0, 0, 0)));

        assert_eq!(manager.close_by_class(WindowClass::Peep), 2);
        assert_none!(manager.find_by_class(WindowClass::Peep));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_dirty_regions_skip_covered_and_empty_rects() {
        let mut dirty = DirtyRegions::default();
        dirty.mark(ScreenRect::new(0, 0, 100, 100));
        dirty.mark(ScreenRect::new(10, 10, 20, 20));
        dirty.mark(ScreenRect::new(5, 5, 5, 50));
        assert_eq!(dirty.regions().len(), 1);

        dirty.mark(ScreenRect::new(90, 90, 120, 120));
        assert_eq!(dirty.take().len(), 2);
        assert!(dirty.is_empty());
    }
}
