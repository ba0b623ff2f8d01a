//! Moving, resizing, snapping and relocating windows.

use crate::common::geometry::{ScreenCoords, ScreenRect, ScreenSize, clamp_upper_wins};
use crate::common::ids::{WindowClass, WindowIdentity};
use crate::manager::{ScreenFlags, WindowManager};
use crate::scroll::{SCROLL_CONTENT_UNDEFINED, update_scroll_widgets};
use crate::window::WindowFlags;

pub const TOP_TOOLBAR_HEIGHT: i32 = 27;

/// Space kept free below a dragged window's title bar.
const BOTTOM_DRAG_MARGIN: i32 = 34;
const RELOCATE_MARGIN: i32 = 10;
const STICKY_RELOCATE_MARGIN: i32 = 22;
const RELOCATE_STEP: i32 = 8;

/// Snaps a window rectangle at its provisional position to nearby edges.
///
/// Edges are tried in a fixed order: the window's right edge against the left
/// edges of `neighbours` and the screen width, its bottom edge against their
/// top edges and the screen height, its left edge against their right edges
/// and 0, and its top edge against their bottom edges and 0. A candidate must
/// lie within `2 * proximity` of the window edge and the neighbour must
/// overlap the window on the other axis. The right and bottom snaps take the
/// nearest-to-origin candidate, the left and top snaps the farthest one.
pub fn snap_position(
    position: ScreenCoords,
    size: ScreenSize,
    neighbours: &[ScreenRect],
    screen: ScreenSize,
    proximity: i32,
) -> ScreenCoords {
    let reach = proximity * 2;
    let mut x = position.x;
    let mut y = position.y;

    let overlaps_vertically =
        |y: i32, other: &ScreenRect| !(y + size.height < other.top || y > other.bottom);
    let overlaps_horizontally =
        |x: i32, other: &ScreenRect| !(x + size.width < other.left || x > other.right);
    let within = |edge: i32, candidate: i32| candidate >= edge - reach && candidate <= edge + reach;

    // Own right edge onto a neighbour's left edge.
    let right = x + size.width;
    let left_most = neighbours
        .iter()
        .filter(|other| overlaps_vertically(y, other) && within(right, other.left))
        .map(|other| other.left)
        .chain(within(right, screen.width).then_some(screen.width))
        .min();
    if let Some(left_most) = left_most {
        x = left_most - size.width;
    }

    // Own bottom edge onto a neighbour's top edge.
    let bottom = y + size.height;
    let top_most = neighbours
        .iter()
        .filter(|other| overlaps_horizontally(x, other) && within(bottom, other.top))
        .map(|other| other.top)
        .chain(within(bottom, screen.height).then_some(screen.height))
        .min();
    if let Some(top_most) = top_most {
        y = top_most - size.height;
    }

    // Own left edge onto a neighbour's right edge.
    let right_most = neighbours
        .iter()
        .filter(|other| overlaps_vertically(y, other) && within(x, other.right))
        .map(|other| other.right)
        .chain(within(x, 0).then_some(0))
        .max();
    if let Some(right_most) = right_most {
        x = right_most;
    }

    // Own top edge onto a neighbour's bottom edge.
    let bottom_most = neighbours
        .iter()
        .filter(|other| overlaps_horizontally(x, other) && within(y, other.bottom))
        .map(|other| other.bottom)
        .chain(within(y, 0).then_some(0))
        .max();
    if let Some(bottom_most) = bottom_most {
        y = bottom_most;
    }

    ScreenCoords::new(x, y)
}

impl WindowManager {
    /// Moves a window (and its viewport) by `delta`, redrawing both areas.
    pub fn move_position(&mut self, identity: WindowIdentity, delta: ScreenCoords) {
        if delta == ScreenCoords::default() {
            return;
        }
        let Some((window, dirty)) = self.get_with_dirty(identity) else {
            return;
        };
        window.invalidate(dirty);
        window.offset_by(delta);
        window.invalidate(dirty);
    }

    pub fn set_position(&mut self, identity: WindowIdentity, position: ScreenCoords) {
        let Some(window) = self.get(identity) else {
            return;
        };
        let delta = position - window.position;
        self.move_position(identity, delta);
    }

    /// Grows or shrinks a window within its size bounds and recalculates its
    /// scroll areas.
    pub fn resize(&mut self, identity: WindowIdentity, dw: i32, dh: i32) {
        if dw == 0 && dh == 0 {
            return;
        }
        let Some((window, dirty)) = self.get_with_dirty(identity) else {
            return;
        };

        window.invalidate(dirty);
        window.size = ScreenSize::new(
            clamp_upper_wins(
                window.min_size.width,
                window.size.width + dw,
                window.max_size.width,
            ),
            clamp_upper_wins(
                window.min_size.height,
                window.size.height + dh,
                window.max_size.height,
            ),
        );
        window.call_resize();
        window.call_prepare_draw();

        for scroll in window.scrolls_mut() {
            scroll.h_right = SCROLL_CONTENT_UNDEFINED;
            scroll.v_bottom = SCROLL_CONTENT_UNDEFINED;
        }
        update_scroll_widgets(window, dirty);
        window.invalidate(dirty);
    }

    /// Sets a window's size bounds and clamps its current size into them.
    ///
    /// Bounds given the wrong way round are swapped. The window is only
    /// redrawn when its size actually changes.
    pub fn set_resize(
        &mut self,
        identity: WindowIdentity,
        min_size: ScreenSize,
        max_size: ScreenSize,
    ) {
        let Some((window, dirty)) = self.get_with_dirty(identity) else {
            return;
        };

        window.min_size = min_size;
        window.max_size = max_size;

        let clamp = |value: i32, a: i32, b: i32| value.clamp(a.min(b), a.max(b));
        let size = ScreenSize::new(
            clamp(window.size.width, min_size.width, max_size.width),
            clamp(window.size.height, min_size.height, max_size.height),
        );
        if size != window.size {
            window.invalidate(dirty);
            window.size = size;
            window.invalidate(dirty);
        }
    }

    /// Drags a window towards `target`, snapping its edges to neighbouring
    /// windows and the screen edges within `snap_proximity` pixels.
    ///
    /// The vertical position is always kept between the toolbar and 34
    /// pixels above the bottom of the screen.
    pub fn move_and_snap(
        &mut self,
        identity: WindowIdentity,
        target: ScreenCoords,
        snap_proximity: i32,
    ) {
        let Some(window) = self.get(identity) else {
            return;
        };
        let original = window.position;
        let size = window.size;

        let min_y = if self.screen_flags().contains(ScreenFlags::TITLE_DEMO) {
            1
        } else {
            TOP_TOOLBAR_HEIGHT + 2
        };
        let max_y = self.screen_size().height - BOTTOM_DRAG_MARGIN;
        let mut destination = ScreenCoords::new(target.x, clamp_upper_wins(min_y, target.y, max_y));

        if snap_proximity > 0 {
            let neighbours: Vec<ScreenRect> = self
                .iter()
                .filter(|other| {
                    other.identity() != identity && other.class != WindowClass::MainWindow
                })
                .map(|other| other.bounds())
                .collect();
            destination = snap_position(
                destination,
                size,
                &neighbours,
                self.screen_size(),
                snap_proximity,
            );
            if destination == original {
                return;
            }
        }

        self.set_position(identity, destination);
    }

    /// Updates the screen size, moves windows that fell off the new screen
    /// and redraws everything.
    pub fn resize_screen(&mut self, size: ScreenSize) {
        self.set_screen_size(size);
        self.relocate_windows(size);
        self.invalidate_screen();
    }

    /// Moves windows that are no longer reachable on a screen of `size` into
    /// a cascade from the top-left corner, 8 pixels apart.
    pub fn relocate_windows(&mut self, size: ScreenSize) {
        let mut new_location = RELOCATE_STEP;
        for window in self.windows_mut() {
            let position = window.position;
            if position.x + RELOCATE_MARGIN < size.width {
                if window.is_sticky() && position.y - STICKY_RELOCATE_MARGIN < size.height {
                    continue;
                }
                if position.y + RELOCATE_MARGIN < size.height {
                    continue;
                }
            }

            let destination =
                ScreenCoords::new(new_location, new_location + TOP_TOOLBAR_HEIGHT + 1);
            log::debug!(
                "Relocating window {} from {:?} to {:?}",
                window.identity(),
                position,
                destination
            );
            window.offset_by(destination - position);
            new_location += RELOCATE_STEP;
        }
    }

    /// Pushes overlapping ordinary windows to the right of `identity`.
    pub fn push_others_right(&mut self, identity: WindowIdentity) {
        let Some(pusher) = self.get(identity).map(|window| window.bounds()) else {
            return;
        };
        let screen_width = self.screen_size().width;
        let (windows, dirty) = self.split_mut();

        for other in windows.iter_mut() {
            if other.identity() == identity || other.is_sticky() {
                continue;
            }
            let bounds = other.bounds();
            if bounds.left >= pusher.right
                || bounds.right <= pusher.left
                || bounds.top >= pusher.bottom
                || bounds.bottom <= pusher.top
            {
                continue;
            }

            other.invalidate(dirty);
            if pusher.right + 13 >= screen_width {
                continue;
            }
            let push = pusher.right - bounds.left + 3;
            other.offset_by(ScreenCoords::new(push, 0));
            other.invalidate(dirty);
        }
    }

    /// Pushes overlapping ordinary windows below `identity` when there is
    /// room on screen.
    pub fn push_others_below(&mut self, identity: WindowIdentity) {
        let Some(pusher) = self.get(identity).map(|window| window.bounds()) else {
            return;
        };
        let screen_height = self.screen_size().height;
        let (windows, dirty) = self.split_mut();

        for other in windows.iter_mut() {
            if other.identity() == identity || other.is_sticky() {
                continue;
            }
            let bounds = other.bounds();
            if bounds.left > pusher.right || bounds.right < pusher.left {
                continue;
            }
            if bounds.top > pusher.bottom || bounds.bottom < pusher.top {
                continue;
            }
            if pusher.bottom + 80 >= screen_height {
                continue;
            }

            other.invalidate(dirty);
            let push = pusher.bottom - bounds.top + 3;
            other.offset_by(ScreenCoords::new(0, push));
            other.invalidate(dirty);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: ScreenSize = ScreenSize::new(640, 480);

    #[test]
    fn test_left_snap_takes_rightmost_candidate() {
        let neighbours = [
            ScreenRect::new(0, 100, 195, 300),
            ScreenRect::new(0, 100, 198, 300),
        ];
        let snapped = snap_position(
            ScreenCoords::new(200, 150),
            ScreenSize::new(100, 100),
            &neighbours,
            SCREEN,
            5,
        );
        assert_eq!(snapped, ScreenCoords::new(198, 150));
    }

    #[test]
    fn test_right_snap_takes_leftmost_candidate() {
        let neighbours = [
            ScreenRect::new(302, 100, 400, 300),
            ScreenRect::new(306, 100, 400, 300),
        ];
        let snapped = snap_position(
            ScreenCoords::new(200, 150),
            ScreenSize::new(100, 100),
            &neighbours,
            SCREEN,
            5,
        );
        assert_eq!(snapped, ScreenCoords::new(202, 150));
    }

    #[test]
    fn test_snap_ignores_far_and_non_overlapping_neighbours() {
        let neighbours = [
            // Too far away.
            ScreenRect::new(0, 100, 180, 300),
            // Close, but entirely below the window.
            ScreenRect::new(0, 400, 198, 450),
        ];
        let snapped = snap_position(
            ScreenCoords::new(200, 150),
            ScreenSize::new(100, 100),
            &neighbours,
            SCREEN,
            5,
        );
        assert_eq!(snapped, ScreenCoords::new(200, 150));
    }

    #[test]
    fn test_snap_to_screen_edges() {
        let snapped = snap_position(
            ScreenCoords::new(535, 6),
            ScreenSize::new(100, 100),
            &[],
            SCREEN,
            5,
        );
        assert_eq!(snapped, ScreenCoords::new(540, 0));
    }
}
