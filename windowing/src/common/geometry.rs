use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point in screen space, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenCoords {
    pub x: i32,
    pub y: i32,
}

impl ScreenCoords {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for ScreenCoords {
    type Output = ScreenCoords;

    fn add(self, rhs: ScreenCoords) -> ScreenCoords {
        ScreenCoords::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for ScreenCoords {
    type Output = ScreenCoords;

    fn sub(self, rhs: ScreenCoords) -> ScreenCoords {
        ScreenCoords::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: i32,
    pub height: i32,
}

impl ScreenSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Half-open rectangle: `left`/`top` are inside, `right`/`bottom` are not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScreenRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl ScreenRect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn from_position_and_size(position: ScreenCoords, size: ScreenSize) -> Self {
        Self::new(
            position.x,
            position.y,
            position.x + size.width,
            position.y + size.height,
        )
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub const fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    pub const fn contains(&self, point: ScreenCoords) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }

    /// Smallest rectangle covering both `self` and `other`.
    pub fn union(&self, other: &ScreenRect) -> ScreenRect {
        ScreenRect::new(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }

    pub fn clip_to(&self, bounds: &ScreenRect) -> ScreenRect {
        ScreenRect::new(
            self.left.max(bounds.left),
            self.top.max(bounds.top),
            self.right.min(bounds.right),
            self.bottom.min(bounds.bottom),
        )
    }
}

/// Clamps `value` into `[low, high]`; when `low > high` the upper bound wins.
pub fn clamp_upper_wins(low: i32, value: i32, high: i32) -> i32 {
    value.max(low).min(high)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = ScreenRect::new(10, 10, 20, 20);
        assert!(rect.contains(ScreenCoords::new(10, 10)));
        assert!(rect.contains(ScreenCoords::new(19, 19)));
        assert!(!rect.contains(ScreenCoords::new(20, 19)));
        assert!(!rect.contains(ScreenCoords::new(19, 20)));
    }

    #[test]
    fn test_clamp_upper_wins_on_inverted_bounds() {
        assert_eq!(clamp_upper_wins(0, 5, 10), 5);
        assert_eq!(clamp_upper_wins(0, -5, 10), 0);
        assert_eq!(clamp_upper_wins(28, 50, 10), 10);
    }

    #[test]
    fn test_union_and_clip() {
        let a = ScreenRect::new(0, 0, 10, 10);
        let b = ScreenRect::new(5, -5, 20, 8);
        assert_eq!(a.union(&b), ScreenRect::new(0, -5, 20, 10));
        assert_eq!(b.clip_to(&a), ScreenRect::new(5, 0, 10, 8));
        assert!(ScreenRect::new(5, 5, 5, 10).is_empty());
    }
}
