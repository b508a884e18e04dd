//! Integer rectangle, anchor grid, and cull hint used by panes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in pane space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle stored by its four edges.
///
/// Nothing forces `left <= right` or `top <= bottom`; degenerate rectangles
/// are representable and report themselves as empty. Edge arithmetic wraps
/// on overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rectangle {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rectangle {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Build a rectangle from an origin and a size.
    pub fn from_origin_size(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self::new(left, top, left.wrapping_add(width), top.wrapping_add(height))
    }

    pub fn width(&self) -> i32 {
        self.right.wrapping_sub(self.left)
    }

    pub fn height(&self) -> i32 {
        self.bottom.wrapping_sub(self.top)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// True when the rectangle covers no area. Empty panes are skipped when rendering.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Move the origin to `(x, y)`, keeping the size.
    pub fn move_to(&mut self, x: i32, y: i32) {
        let (width, height) = (self.width(), self.height());
        *self = Self::from_origin_size(x, y, width, height);
    }

    /// Translate all four edges by `(dx, dy)`.
    pub fn offset(&mut self, dx: i32, dy: i32) {
        self.left = self.left.wrapping_add(dx);
        self.top = self.top.wrapping_add(dy);
        self.right = self.right.wrapping_add(dx);
        self.bottom = self.bottom.wrapping_add(dy);
    }

    /// Keep the origin and set a new size.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.right = self.left.wrapping_add(width);
        self.bottom = self.top.wrapping_add(height);
    }

    pub fn reform(&mut self, left: i32, top: i32, right: i32, bottom: i32) {
        *self = Self::new(left, top, right, bottom);
    }
}

/// Cell of the 3×3 anchor grid: row = value / 3, column = value % 3.
///
/// The raw byte is kept verbatim so that out-of-range values read from a
/// layout survive a round trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Anchor(pub u8);

impl Anchor {
    pub const TOP_LEFT: Anchor = Anchor(0);
    pub const TOP_CENTER: Anchor = Anchor(1);
    pub const TOP_RIGHT: Anchor = Anchor(2);
    pub const CENTER_LEFT: Anchor = Anchor(3);
    pub const CENTER: Anchor = Anchor(4);
    pub const CENTER_RIGHT: Anchor = Anchor(5);
    pub const BOTTOM_LEFT: Anchor = Anchor(6);
    pub const BOTTOM_CENTER: Anchor = Anchor(7);
    pub const BOTTOM_RIGHT: Anchor = Anchor(8);

    const NAMES: [&'static str; 9] = [
        "TopLeft",
        "TopCenter",
        "TopRight",
        "CenterLeft",
        "Center",
        "CenterRight",
        "BottomLeft",
        "BottomCenter",
        "BottomRight",
    ];

    pub fn value(self) -> u8 {
        self.0
    }

    /// Grid row; values past the grid yield rows beyond 2.
    pub fn row(self) -> u8 {
        self.0 / 3
    }

    pub fn column(self) -> u8 {
        self.0 % 3
    }

    /// Cell name, or `None` for bytes outside the grid.
    pub fn name(self) -> Option<&'static str> {
        Self::NAMES.get(self.0 as usize).copied()
    }

    /// Parse a cell name as produced by [`Anchor::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::NAMES
            .iter()
            .position(|candidate| candidate.eq_ignore_ascii_case(name))
            .map(|index| Anchor(index as u8))
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Face culling hint forwarded to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CullMode {
    #[default]
    None,
    Front,
    Back,
    All,
}

impl fmt::Display for CullMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CullMode::None => "None",
            CullMode::Front => "Front",
            CullMode::Back => "Back",
            CullMode::All => "All",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_size() {
        let rect = Rectangle::from_origin_size(10, 20, 30, 40);
        assert_eq!(rect, Rectangle::new(10, 20, 40, 60));
        assert_eq!(rect.width(), 30);
        assert_eq!(rect.height(), 40);
        assert!(!rect.is_empty());
    }

    #[test]
    fn test_zero_area_is_empty() {
        assert!(Rectangle::new(5, 5, 5, 50).is_empty());
        assert!(Rectangle::new(5, 5, 50, 5).is_empty());
        assert!(Rectangle::new(10, 10, 0, 0).is_empty());
        assert!(Rectangle::default().is_empty());
    }

    #[test]
    fn test_mutators() {
        let mut rect = Rectangle::new(0, 0, 100, 50);
        rect.move_to(10, 20);
        assert_eq!(rect, Rectangle::new(10, 20, 110, 70));

        rect.offset(-10, 5);
        assert_eq!(rect, Rectangle::new(0, 25, 100, 75));

        rect.resize(8, 4);
        assert_eq!(rect, Rectangle::new(0, 25, 8, 29));

        rect.reform(1, 2, 3, 4);
        assert_eq!(rect, Rectangle::new(1, 2, 3, 4));
    }

    #[test]
    fn test_edge_arithmetic_wraps() {
        let wide = Rectangle::new(i32::MIN, 0, i32::MAX, 10);
        assert_eq!(wide.width(), -1);
        assert!(wide.is_empty());

        let mut rect = Rectangle::new(0, 0, 10, 10);
        rect.move_to(i32::MAX, 0);
        assert_eq!(rect, Rectangle::new(i32::MAX, 0, i32::MIN + 9, 10));
        assert_eq!(rect.width(), 10);

        rect.offset(1, 0);
        assert_eq!(rect.left, i32::MIN);
        assert_eq!(rect.width(), 10);

        rect.resize(i32::MAX, i32::MAX);
        assert_eq!(rect.right, -1);
        assert_eq!(rect.bottom, i32::MAX);
    }

    #[test]
    fn test_anchor_grid() {
        assert_eq!(Anchor::CENTER.row(), 1);
        assert_eq!(Anchor::CENTER.column(), 1);
        assert_eq!(Anchor::TOP_RIGHT.row(), 0);
        assert_eq!(Anchor::TOP_RIGHT.column(), 2);
        assert_eq!(Anchor::BOTTOM_LEFT.row(), 2);
        assert_eq!(Anchor::BOTTOM_LEFT.column(), 0);
        assert_eq!(Anchor::default(), Anchor::TOP_LEFT);
    }

    #[test]
    fn test_anchor_names() {
        assert_eq!(Anchor::CENTER_RIGHT.to_string(), "CenterRight");
        assert_eq!(Anchor(42).to_string(), "42");
        assert_eq!(Anchor(42).name(), None);
        assert_eq!(Anchor::from_name("bottomcenter"), Some(Anchor::BOTTOM_CENTER));
        assert_eq!(Anchor::from_name("Middle"), None);
    }
}
