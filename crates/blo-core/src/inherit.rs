//! Attributes a pane derives from its parent and its own anchor.

use crate::geometry::Point;
use crate::pane::Pane;
use crate::transform::Transform2D;

/// Effective opacity of a pane for the current pass.
///
/// Inherited alpha is scaled by 256, not 255, and truncated; layouts rely on
/// the exact result, so `200 * 200` yields 156.
pub fn cumulative_alpha(alpha: u8, inherit_alpha: bool, parent_cumulative: Option<u8>) -> u8 {
    match parent_cumulative {
        Some(parent) if inherit_alpha => ((alpha as u32 * parent as u32) / 256) as u8,
        _ => alpha,
    }
}

/// Rotation pivot relative to the pane's own origin.
pub fn anchor_offset(pane: &Pane) -> Point {
    let rect = pane.rect();
    let anchor = pane.anchor();
    let x = match anchor.column() {
        1 => rect.width() / 2,
        2 => rect.width(),
        _ => 0,
    };
    let y = match anchor.row() {
        1 => rect.height() / 2,
        2 => rect.height(),
        _ => 0,
    };
    Point::new(x, y)
}

/// Transform placing the pane relative to its parent's coordinate space.
///
/// Translates to the rectangle origin, then rotates by `-angle` about the
/// anchor pivot when the pane is rotated.
pub fn local_transform(pane: &Pane) -> Transform2D {
    let rect = pane.rect();
    let origin = Transform2D::translate(rect.left as f64, rect.top as f64);
    if pane.angle() == 0.0 {
        return origin;
    }
    let pivot = anchor_offset(pane);
    let (px, py) = (pivot.x as f64, pivot.y as f64);
    origin
        .then(&Transform2D::translate(px, py))
        .then(&Transform2D::rotate_deg(-pane.angle()))
        .then(&Transform2D::translate(-px, -py))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Anchor, Rectangle};
    use crate::tag::Tag;

    fn pane_with_anchor(anchor: Anchor) -> Pane {
        let mut pane = Pane::new(Tag::NONE, Rectangle::new(0, 0, 100, 50));
        pane.set_anchor(anchor);
        pane
    }

    #[test]
    fn test_alpha_truncates_by_256() {
        assert_eq!(cumulative_alpha(200, true, Some(200)), 156);
        assert_eq!(cumulative_alpha(255, true, Some(255)), 254);
    }

    #[test]
    fn test_alpha_without_inheritance() {
        assert_eq!(cumulative_alpha(200, true, None), 200);
        assert_eq!(cumulative_alpha(200, false, Some(10)), 200);
    }

    #[test]
    fn test_anchor_pivots() {
        assert_eq!(anchor_offset(&pane_with_anchor(Anchor::CENTER)), Point::new(50, 25));
        assert_eq!(anchor_offset(&pane_with_anchor(Anchor::TOP_RIGHT)), Point::new(100, 0));
        assert_eq!(anchor_offset(&pane_with_anchor(Anchor::TOP_LEFT)), Point::ZERO);
        assert_eq!(
            anchor_offset(&pane_with_anchor(Anchor::BOTTOM_CENTER)),
            Point::new(50, 50)
        );
    }

    #[test]
    fn test_pivot_uses_own_rect_with_integer_halves() {
        let mut pane = Pane::new(Tag::NONE, Rectangle::new(10, 10, 21, 15));
        pane.set_anchor(Anchor::CENTER);
        assert_eq!(anchor_offset(&pane), Point::new(5, 2));
    }

    #[test]
    fn test_out_of_grid_anchor_rows_give_zero() {
        // 10 is column 1, row 3.
        assert_eq!(anchor_offset(&pane_with_anchor(Anchor(10))), Point::new(50, 0));
    }

    #[test]
    fn test_unrotated_transform_is_translation() {
        let pane = Pane::new(Tag::NONE, Rectangle::new(7, 9, 20, 20));
        assert_eq!(local_transform(&pane), Transform2D::translate(7.0, 9.0));
    }

    #[test]
    fn test_rotation_keeps_pivot_fixed() {
        let mut pane = Pane::new(Tag::NONE, Rectangle::new(10, 20, 110, 70));
        pane.set_anchor(Anchor::CENTER);
        pane.set_angle(90.0);
        let t = local_transform(&pane);

        let (x, y) = t.apply_point(50.0, 25.0);
        assert!((x - 60.0).abs() < 1e-9);
        assert!((y - 45.0).abs() < 1e-9);

        // -90° maps the pivot-relative +x axis onto -y.
        let (x, y) = t.apply_point(60.0, 25.0);
        assert!((x - 60.0).abs() < 1e-9);
        assert!((y - 35.0).abs() < 1e-9);
    }
}
