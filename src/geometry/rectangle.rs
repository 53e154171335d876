use crate::math::polygon_2d::drag_rectangle_corners;
use crate::math::Point2;

/// An axis-aligned rectangle spanned by a pointer drag.
///
/// The anchor is where the drag started; the opposite corner follows the
/// pointer. Corners are kept in drag order, see
/// [`drag_rectangle_corners`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragRectangle {
    corners: [Point2; 4],
}

impl DragRectangle {
    /// Creates the rectangle spanned by `anchor` and `corner`.
    #[must_use]
    pub fn new(anchor: Point2, corner: Point2) -> Self {
        Self {
            corners: drag_rectangle_corners(&anchor, &corner),
        }
    }

    /// Returns the drag anchor.
    #[must_use]
    pub fn anchor(&self) -> &Point2 {
        &self.corners[0]
    }

    /// Returns the four corners in drag order.
    #[must_use]
    pub fn corners(&self) -> &[Point2; 4] {
        &self.corners
    }

    /// Starts a new drag: all corners collapse onto `anchor`.
    pub fn set_anchor(&mut self, anchor: Point2) {
        self.corners = [anchor; 4];
    }

    /// Moves the corner opposite the anchor.
    pub fn drag_to(&mut self, corner: Point2) {
        self.corners = drag_rectangle_corners(&self.corners[0], &corner);
    }
}
