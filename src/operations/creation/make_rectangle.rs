use crate::geometry::DragRectangle;
use crate::math::Point2;
use crate::scene::{Scene, Shape, ShapeId};

/// Creates a drag rectangle spanned by two corners in the scene.
pub struct MakeRectangle {
    anchor: Point2,
    corner: Point2,
}

impl MakeRectangle {
    /// Creates a new `MakeRectangle` operation.
    #[must_use]
    pub fn new(anchor: Point2, corner: Point2) -> Self {
        Self { anchor, corner }
    }

    /// Executes the operation, inserting the rectangle into the scene.
    ///
    /// Zero-area rectangles are allowed; all four corners may coincide.
    pub fn execute(&self, scene: &mut Scene) -> ShapeId {
        scene.insert(Shape::Rectangle(DragRectangle::new(self.anchor, self.corner)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn inserts_rectangle() {
        let mut scene = Scene::new();
        let id = MakeRectangle::new(Point2::new(300.0, 100.0), Point2::new(400.0, 200.0))
            .execute(&mut scene);
        let v = scene.vertices(id).unwrap();
        assert_eq!(v.len(), 4);
        assert_eq!(v[2], Point2::new(400.0, 200.0));
    }
}
