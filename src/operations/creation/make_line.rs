use crate::error::Result;
use crate::geometry::Line;
use crate::math::Point2;
use crate::scene::{Scene, Shape, ShapeId};

/// Creates a line through two points in the scene.
pub struct MakeLine {
    start: Point2,
    end: Point2,
}

impl MakeLine {
    /// Creates a new `MakeLine` operation.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Executes the operation, inserting the line into the scene.
    ///
    /// # Errors
    ///
    /// Returns an error if the two points coincide.
    pub fn execute(&self, scene: &mut Scene) -> Result<ShapeId> {
        let line = Line::from_points(self.start, self.end)?;
        Ok(scene.insert(Shape::Line(line)))
    }
}
