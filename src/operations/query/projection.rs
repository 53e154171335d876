use crate::error::Result;
use crate::geometry::Line;
use crate::math::Point2;
use crate::scene::{Scene, ShapeId};

/// Projects `point` orthogonally onto the infinite line through `line`.
///
/// The result may lie outside the segment between the line's two defining
/// points.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateLine`](crate::error::GeometryError::DegenerateLine)
/// if the line's direction has zero length.
pub fn project_point(point: &Point2, line: &Line) -> Result<Point2> {
    line.project(point)
}

/// Projects a point onto a line held in the scene.
pub struct ProjectPoint {
    line: ShapeId,
    point: Point2,
}

impl ProjectPoint {
    /// Creates a new query.
    #[must_use]
    pub fn new(line: ShapeId, point: Point2) -> Self {
        Self { line, point }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is missing or does not name a line.
    pub fn execute(&self, scene: &Scene) -> Result<Point2> {
        project_point(&self.point, scene.line(self.line)?)
    }
}
