use crate::error::{GeometryError, Result};
use crate::geometry::RegularPolygon;
use crate::math::polygon_2d::regular_polygon_vertices;
use crate::math::Point2;
use crate::scene::{Scene, Shape, ShapeId};

/// Returns the vertices of a regular polygon with circumradius `radius`
/// around `center`, rotated by `angle` radians.
///
/// `sides` of 1 or 2 is accepted and yields a degenerate shape (a point or
/// a doubled segment).
///
/// # Errors
///
/// Returns [`GeometryError::InvalidSideCount`] if `sides` is zero.
pub fn regular_polygon(center: &Point2, radius: f64, angle: f64, sides: u32) -> Result<Vec<Point2>> {
    if sides == 0 {
        return Err(GeometryError::InvalidSideCount { sides }.into());
    }
    Ok(regular_polygon_vertices(center, radius, angle, sides))
}

/// Creates a regular polygon shape in the scene.
pub struct MakeRegularPolygon {
    center: Point2,
    radius: f64,
    angle: f64,
    sides: u32,
}

impl MakeRegularPolygon {
    /// Creates a new `MakeRegularPolygon` operation.
    #[must_use]
    pub fn new(center: Point2, radius: f64, angle: f64, sides: u32) -> Self {
        Self {
            center,
            radius,
            angle,
            sides,
        }
    }

    /// Executes the operation, inserting the polygon into the scene.
    ///
    /// # Errors
    ///
    /// Returns an error if the side count is zero or the radius is negative.
    pub fn execute(&self, scene: &mut Scene) -> Result<ShapeId> {
        let polygon = RegularPolygon::new(self.center, self.radius, self.angle, self.sides)?;
        Ok(scene.insert(Shape::Polygon(polygon)))
    }
}
