use crate::error::Result;
use crate::scene::{Scene, Shape, ShapeId};

use super::Polyline;

/// Converts a shape into the outline a canvas would draw for it.
///
/// Lines become an open two-point polyline from start to end. Polygons and
/// rectangles become a closed polyline through their vertices.
#[must_use]
pub fn tessellate(shape: &Shape) -> Polyline {
    match shape {
        Shape::Line(line) => Polyline::open(vec![*line.origin(), line.end()]),
        Shape::Polygon(poly) => Polyline::closed(poly.vertices().to_vec()),
        Shape::Rectangle(rect) => Polyline::closed(rect.corners().to_vec()),
    }
}

/// Tessellates a shape held in the scene into a polyline.
pub struct TessellateShape {
    shape: ShapeId,
}

impl TessellateShape {
    /// Creates a new `TessellateShape` operation.
    #[must_use]
    pub fn new(shape: ShapeId) -> Self {
        Self { shape }
    }

    /// Executes the tessellation, returning a polyline.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is not in the scene.
    pub fn execute(&self, scene: &Scene) -> Result<Polyline> {
        Ok(tessellate(scene.shape(self.shape)?))
    }
}
