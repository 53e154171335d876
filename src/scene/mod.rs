pub mod config;
pub mod controller;
pub mod frame;
pub mod shape;

pub use config::{ControllerConfig, ShapeMode};
pub use controller::{PointerChannel, PointerEvent, PointerPhase, ShapeController};
pub use frame::{Frame, Segment};
pub use shape::{Shape, ShapeKind};

use crate::error::SceneError;
use crate::geometry::{Line, RegularPolygon};
use crate::math::Point2;
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Unique identifier for a shape in the scene.
    pub struct ShapeId;
}

/// Arena that owns every shape drawn on the canvas.
///
/// Shapes reference each other only through [`ShapeId`]s, so the controller
/// can hold on to "the reference line" and "the active polygon" while still
/// mutating them in place.
#[derive(Debug, Default)]
pub struct Scene {
    shapes: SlotMap<ShapeId, Shape>,
}

impl Scene {
    /// Creates a new, empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a shape and returns its ID.
    pub fn insert(&mut self, shape: Shape) -> ShapeId {
        self.shapes.insert(shape)
    }

    /// Removes a shape, returning it.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is not in the scene.
    pub fn remove(&mut self, id: ShapeId) -> Result<Shape, SceneError> {
        self.shapes.remove(id).ok_or(SceneError::ShapeNotFound(id))
    }

    /// Returns a reference to the shape, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is not in the scene.
    pub fn shape(&self, id: ShapeId) -> Result<&Shape, SceneError> {
        self.shapes.get(id).ok_or(SceneError::ShapeNotFound(id))
    }

    /// Returns a mutable reference to the shape, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is not in the scene.
    pub fn shape_mut(&mut self, id: ShapeId) -> Result<&mut Shape, SceneError> {
        self.shapes.get_mut(id).ok_or(SceneError::ShapeNotFound(id))
    }

    /// Returns the line stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is missing or is not a line.
    pub fn line(&self, id: ShapeId) -> Result<&Line, SceneError> {
        match self.shape(id)? {
            Shape::Line(line) => Ok(line),
            _ => Err(SceneError::NotALine(id)),
        }
    }

    /// Returns the regular polygon stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is missing or is not a polygon.
    pub fn polygon(&self, id: ShapeId) -> Result<&RegularPolygon, SceneError> {
        match self.shape(id)? {
            Shape::Polygon(poly) => Ok(poly),
            _ => Err(SceneError::NotAPolygon(id)),
        }
    }

    /// Returns the current vertices of the shape stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is not in the scene.
    pub fn vertices(&self, id: ShapeId) -> Result<&[Point2], SceneError> {
        Ok(self.shape(id)?.vertices())
    }

    /// Recomputes the derived state of every shape.
    pub fn recompute_all(&mut self) {
        for shape in self.shapes.values_mut() {
            shape.recompute();
        }
    }

    /// Iterates over all shapes in insertion-independent arena order.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &Shape)> {
        self.shapes.iter()
    }

    /// Number of shapes in the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the scene holds no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::DragRectangle;

    fn diagonal() -> Line {
        Line::from_points(Point2::origin(), Point2::new(500.0, 500.0)).unwrap()
    }

    #[test]
    fn insert_and_lookup() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());
        let line_id = scene.insert(Shape::Line(diagonal()));
        let rect_id = scene.insert(Shape::Rectangle(DragRectangle::default()));
        assert_eq!(scene.len(), 2);

        assert_eq!(*scene.line(line_id).unwrap(), diagonal());
        assert_eq!(scene.vertices(rect_id).unwrap().len(), 4);
        assert!(matches!(scene.line(rect_id), Err(SceneError::NotALine(id)) if id == rect_id));
        assert!(matches!(scene.polygon(line_id), Err(SceneError::NotAPolygon(_))));
    }

    #[test]
    fn removed_shape_is_not_found() {
        let mut scene = Scene::new();
        let id = scene.insert(Shape::Line(diagonal()));
        assert!(matches!(scene.remove(id).unwrap(), Shape::Line(_)));
        assert!(matches!(scene.shape(id), Err(SceneError::ShapeNotFound(_))));
        assert!(scene.remove(id).is_err());
        assert!(scene.shape_mut(id).is_err());
    }

    #[test]
    fn recompute_all_places_polygon_vertices() {
        let mut scene = Scene::new();
        let id = scene.insert(Shape::Polygon(
            RegularPolygon::new(Point2::new(50.0, 50.0), 10.0, 0.0, 3).unwrap(),
        ));
        if let Shape::Polygon(poly) = scene.shape_mut(id).unwrap() {
            poly.set_sides(5).unwrap();
        }
        assert!(scene.vertices(id).unwrap().iter().all(|p| *p == Point2::origin()));
        scene.recompute_all();
        assert!(scene.vertices(id).unwrap().iter().all(|p| *p != Point2::origin()));
    }
}
