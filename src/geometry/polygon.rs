use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::fill_regular_polygon;
use crate::math::Point2;

/// A regular polygon described by its center, circumradius, rotation and
/// side count.
///
/// The vertices are derived state: they are rebuilt from the parameters by
/// [`RegularPolygon::recompute`] and are not meant to be edited directly.
/// `vertices().len()` always equals `sides()`.
#[derive(Debug, Clone, PartialEq)]
pub struct RegularPolygon {
    center: Point2,
    radius: f64,
    angle: f64,
    sides: u32,
    vertices: Vec<Point2>,
}

impl RegularPolygon {
    /// Creates a polygon and computes its vertices.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidSideCount`] if `sides` is zero, or
    /// [`GeometryError::ParameterOutOfRange`] if `radius` is negative or not
    /// finite.
    pub fn new(center: Point2, radius: f64, angle: f64, sides: u32) -> Result<Self> {
        validate_sides(sides)?;
        validate_radius(radius)?;
        let mut polygon = Self {
            center,
            radius,
            angle,
            sides,
            vertices: vec![Point2::origin(); sides as usize],
        };
        polygon.recompute();
        Ok(polygon)
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the circumradius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the rotation angle in radians.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Returns the number of sides.
    #[must_use]
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Returns the vertices as of the last [`recompute`](Self::recompute).
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Moves the center. Vertices update on the next recompute.
    pub fn set_center(&mut self, center: Point2) {
        self.center = center;
    }

    /// Sets the rotation angle. Vertices update on the next recompute.
    pub fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
    }

    /// Sets the circumradius. Vertices update on the next recompute.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] if `radius` is
    /// negative or not finite.
    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        validate_radius(radius)?;
        self.radius = radius;
        Ok(())
    }

    /// Changes the side count.
    ///
    /// The vertex sequence is replaced by `sides` points at the origin; old
    /// positions are discarded, not reshaped. Call
    /// [`recompute`](Self::recompute) to place them.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidSideCount`] if `sides` is zero.
    pub fn set_sides(&mut self, sides: u32) -> Result<()> {
        validate_sides(sides)?;
        self.sides = sides;
        self.vertices = vec![Point2::origin(); sides as usize];
        Ok(())
    }

    /// Recomputes every vertex from the current parameters.
    pub fn recompute(&mut self) {
        fill_regular_polygon(&mut self.vertices, &self.center, self.radius, self.angle);
    }
}

fn validate_sides(sides: u32) -> Result<()> {
    if sides == 0 {
        return Err(GeometryError::InvalidSideCount { sides }.into());
    }
    Ok(())
}

fn validate_radius(radius: f64) -> Result<()> {
    if !(radius >= 0.0 && radius.is_finite()) {
        return Err(GeometryError::ParameterOutOfRange {
            parameter: "radius",
            value: radius,
            min: 0.0,
            max: f64::INFINITY,
        }
        .into());
    }
    Ok(())
}
