use crate::error::{GeometryError, Result};
use crate::math::projection_2d::{is_degenerate_direction, project_onto_line};
use crate::math::{Point2, Vector2};

/// Half-length used when a line is re-aimed around a pivot.
///
/// Large enough that the drawn segment always crosses a typical canvas, so
/// the visible segment behaves like the infinite line it stands for.
pub const DEFAULT_LINE_EXTENT: f64 = 2000.0;

/// A reference line given by a start point and a direction vector.
///
/// The segment runs from `origin` to `origin + direction`; projections are
/// taken onto the infinite line through it. The direction is kept as given
/// (not normalized) so that `end()` reproduces the second defining point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    origin: Point2,
    direction: Vector2,
}

impl Line {
    /// Creates a new line from an origin and direction.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] if the direction vector is
    /// zero-length.
    pub fn new(origin: Point2, direction: Vector2) -> Result<Self> {
        if is_degenerate_direction(&direction) {
            return Err(GeometryError::DegenerateLine.into());
        }
        Ok(Self { origin, direction })
    }

    /// Creates a line through `start` and `end`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] if the points coincide.
    pub fn from_points(start: Point2, end: Point2) -> Result<Self> {
        Self::new(start, end - start)
    }

    /// Creates a line through `pivot`, aimed at `target`, extending `extent`
    /// on both sides of the pivot.
    ///
    /// The heading is `atan2(dx, dy)` in screen coordinates (sine drives x,
    /// cosine drives y). A target equal to the pivot gives heading 0, a
    /// vertical line; the result is never degenerate.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] if `extent` is not
    /// strictly positive and finite.
    pub fn through_pivot(pivot: Point2, target: Point2, extent: f64) -> Result<Self> {
        if !(extent > 0.0 && extent.is_finite()) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "extent",
                value: extent,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }
        let theta = (target.x - pivot.x).atan2(target.y - pivot.y);
        let unit = Vector2::new(theta.sin(), theta.cos());
        Self::new(pivot - unit * extent, unit * (2.0 * extent))
    }

    /// Returns the start point of the line.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    /// Returns the (unnormalized) direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> &Vector2 {
        &self.direction
    }

    /// Returns the end point, `origin + direction`.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.origin + self.direction
    }

    /// Replaces both defining points at once.
    ///
    /// The line is left untouched if the new points coincide.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] if `start == end`.
    pub fn set_points(&mut self, start: Point2, end: Point2) -> Result<()> {
        *self = Self::from_points(start, end)?;
        Ok(())
    }

    /// Projects `point` orthogonally onto this line.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] if the direction is zero,
    /// which the constructors already rule out.
    pub fn project(&self, point: &Point2) -> Result<Point2> {
        Ok(project_onto_line(point, &self.origin, &self.direction)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::VecprojError;
    use crate::math::distance_2d::distance;
    use crate::math::projection_2d::cross;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-9;

    #[test]
    fn from_points_keeps_end() {
        let line = Line::from_points(Point2::new(1.0, 2.0), Point2::new(4.0, 6.0)).unwrap();
        assert_eq!(*line.origin(), Point2::new(1.0, 2.0));
        assert_eq!(*line.direction(), Vector2::new(3.0, 4.0));
        assert_eq!(line.end(), Point2::new(4.0, 6.0));
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let p = Point2::new(5.0, 5.0);
        let err = Line::from_points(p, p).unwrap_err();
        assert!(matches!(
            err,
            VecprojError::Geometry(GeometryError::DegenerateLine)
        ));
    }

    #[test]
    fn failed_set_points_keeps_previous_line() {
        let mut line = Line::from_points(Point2::origin(), Point2::new(500.0, 500.0)).unwrap();
        let before = line;
        let p = Point2::new(3.0, 3.0);
        assert!(line.set_points(p, p).is_err());
        assert_eq!(line, before);

        line.set_points(Point2::new(0.0, 10.0), Point2::new(10.0, 10.0)).unwrap();
        assert_eq!(*line.direction(), Vector2::new(10.0, 0.0));
    }

    #[test]
    fn through_pivot_is_symmetric() {
        let pivot = Point2::new(250.0, 250.0);
        let line = Line::through_pivot(pivot, Point2::new(300.0, 250.0), DEFAULT_LINE_EXTENT).unwrap();
        // Heading straight along +x.
        assert_relative_eq!(*line.origin(), Point2::new(-1750.0, 250.0), epsilon = TOL);
        assert_relative_eq!(line.end(), Point2::new(2250.0, 250.0), epsilon = TOL);
        assert_relative_eq!(
            distance(line.origin(), &pivot),
            distance(&line.end(), &pivot),
            epsilon = TOL
        );
    }

    #[test]
    fn through_pivot_passes_through_pivot_and_target() {
        let pivot = Point2::new(120.0, 80.0);
        let target = Point2::new(40.0, 310.0);
        let line = Line::through_pivot(pivot, target, 2000.0).unwrap();
        let dir = line.direction();
        assert!(cross(&(pivot - line.origin()), dir).abs() < 1e-6);
        assert!(cross(&(target - line.origin()), dir).abs() < 1e-6);
        assert_relative_eq!(dir.norm(), 4000.0, epsilon = 1e-9);
    }

    #[test]
    fn through_pivot_with_target_on_pivot_is_vertical() {
        let pivot = Point2::new(10.0, 10.0);
        let line = Line::through_pivot(pivot, pivot, 100.0).unwrap();
        assert_relative_eq!(*line.direction(), Vector2::new(0.0, 200.0), epsilon = TOL);
    }

    #[test]
    fn through_pivot_rejects_bad_extent() {
        let p = Point2::origin();
        let q = Point2::new(1.0, 0.0);
        assert!(Line::through_pivot(p, q, 0.0).is_err());
        assert!(Line::through_pivot(p, q, -5.0).is_err());
        assert!(Line::through_pivot(p, q, f64::NAN).is_err());
    }

    #[test]
    fn project_onto_line_not_segment() {
        let line = Line::from_points(Point2::origin(), Point2::new(10.0, 0.0)).unwrap();
        let p = line.project(&Point2::new(25.0, -3.0)).unwrap();
        assert_relative_eq!(p, Point2::new(25.0, 0.0), epsilon = TOL);
    }
}
