use super::{Point2, Vector2};
use crate::error::GeometryError;

/// Squared direction lengths below this are treated as a zero vector.
const MIN_DIRECTION_LEN_SQ: f64 = 1e-20;

/// Returns `true` if `direction` is too short to define a line.
#[must_use]
pub fn is_degenerate_direction(direction: &Vector2) -> bool {
    direction.x * direction.x + direction.y * direction.y < MIN_DIRECTION_LEN_SQ
}

/// Returns the line parameter `c` of the orthogonal projection of `point`
/// onto the infinite line `origin + c * direction`.
///
/// `c = 0` is the origin and `c = 1` is `origin + direction`; values outside
/// `[0, 1]` fall beyond the segment ends.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateLine`] if `direction` has zero length.
pub fn projection_parameter(
    point: &Point2,
    origin: &Point2,
    direction: &Vector2,
) -> Result<f64, GeometryError> {
    if is_degenerate_direction(direction) {
        return Err(GeometryError::DegenerateLine);
    }
    let len_sq = direction.x * direction.x + direction.y * direction.y;
    Ok(((point.x - origin.x) * direction.x + (point.y - origin.y) * direction.y) / len_sq)
}

/// Projects `point` orthogonally onto the infinite line through `origin`
/// along `direction`.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateLine`] if `direction` has zero length.
pub fn project_onto_line(
    point: &Point2,
    origin: &Point2,
    direction: &Vector2,
) -> Result<Point2, GeometryError> {
    let c = projection_parameter(point, origin, direction)?;
    Ok(Point2::new(
        origin.x + direction.x * c,
        origin.y + direction.y * c,
    ))
}

/// 2D cross product `a × b` (z component of the 3D cross product).
#[must_use]
pub fn cross(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn projects_onto_diagonal() {
        let p = project_onto_line(
            &Point2::new(300.0, 100.0),
            &Point2::origin(),
            &Vector2::new(500.0, 500.0),
        )
        .unwrap();
        assert!((p.x - 200.0).abs() < TOL, "p={p}");
        assert!((p.y - 200.0).abs() < TOL, "p={p}");
    }

    #[test]
    fn projection_may_fall_outside_segment() {
        // Segment (0,0)→(1,0); point far to the left still lands on the line.
        let origin = Point2::origin();
        let dir = Vector2::new(1.0, 0.0);
        let q = Point2::new(-50.0, 7.0);
        let c = projection_parameter(&q, &origin, &dir).unwrap();
        assert!((c + 50.0).abs() < TOL, "c={c}");
        let p = project_onto_line(&q, &origin, &dir).unwrap();
        assert!((p.x + 50.0).abs() < TOL && p.y.abs() < TOL, "p={p}");
    }

    #[test]
    fn result_lies_on_line() {
        let origin = Point2::new(12.0, -3.0);
        let dir = Vector2::new(3.0, 7.5);
        for q in [
            Point2::new(0.0, 0.0),
            Point2::new(-40.0, 91.0),
            Point2::new(1e3, 2e3),
        ] {
            let p = project_onto_line(&q, &origin, &dir).unwrap();
            let along = p - origin;
            let c = cross(&along, &dir);
            assert!(c.abs() < 1e-6 * along.norm().max(1.0), "cross={c}");
            // The offset from the projection back to the point is perpendicular.
            assert!((q - p).dot(&dir).abs() < 1e-6, "q={q}");
        }
    }

    #[test]
    fn idempotent_on_projected_points() {
        let origin = Point2::new(5.0, 5.0);
        let dir = Vector2::new(-2.0, 9.0);
        let first = project_onto_line(&Point2::new(33.0, -8.0), &origin, &dir).unwrap();
        let second = project_onto_line(&first, &origin, &dir).unwrap();
        assert!((first - second).norm() < TOL);
    }

    #[test]
    fn zero_direction_is_rejected() {
        let err = project_onto_line(&Point2::new(1.0, 1.0), &Point2::origin(), &Vector2::zeros())
            .unwrap_err();
        assert_eq!(err, GeometryError::DegenerateLine);
    }

    #[test]
    fn cross_of_parallel_vectors_is_zero() {
        assert!(cross(&Vector2::new(2.0, 4.0), &Vector2::new(1.0, 2.0)).abs() < TOL);
        assert!((cross(&Vector2::x(), &Vector2::y()) - 1.0).abs() < TOL);
    }
}
