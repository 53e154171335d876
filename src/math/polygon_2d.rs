use std::f64::consts::PI;

use super::Point2;

/// Angle between consecutive vertices of a regular polygon, seen from its
/// center.
///
/// Computed as `π - (n - 2)π / n`, i.e. π minus one interior angle, which is
/// `π/2` for a square. For `sides` of 1 or 2 the formula still yields a
/// finite step (`2π` and `π`); the resulting shapes are degenerate.
#[must_use]
pub fn corner_step(sides: u32) -> f64 {
    let n = f64::from(sides);
    let total_interior = (n - 2.0) * PI;
    PI - total_interior / n
}

/// Writes the vertices of a regular polygon into `out`, one per slot.
///
/// The side count is `out.len()`. Vertex `i` sits at
/// `center + radius * (sin(angle + step*i), cos(angle + step*i))`: the sine
/// drives x and the cosine drives y, so `angle = 0` puts the first vertex
/// straight below the center in screen coordinates.
pub fn fill_regular_polygon(out: &mut [Point2], center: &Point2, radius: f64, angle: f64) {
    let Ok(sides) = u32::try_from(out.len()) else {
        return;
    };
    if sides == 0 {
        return;
    }
    let step = corner_step(sides);
    for (i, slot) in (0..sides).zip(out.iter_mut()) {
        let a = angle + step * f64::from(i);
        *slot = Point2::new(center.x + a.sin() * radius, center.y + a.cos() * radius);
    }
}

/// Returns the `sides` vertices of a regular polygon.
///
/// See [`fill_regular_polygon`] for the placement rule.
#[must_use]
pub fn regular_polygon_vertices(center: &Point2, radius: f64, angle: f64, sides: u32) -> Vec<Point2> {
    let mut vertices = vec![Point2::origin(); sides as usize];
    fill_regular_polygon(&mut vertices, center, radius, angle);
    vertices
}

/// Returns the four corners of the axis-aligned rectangle spanned by a drag
/// from `anchor` to `corner`, in drag order: anchor, horizontal neighbour,
/// opposite corner, vertical neighbour.
#[must_use]
pub fn drag_rectangle_corners(anchor: &Point2, corner: &Point2) -> [Point2; 4] {
    let dx = corner.x - anchor.x;
    let dy = corner.y - anchor.y;
    [
        *anchor,
        Point2::new(anchor.x + dx, anchor.y),
        Point2::new(anchor.x + dx, anchor.y + dy),
        Point2::new(anchor.x, anchor.y + dy),
    ]
}

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise in a y-up frame, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}
