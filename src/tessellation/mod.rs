mod tessellate_shape;

pub use tessellate_shape::{tessellate, TessellateShape};

use crate::math::Point2;

/// A drawable outline: the points a canvas polyline or polygon call needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
    /// Whether the last point connects back to the first.
    pub closed: bool,
}

impl Polyline {
    /// Creates an open polyline.
    #[must_use]
    pub fn open(points: Vec<Point2>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    /// Creates a closed polyline.
    #[must_use]
    pub fn closed(points: Vec<Point2>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    /// Iterates over consecutive point pairs, including the closing edge of
    /// a closed polyline with at least two points.
    pub fn segments(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let open_edges = self.points.windows(2).map(|w| (w[0], w[1]));
        let closing = match (self.closed, self.points.first(), self.points.last()) {
            (true, Some(first), Some(last)) if self.points.len() > 1 => Some((*last, *first)),
            _ => None,
        };
        open_edges.chain(closing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn open_polyline_has_no_closing_edge() {
        let pl = Polyline::open(square());
        assert_eq!(pl.segments().count(), 3);
    }

    #[test]
    fn closed_polyline_wraps_around() {
        let pl = Polyline::closed(square());
        let segs: Vec<_> = pl.segments().collect();
        assert_eq!(segs.len(), 4);
        assert_eq!(segs[3], (Point2::new(0.0, 1.0), Point2::new(0.0, 0.0)));
    }

    #[test]
    fn tiny_polylines() {
        assert_eq!(Polyline::closed(vec![]).segments().count(), 0);
        assert_eq!(Polyline::closed(vec![Point2::origin()]).segments().count(), 0);
        // Two points closed: there and back.
        let pl = Polyline::closed(vec![Point2::origin(), Point2::new(1.0, 0.0)]);
        assert_eq!(pl.segments().count(), 2);
    }
}
