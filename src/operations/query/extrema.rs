use tracing::trace;

use crate::error::{GeometryError, Result};
use crate::geometry::Line;
use crate::math::distance_2d::distance;
use crate::math::Point2;
use crate::scene::{Scene, ShapeId};

/// A vertex together with its projection onto the reference line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtremalPair {
    /// The source vertex.
    pub vertex: Point2,
    /// Its orthogonal projection onto the line.
    pub projection: Point2,
    /// Distance from the line's start point to `projection`.
    pub distance: f64,
}

/// The vertices whose projections land nearest to and farthest from the
/// line's start point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrema {
    /// Smallest distance along the line.
    pub near: ExtremalPair,
    /// Largest distance along the line.
    pub far: ExtremalPair,
}

/// Scans `vertices` and returns the pair whose projections onto `line` are
/// nearest to and farthest from `line.origin()`.
///
/// Vertices are ranked by where their shadow falls on the line: the distance
/// is measured from the line start to the *projected* point, not from the
/// vertex itself. The first vertex seeds both extremes. Later vertices
/// replace the minimum on a strictly smaller distance, or otherwise the
/// maximum on a strictly larger one, so exact ties keep the earlier vertex
/// and a single vertex is both near and far.
///
/// # Errors
///
/// Returns [`GeometryError::EmptyVertexSet`] if `vertices` is empty, or
/// [`GeometryError::DegenerateLine`] if projection fails.
pub fn find_extrema(vertices: &[Point2], line: &Line) -> Result<Extrema> {
    let (first, rest) = vertices
        .split_first()
        .ok_or(GeometryError::EmptyVertexSet)?;

    let seed = extremal_pair(first, line)?;
    let mut near = seed;
    let mut far = seed;

    for vertex in rest {
        let candidate = extremal_pair(vertex, line)?;
        if candidate.distance < near.distance {
            near = candidate;
        } else if candidate.distance > far.distance {
            far = candidate;
        }
    }

    trace!(
        near_distance = near.distance,
        far_distance = far.distance,
        vertices = vertices.len(),
        "extrema found"
    );
    Ok(Extrema { near, far })
}

fn extremal_pair(vertex: &Point2, line: &Line) -> Result<ExtremalPair> {
    let projection = line.project(vertex)?;
    Ok(ExtremalPair {
        vertex: *vertex,
        projection,
        distance: distance(&projection, line.origin()),
    })
}

/// Finds the extremal projections of a scene shape onto a scene line.
pub struct ProjectionExtrema {
    shape: ShapeId,
    line: ShapeId,
}

impl ProjectionExtrema {
    /// Creates a new query projecting `shape`'s vertices onto `line`.
    #[must_use]
    pub fn new(shape: ShapeId, line: ShapeId) -> Self {
        Self { shape, line }
    }

    /// Executes the query against the current vertices of the shape.
    ///
    /// # Errors
    ///
    /// Returns an error if either shape is missing, the line id does not
    /// name a line, or the shape has no vertices.
    pub fn execute(&self, scene: &Scene) -> Result<Extrema> {
        let line = scene.line(self.line)?;
        let vertices = scene.vertices(self.shape)?;
        find_extrema(vertices, line)
    }
}
