use std::fmt::Write as _;

use crate::geometry::Line;
use crate::math::distance_2d::truncate_for_display;
use crate::math::Point2;
use crate::operations::query::Extrema;
use crate::tessellation::Polyline;

use super::{ShapeId, ShapeKind};

/// A straight segment for the host to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }
}

/// Everything the host needs to draw one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Outline of every shape in the scene.
    pub outlines: Vec<(ShapeId, ShapeKind, Polyline)>,
    /// The reference line as of this tick.
    pub line: Line,
    /// Extremal projections of the active shape, if it has any vertices.
    pub extrema: Option<Extrema>,
}

impl Frame {
    /// Segment between the near and far projections, along the line.
    #[must_use]
    pub fn projection_segment(&self) -> Option<Segment> {
        self.extrema
            .map(|e| Segment::new(e.near.projection, e.far.projection))
    }

    /// Connector segments from each extremal vertex to its projection,
    /// near first.
    #[must_use]
    pub fn connectors(&self) -> Option<[Segment; 2]> {
        self.extrema.map(|e| {
            [
                Segment::new(e.near.vertex, e.near.projection),
                Segment::new(e.far.vertex, e.far.projection),
            ]
        })
    }

    /// Status label describing the reference line, with every number
    /// truncated toward zero: `Projection: (x,y) <dx,dy>`.
    #[must_use]
    pub fn status_text(&self) -> String {
        let o = self.line.origin();
        let d = self.line.direction();
        format!(
            "Projection: ({},{}) <{},{}>",
            truncate_for_display(o.x),
            truncate_for_display(o.y),
            truncate_for_display(d.x),
            truncate_for_display(d.y),
        )
    }

    /// Label with the truncated near/far distances along the line, or an
    /// empty string when there are no extrema.
    #[must_use]
    pub fn extent_text(&self) -> String {
        let mut out = String::new();
        if let Some(e) = &self.extrema {
            let _ = write!(
                out,
                "Near: {} Far: {} Span: {}",
                truncate_for_display(e.near.distance),
                truncate_for_display(e.far.distance),
                truncate_for_display(e.far.distance - e.near.distance),
            );
        }
        out
    }
}
