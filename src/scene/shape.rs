use std::fmt;

use crate::geometry::{DragRectangle, Line, RegularPolygon};
use crate::math::Point2;

/// Any shape the scene can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A reference line that vertices are projected onto.
    Line(Line),
    /// A regular polygon whose vertices are derived from its parameters.
    Polygon(RegularPolygon),
    /// A rectangle spanned by a pointer drag.
    Rectangle(DragRectangle),
}

/// Discriminant of [`Shape`], for logging and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Polygon,
    Rectangle,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Line => "line",
            Self::Polygon => "polygon",
            Self::Rectangle => "rectangle",
        };
        f.write_str(name)
    }
}

impl Shape {
    /// Returns which variant this is.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Line(_) => ShapeKind::Line,
            Self::Polygon(_) => ShapeKind::Polygon,
            Self::Rectangle(_) => ShapeKind::Rectangle,
        }
    }

    /// Refreshes derived geometry. Only polygons carry any.
    pub fn recompute(&mut self) {
        match self {
            Self::Polygon(poly) => poly.recompute(),
            Self::Line(_) | Self::Rectangle(_) => {}
        }
    }

    /// Returns the defining points of the shape.
    ///
    /// A line yields its start point only; see [`Line::end`] for the other
    /// end.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        match self {
            Self::Line(line) => std::slice::from_ref(line.origin()),
            Self::Polygon(poly) => poly.vertices(),
            Self::Rectangle(rect) => rect.corners().as_slice(),
        }
    }

    /// Returns `true` for shapes whose outline wraps back to the first
    /// vertex.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        !matches!(self, Self::Line(_))
    }
}
