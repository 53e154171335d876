use thiserror::Error;

use crate::scene::ShapeId;

/// Top-level error type for the projection demo core.
#[derive(Debug, Error)]
pub enum VecprojError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate line: direction vector has zero length")]
    DegenerateLine,

    #[error("cannot scan an empty vertex set")]
    EmptyVertexSet,

    #[error("invalid side count {sides}: a polygon needs at least one side")]
    InvalidSideCount { sides: u32 },
}

/// Errors related to the shape store and its controller.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("shape not found: {0:?}")]
    ShapeNotFound(ShapeId),

    #[error("shape {0:?} is not a line")]
    NotALine(ShapeId),

    #[error("shape {0:?} is not a regular polygon")]
    NotAPolygon(ShapeId),

    #[error("invalid controller configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience type alias for results using [`VecprojError`].
pub type Result<T> = std::result::Result<T, VecprojError>;
