pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod scene;
pub mod tessellation;

pub use error::{Result, VecprojError};
pub use operations::creation::regular_polygon;
pub use operations::query::{find_extrema, project_point};
