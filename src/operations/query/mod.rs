mod extrema;
mod projection;

pub use extrema::{find_extrema, Extrema, ExtremalPair, ProjectionExtrema};
pub use projection::{project_point, ProjectPoint};
