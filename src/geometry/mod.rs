pub mod line;
pub mod polygon;
pub mod rectangle;

pub use line::{Line, DEFAULT_LINE_EXTENT};
pub use polygon::RegularPolygon;
pub use rectangle::DragRectangle;
