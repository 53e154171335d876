mod make_line;
mod make_rectangle;
mod make_regular_polygon;

pub use make_line::MakeLine;
pub use make_rectangle::MakeRectangle;
pub use make_regular_polygon::{regular_polygon, MakeRegularPolygon};
