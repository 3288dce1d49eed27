//! Two-dimensional geometric value types.
//!
//! Every type here owns its coordinates. Translation and rotation mutate the
//! receiver in place; copy first (all types are `Clone`, points and vectors
//! are `Copy`) when the original position is still needed.
pub mod bbox;
pub mod circle;
pub mod line;
pub mod path;
pub mod point;
pub mod polygon;
pub mod shape;
pub mod shapes;
pub mod vector;

pub type Point2 = cgmath::Point2<f64>;
pub type Vector2 = cgmath::Vector2<f64>;

pub use bbox::BoundingBox;
pub use circle::Circle;
pub use line::{Line2, LineSegment2};
pub use path::Path;
pub use point::{Point, VirtualPoint};
pub use polygon::{Polygon, PolygonKind};
pub use shape::{GeometricShape, Shape};
pub use vector::Vector;

pub fn p2(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

pub fn v2(x: f64, y: f64) -> Vector {
    Vector::new(x, y)
}
