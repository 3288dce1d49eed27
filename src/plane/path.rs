use std::str::FromStr;

use crate::error::{GeometricError, Result};
use crate::plane::{BoundingBox, LineSegment2, Point, Polygon, Vector, VirtualPoint};
use crate::util::parse::parse_to_array;
use crate::util::segment;

/// An open chain of points, such as the route of a moving object.
///
/// ```
/// # use hitbox::plane::{p2, shapes, Path};
/// let path: Path = "0,0; 3,4; 3,10".parse().unwrap();
/// assert_eq!(path.dist(), 11.0);
///
/// let wall = shapes::rectangle_from_corners(p2(2.0, 5.0), p2(4.0, 6.0)).unwrap();
/// assert!(path.intercepts(&wall));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    /// Needs at least two points, no two consecutive ones equal.
    pub fn new(points: Vec<Point>) -> Result<Path> {
        if points.len() < 2 {
            return Err(GeometricError::TooFewPoints(points.len()))
        }
        if !points.iter().all(Point::is_finite) {
            return Err(GeometricError::NonFiniteCoordinate)
        }
        for (i, w) in points.windows(2).enumerate() {
            if w[0] == w[1] {
                return Err(GeometricError::CoincidentPoints(i, i + 1))
            }
        }
        Ok(Path { points })
    }

    pub fn points(&self) -> &[Point] { &self.points }

    pub fn segments(&self) -> impl Iterator<Item=LineSegment2> + '_ {
        segment::chain::<LineSegment2>(&self.points)
    }

    /// Total length.
    pub fn dist(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].dist(&w[1])).sum()
    }

    /// Some segment of the path crosses a side of `polygon`. Grazing a
    /// vertex or running along a side does not count.
    pub fn intercepts(&self, polygon: &Polygon) -> bool {
        self.segments().any(|s| polygon.intersects_segment(&s))
    }

    pub fn intercepts_any(&self, polygons: &[Polygon]) -> bool {
        polygons.iter().any(|p| self.intercepts(p))
    }

    pub fn bounding_box(&self) -> BoundingBox {
        let first = self.points[0];
        let mut bbox = BoundingBox::from_corners(first, first);
        for p in &self.points[1..] {
            bbox.expand_to_include(p);
        }
        bbox
    }

    pub fn translate(&mut self, v: &Vector) {
        for p in self.points.iter_mut() {
            p.translate(v);
        }
    }
}

impl FromStr for Path {
    type Err = GeometricError;

    fn from_str(s: &str) -> Result<Path> {
        Path::new(parse_to_array(s)?)
    }
}
