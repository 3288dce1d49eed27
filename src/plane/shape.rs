//! Defines the operations shared by every closed [`Shape`], and the pairwise
//! predicates between shapes of different kinds.
//!
//! Pairwise tests first compare [`BoundingBox`]es, which never rejects a
//! pair that actually touches.
use cgmath::{Deg, Rad};

use crate::plane::{BoundingBox, Circle, LineSegment2, Point, Polygon, Vector};
use crate::util::container::{Container, Orientation};

/// Measures and rigid motions of a closed figure.
pub trait GeometricShape {
    fn centroid(&self) -> Point;
    fn perimeter(&self) -> f64;
    fn area(&self) -> f64;
    fn bounding_box(&self) -> BoundingBox;

    fn translate(&mut self, v: &Vector);

    /// Rotates counter-clockwise by `angle` radians around `pivot`.
    fn rotate_about(&mut self, angle: f64, pivot: &Point);

    /// Rotates around the centroid.
    fn rotate(&mut self, angle: f64) {
        let centroid = self.centroid();
        self.rotate_about(angle, &centroid);
    }

    fn rotate_degrees(&mut self, angle: f64) {
        self.rotate(Rad::from(Deg(angle)).0);
    }

    fn rotate_degrees_about(&mut self, angle: f64, pivot: &Point) {
        self.rotate_about(Rad::from(Deg(angle)).0, pivot);
    }

    /// Translates so that the centroid lands on `to`.
    fn move_centroid(&mut self, to: &Point) {
        let v = Vector::between(&self.centroid(), to);
        self.translate(&v);
    }
}

/// Any shape a collider can carry.
///
/// ```
/// # use hitbox::plane::{p2, shapes, Circle, Shape};
/// let square: Shape = shapes::square_from_corners(p2(0.0, 0.0), p2(1.0, 1.0)).unwrap().into();
/// let circle: Shape = Circle::new(p2(0.5, 0.5), 0.25).unwrap().into();
/// assert!(square.contains(&circle));
/// assert!(square.intersects(&circle));
/// assert!(!circle.contains(&square));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Polygon(Polygon),
}

impl Shape {
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Shape::Circle(c) => Some(c),
            Shape::Polygon(_) => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Shape::Polygon(p) => Some(p),
            Shape::Circle(_) => None,
        }
    }

    /// `other` lies entirely within this shape, boundary included.
    pub fn contains(&self, other: &Shape) -> bool {
        if !self.bounding_box().intersects(&other.bounding_box()) {
            return false
        }
        match (self, other) {
            (Shape::Circle(a), Shape::Circle(b)) => a.contains_circle(b),
            (Shape::Circle(a), Shape::Polygon(b)) => a.contains_polygon(b),
            (Shape::Polygon(a), Shape::Circle(b)) => a.contains_circle(b),
            (Shape::Polygon(a), Shape::Polygon(b)) => a.contains_polygon(b),
        }
    }

    /// The shapes overlap by more than a boundary contact.
    pub fn intersects(&self, other: &Shape) -> bool {
        if !self.bounding_box().intersects(&other.bounding_box()) {
            return false
        }
        match (self, other) {
            (Shape::Circle(a), Shape::Circle(b)) => a.intersects_circle(b),
            (Shape::Circle(a), Shape::Polygon(b)) => a.intersects_polygon(b),
            (Shape::Polygon(a), Shape::Circle(b)) => b.intersects_polygon(a),
            (Shape::Polygon(a), Shape::Polygon(b)) => a.intersects_polygon(b),
        }
    }

    /// The shapes share at least one point of boundary or interior.
    pub fn intersects_inclusive(&self, other: &Shape) -> bool {
        if !self.bounding_box().intersects(&other.bounding_box()) {
            return false
        }
        match (self, other) {
            (Shape::Circle(a), Shape::Circle(b)) => a.intersects_circle_inclusive(b),
            (Shape::Circle(a), Shape::Polygon(b)) => a.intersects_polygon_inclusive(b),
            (Shape::Polygon(a), Shape::Circle(b)) => b.intersects_polygon_inclusive(a),
            (Shape::Polygon(a), Shape::Polygon(b)) => a.intersects_polygon_inclusive(b),
        }
    }

    pub fn intersects_segment(&self, s: &LineSegment2) -> bool {
        match self {
            Shape::Circle(c) => c.intersects_segment(s),
            Shape::Polygon(p) => p.intersects_segment(s),
        }
    }

    pub fn intersects_segment_inclusive(&self, s: &LineSegment2) -> bool {
        match self {
            Shape::Circle(c) => c.intersects_segment_inclusive(s),
            Shape::Polygon(p) => p.intersects_segment_inclusive(s),
        }
    }
}

impl Container<Point> for Shape {
    fn contains(&self, p: &Point) -> Orientation {
        match self {
            Shape::Circle(c) => c.contains(p),
            Shape::Polygon(poly) => poly.contains_point(p),
        }
    }
}

impl GeometricShape for Shape {
    fn centroid(&self) -> Point {
        match self {
            Shape::Circle(c) => c.centroid(),
            Shape::Polygon(p) => p.centroid(),
        }
    }

    fn perimeter(&self) -> f64 {
        match self {
            Shape::Circle(c) => c.perimeter(),
            Shape::Polygon(p) => p.perimeter(),
        }
    }

    fn area(&self) -> f64 {
        match self {
            Shape::Circle(c) => c.area(),
            Shape::Polygon(p) => p.area(),
        }
    }

    fn bounding_box(&self) -> BoundingBox {
        match self {
            Shape::Circle(c) => c.bounding_box(),
            Shape::Polygon(p) => p.bounding_box(),
        }
    }

    fn translate(&mut self, v: &Vector) {
        match self {
            Shape::Circle(c) => c.translate(v),
            Shape::Polygon(p) => p.translate(v),
        }
    }

    fn rotate_about(&mut self, angle: f64, pivot: &Point) {
        match self {
            Shape::Circle(c) => c.rotate_about(angle, pivot),
            Shape::Polygon(p) => p.rotate_about(angle, pivot),
        }
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Shape {
        Shape::Circle(c)
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Shape {
        Shape::Polygon(p)
    }
}

#[cfg(test)]
mod test {
    use crate::plane::{p2, v2, shapes};
    use super::*;

    fn square(ax: f64, ay: f64, bx: f64, by: f64) -> Shape {
        shapes::square_from_corners(p2(ax, ay), p2(bx, by)).unwrap().into()
    }

    fn circle(x: f64, y: f64, r: f64) -> Shape {
        Circle::new(p2(x, y), r).unwrap().into()
    }

    #[test]
    fn test_unit_square_and_circle() {
        let sq = square(0.0, 0.0, 1.0, 1.0);
        let c = circle(0.5, 0.5, 0.25);

        assert!(sq.contains(&c));
        assert!(!c.contains(&sq));
        assert!(sq.intersects(&c) && c.intersects(&sq));
        assert!(sq.intersects_inclusive(&c) && c.intersects_inclusive(&sq));
    }

    #[test]
    fn test_disjoint_shapes() {
        let scene = [
            square(0.0, 0.0, 1.0, 1.0),
            circle(10.0, 10.0, 1.0),
            square(-5.0, 3.0, -4.0, 4.0),
            circle(3.0, -3.0, 0.5),
        ];
        for (i, a) in scene.iter().enumerate() {
            for (j, b) in scene.iter().enumerate() {
                if i != j {
                    assert!(!a.intersects_inclusive(b), "{} vs {}", i, j);
                    assert!(!a.contains(b));
                }
            }
        }
    }

    #[test]
    fn test_dispatch_is_symmetric() {
        let sq = square(0.0, 0.0, 2.0, 2.0);
        let c = circle(2.0, 1.0, 0.5);
        assert_eq!(sq.intersects(&c), c.intersects(&sq));
        assert_eq!(sq.intersects_inclusive(&c), c.intersects_inclusive(&sq));

        let other = square(1.0, 1.0, 3.0, 3.0);
        assert!(sq.intersects(&other) && other.intersects(&sq));
    }

    #[test]
    fn test_motion() {
        let mut s = square(0.0, 0.0, 2.0, 2.0);
        s.move_centroid(&p2(5.0, 5.0));
        assert_eq!(s.centroid(), p2(5.0, 5.0));
        assert_eq!(s.bounding_box().min(), p2(4.0, 4.0));

        s.rotate_degrees(45.0);
        assert_eq!(s.centroid(), p2(5.0, 5.0));
        assert!((s.bounding_box().width() - 2.0 * 2f64.sqrt()).abs() < 1e-9);

        let mut c = circle(0.0, 0.0, 1.0);
        c.translate(&v2(1.0, 1.0));
        assert_eq!(Container::contains(&c, &p2(1.0, 2.0)), Orientation::On);
        assert_eq!(c.as_circle().map(|c| c.radius()), Some(1.0));
        assert!(c.as_polygon().is_none());
    }
}
