use std::f64::consts::PI;

use crate::error::{GeometricError, Result};
use crate::plane::{BoundingBox, GeometricShape, LineSegment2, Point, Polygon, Vector, VirtualPoint};
use crate::util::container::{Container, Orientation};
use crate::util::math::{are_equal, is_less_or_equal, is_strictly_less};

/// A circle given by its centre and a positive radius.
///
/// Boundary contact only counts under the inclusive predicates:
///
/// ```
/// # use hitbox::plane::{p2, Circle};
/// let a = Circle::new(p2(0.0, 0.0), 1.0).unwrap();
/// let b = Circle::new(p2(2.0, 0.0), 1.0).unwrap();
/// assert!(!a.intersects_circle(&b));
/// assert!(a.intersects_circle_inclusive(&b));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl PartialEq for Circle {
    fn eq(&self, other: &Circle) -> bool {
        self.center == other.center && are_equal(self.radius, other.radius)
    }
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Result<Self> {
        if !center.is_finite() {
            return Err(GeometricError::NonFiniteCoordinate)
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(GeometricError::NonPositiveRadius(radius))
        }
        Ok(Circle { center, radius })
    }

    pub fn center(&self) -> Point { self.center }
    pub fn radius(&self) -> f64 { self.radius }

    pub fn contains_point<P: VirtualPoint + ?Sized>(&self, p: &P) -> bool {
        is_less_or_equal(self.center.dist(p), self.radius)
    }

    pub fn contains_point_exclusive<P: VirtualPoint + ?Sized>(&self, p: &P) -> bool {
        is_strictly_less(self.center.dist(p), self.radius)
    }

    pub fn contains_segment(&self, s: &LineSegment2) -> bool {
        self.contains_point(&s.first_point()) && self.contains_point(&s.second_point())
    }

    pub fn contains_circle(&self, other: &Circle) -> bool {
        is_less_or_equal(self.center.dist(&other.center) + other.radius, self.radius)
    }

    pub fn contains_polygon(&self, polygon: &Polygon) -> bool {
        polygon.vertices().iter().all(|v| self.contains_point(v))
    }

    /// The boundary crosses the segment: the nearest point of the segment is
    /// strictly inside and the farthest strictly outside.
    pub fn intersects_segment(&self, s: &LineSegment2) -> bool {
        let (near, far) = self.segment_range(s);
        is_strictly_less(near, self.radius) && is_strictly_less(self.radius, far)
    }

    pub fn intersects_segment_inclusive(&self, s: &LineSegment2) -> bool {
        let (near, far) = self.segment_range(s);
        is_less_or_equal(near, self.radius) && is_less_or_equal(self.radius, far)
    }

    fn segment_range(&self, s: &LineSegment2) -> (f64, f64) {
        let near = s.distance_to(&self.center);
        let far = self.center.dist(&s.first_point()).max(self.center.dist(&s.second_point()));
        (near, far)
    }

    /// The boundaries cross at two points. Tangent, nested and coincident
    /// circles do not intersect.
    pub fn intersects_circle(&self, other: &Circle) -> bool {
        let d = self.center.dist(&other.center);
        is_strictly_less((self.radius - other.radius).abs(), d)
            && is_strictly_less(d, self.radius + other.radius)
    }

    /// The boundaries share at least one point.
    pub fn intersects_circle_inclusive(&self, other: &Circle) -> bool {
        let d = self.center.dist(&other.center);
        is_less_or_equal((self.radius - other.radius).abs(), d)
            && is_less_or_equal(d, self.radius + other.radius)
    }

    pub fn intersects_polygon(&self, polygon: &Polygon) -> bool {
        polygon.sides().any(|side| self.intersects_segment(&side))
            || self.contains_point_exclusive(&polygon.centroid())
            || polygon.contains_point(&self.center).exclusive()
    }

    pub fn intersects_polygon_inclusive(&self, polygon: &Polygon) -> bool {
        polygon.sides().any(|side| self.intersects_segment_inclusive(&side))
            || self.contains_point(&polygon.centroid())
            || polygon.contains_point(&self.center).inclusive()
    }
}

impl Container<Point> for Circle {
    fn contains(&self, p: &Point) -> Orientation {
        let d = self.center.dist(p);
        if are_equal(d, self.radius) {
            Orientation::On
        } else if d < self.radius {
            Orientation::In
        } else {
            Orientation::Out
        }
    }
}

impl GeometricShape for Circle {
    fn centroid(&self) -> Point {
        self.center
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn bounding_box(&self) -> BoundingBox {
        let r = Vector::new(self.radius, self.radius);
        BoundingBox::from_corners(self.center + r.negate(), self.center + r)
    }

    fn translate(&mut self, v: &Vector) {
        self.center.translate(v);
    }

    /// Only the centre moves; a circle is its own image under rotation.
    fn rotate_about(&mut self, angle: f64, pivot: &Point) {
        self.center.rotate(angle, pivot);
    }
}
