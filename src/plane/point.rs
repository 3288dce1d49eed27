use std::fmt;
use std::ops;
use cgmath::{Basis2, Deg, MetricSpace, Rad, Rotation, Rotation2};

use crate::error::{GeometricError, Result};
use crate::plane::{Point2, Vector};
use crate::util::math::are_equal;

/// Anything with a position in the plane.
///
/// Accessors never mutate; [`translate`](VirtualPoint::translate) and
/// [`rotate`](VirtualPoint::rotate) move the receiver in place. Rotations are
/// counter-clockwise for positive angles, in radians unless the method name
/// says otherwise.
pub trait VirtualPoint {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn move_to(&mut self, x: f64, y: f64);

    fn position(&self) -> Point2 {
        Point2::new(self.x(), self.y())
    }

    fn dist<P: VirtualPoint + ?Sized>(&self, other: &P) -> f64 {
        self.position().distance(other.position())
    }

    fn translate(&mut self, v: &Vector) {
        self.move_to(self.x() + v.x(), self.y() + v.y());
    }

    fn translate_xy(&mut self, dx: f64, dy: f64) {
        self.move_to(self.x() + dx, self.y() + dy);
    }

    /// Adds the coordinates of `displacement`, treating it as a vector from
    /// the origin rather than an absolute position.
    fn translate_by_point<P: VirtualPoint + ?Sized>(&mut self, displacement: &P) {
        self.translate_xy(displacement.x(), displacement.y());
    }

    fn rotate<P: VirtualPoint + ?Sized>(&mut self, angle: f64, pivot: &P) {
        if angle == 0.0 {
            return
        }
        let pivot = pivot.position();
        let rotation: Basis2<f64> = Rotation2::from_angle(Rad(angle));
        let moved = pivot + rotation.rotate_vector(self.position() - pivot);
        self.move_to(moved.x, moved.y);
    }

    fn rotate_degrees<P: VirtualPoint + ?Sized>(&mut self, angle: f64, pivot: &P) {
        self.rotate(Rad::from(Deg(angle)).0, pivot);
    }
}

/// An owned position in the plane.
///
/// Equality is tolerant: two points are equal when both coordinates agree
/// within [`CALC_ERROR_MARGIN`](crate::util::math::CALC_ERROR_MARGIN).
///
/// ```
/// # use hitbox::plane::{p2, v2, VirtualPoint};
/// let mut p = p2(1.0, 0.0);
/// p.rotate_degrees(90.0, &p2(0.0, 0.0));
/// assert_eq!(p, p2(0.0, 1.0));
/// p.translate(&v2(2.0, -1.0));
/// assert_eq!(p, p2(2.0, 0.0));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Like [`Point::new`], but rejects NaN and infinite coordinates.
    pub fn try_new(x: f64, y: f64) -> Result<Self> {
        let p = Point { x, y };
        if p.is_finite() {
            Ok(p)
        } else {
            Err(GeometricError::NonFiniteCoordinate)
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn origin() -> Self {
        Point::default()
    }

    pub fn from_virtual<P: VirtualPoint + ?Sized>(p: &P) -> Self {
        Point::new(p.x(), p.y())
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl VirtualPoint for Point {
    fn x(&self) -> f64 { self.x }
    fn y(&self) -> f64 { self.y }

    fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

impl VirtualPoint for Point2 {
    fn x(&self) -> f64 { self.x }
    fn y(&self) -> f64 { self.y }

    fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

impl From<Point2> for Point {
    fn from(p: Point2) -> Point {
        Point::new(p.x, p.y)
    }
}

impl From<Point> for Point2 {
    fn from(p: Point) -> Point2 {
        Point2::new(p.x, p.y)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Point) -> bool {
        are_equal(self.x, other.x) && are_equal(self.y, other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl ops::Sub<Point> for Point {
    type Output = Vector;

    fn sub(self, other: Point) -> Vector {
        Vector::between(&other, &self)
    }
}

impl ops::Add<Vector> for Point {
    type Output = Point;

    fn add(mut self, v: Vector) -> Point {
        self.translate(&v);
        self
    }
}
