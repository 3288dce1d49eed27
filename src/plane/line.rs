use std::ops;

use crate::error::{GeometricError, Result};
use crate::plane::{BoundingBox, Point, Vector, VirtualPoint};
use crate::util::intersect::Intersect;
use crate::util::math::{is_greater_or_equal, is_less_or_equal, is_zero};
use crate::util::segment::Segment;

/// Represents an infinite line as an anchor point and a unit direction.
///
/// Vertical lines need no special encoding: their direction has a zero x
/// component and [`slope`](Line2::slope) reports `None`.
///
/// ```
/// # use hitbox::plane::{p2, Line2};
/// let l = Line2::from_points(p2(1.0, 1.0), p2(2.0, 2.0)).unwrap();
/// assert_eq!(l.slope(), Some(1.0));
/// assert_eq!(l.intercept(), Some(0.0));
///
/// let v = Line2::vertical(3.0);
/// assert_eq!(v.slope(), None);
/// assert_eq!(l.intersection(&v), Some(p2(3.0, 3.0)));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Line2 {
    p: Point,
    v: Vector,
}

impl Line2 {
    pub fn new(p: Point, v: Vector) -> Result<Line2> {
        if !(p.is_finite() && v.x().is_finite() && v.y().is_finite()) {
            return Err(GeometricError::NonFiniteCoordinate)
        }
        let v = v.normalize().ok_or(GeometricError::DegenerateDirection)?;
        Ok(Line2 { p, v })
    }

    pub fn from_points(p1: Point, p2: Point) -> Result<Line2> {
        if !(p1.is_finite() && p2.is_finite()) {
            return Err(GeometricError::NonFiniteCoordinate)
        }
        if p1 == p2 {
            return Err(GeometricError::CoincidentPoints(0, 1))
        }
        Line2::new(p1, p2 - p1)
    }

    /// `y = slope * x + intercept`
    pub fn from_slope_intercept(slope: f64, intercept: f64) -> Result<Line2> {
        if !(slope.is_finite() && intercept.is_finite()) {
            return Err(GeometricError::NonFiniteCoordinate)
        }
        Line2::new(Point::new(0.0, intercept), Vector::new(1.0, slope))
    }

    pub fn vertical(x: f64) -> Line2 {
        Line2 { p: Point::new(x, 0.0), v: Vector::new(0.0, 1.0) }
    }

    pub fn horizontal(y: f64) -> Line2 {
        Line2 { p: Point::new(0.0, y), v: Vector::new(1.0, 0.0) }
    }

    pub fn point(&self) -> Point { self.p }

    /// Unit direction of the line.
    pub fn direction(&self) -> Vector { self.v }

    pub fn is_vertical(&self) -> bool {
        is_zero(self.v.x())
    }

    pub fn is_horizontal(&self) -> bool {
        is_zero(self.v.y())
    }

    pub fn slope(&self) -> Option<f64> {
        if self.is_vertical() {
            None
        } else {
            Some(self.v.y() / self.v.x())
        }
    }

    /// The y coordinate where the line crosses the y axis.
    pub fn intercept(&self) -> Option<f64> {
        self.slope().map(|m| self.p.y() - m * self.p.x())
    }

    pub fn is_parallel(&self, other: &Line2) -> bool {
        is_zero(self.v.cross(&other.v))
    }

    pub fn is_perpendicular(&self, other: &Line2) -> bool {
        self.v.has_right_angle(&other.v)
    }

    /// Distance from `q` to the line, positive on the left of the direction.
    pub fn signed_distance<P: VirtualPoint + ?Sized>(&self, q: &P) -> f64 {
        self.v.cross(&Vector::between(&self.p, q))
    }

    pub fn distance_to<P: VirtualPoint + ?Sized>(&self, q: &P) -> f64 {
        self.signed_distance(q).abs()
    }

    pub fn is_collinear<P: VirtualPoint + ?Sized>(&self, q: &P) -> bool {
        is_zero(self.signed_distance(q))
    }

    /// The unique point shared with `other`. Parallel lines, including
    /// coincident ones, have none.
    pub fn intersection(&self, other: &Line2) -> Option<Point> {
        let denom = self.v.cross(&other.v);
        if is_zero(denom) {
            None
        } else {
            let t = Vector::between(&self.p, &other.p).cross(&other.v) / denom;
            Some(self.p + self.v * t)
        }
    }

    /// Like [`intersection`](Line2::intersection), for callers that require
    /// the lines to cross.
    pub fn try_intersection(&self, other: &Line2) -> Result<Point> {
        self.intersection(other).ok_or(GeometricError::ParallelLines)
    }

    /// The line through `through` at a right angle to this one.
    pub fn generate_perpendicular(&self, through: Point) -> Line2 {
        Line2 { p: through, v: self.v.perpendicular() }
    }

    /// Foot of the perpendicular dropped from `q`.
    pub fn project<P: VirtualPoint + ?Sized>(&self, q: &P) -> Point {
        let t = Vector::between(&self.p, q).dot_product(&self.v);
        self.p + self.v * t
    }

    pub fn translate(&mut self, v: &Vector) {
        self.p.translate(v);
    }

    pub fn rotate<P: VirtualPoint + ?Sized>(&mut self, angle: f64, pivot: &P) {
        self.p.rotate(angle, pivot);
        let mut tip = Point::new(self.v.x(), self.v.y());
        tip.rotate(angle, &Point::origin());
        self.v = Vector::from_point(&tip);
    }
}

impl PartialEq for Line2 {
    fn eq(&self, other: &Line2) -> bool {
        self.is_parallel(other) && self.is_collinear(&other.p)
    }
}

impl ops::Add<Vector> for Line2 {
    type Output = Line2;

    fn add(mut self, other: Vector) -> Self {
        self.translate(&other);
        self
    }
}

impl Intersect<&Line2> for Line2 {
    type Output = Option<Point>;

    fn intersect(&self, other: &Line2) -> Option<Point> {
        self.intersection(other)
    }
}

/// Represents a bounded part of a line between two distinct endpoints.
///
/// "Inclusive" predicates count contact at an endpoint as a match, the plain
/// variants do not:
///
/// ```
/// # use hitbox::plane::{p2, LineSegment2};
/// let a = LineSegment2::new(p2(0.0, 0.0), p2(2.0, 2.0)).unwrap();
/// let b = LineSegment2::new(p2(0.0, 2.0), p2(2.0, 0.0)).unwrap();
/// assert_eq!(a.intersection(&b), Some(p2(1.0, 1.0)));
/// assert!(a.intersects(&b) && a.intersects_inclusive(&b));
///
/// let c = LineSegment2::new(p2(0.0, 0.0), p2(1.0, 1.0)).unwrap();
/// let d = LineSegment2::new(p2(1.0, 1.0), p2(2.0, 2.0)).unwrap();
/// assert!(c.intersects_inclusive(&d));
/// assert!(!c.intersects(&d));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct LineSegment2 {
    a: Point,
    b: Point,
    line: Line2,
}

impl LineSegment2 {
    pub fn new(a: Point, b: Point) -> Result<Self> {
        let line = Line2::from_points(a, b)?;
        Ok(LineSegment2 { a, b, line })
    }

    pub fn first_point(&self) -> Point { self.a }
    pub fn second_point(&self) -> Point { self.b }
    pub fn line(&self) -> &Line2 { &self.line }

    pub fn length(&self) -> f64 {
        self.a.dist(&self.b)
    }

    pub fn midpoint(&self) -> Point {
        self.a.midpoint(&self.b)
    }

    fn in_range<P: VirtualPoint + ?Sized>(&self, q: &P) -> bool {
        let (min_x, max_x) = (self.a.x().min(self.b.x()), self.a.x().max(self.b.x()));
        let (min_y, max_y) = (self.a.y().min(self.b.y()), self.a.y().max(self.b.y()));
        is_greater_or_equal(q.x(), min_x) && is_less_or_equal(q.x(), max_x)
            && is_greater_or_equal(q.y(), min_y) && is_less_or_equal(q.y(), max_y)
    }

    pub fn is_endpoint<P: VirtualPoint + ?Sized>(&self, q: &P) -> bool {
        let q = Point::from_virtual(q);
        q == self.a || q == self.b
    }

    /// `q` lies on the segment, endpoints included.
    pub fn contains<P: VirtualPoint + ?Sized>(&self, q: &P) -> bool {
        self.line.is_collinear(q) && self.in_range(q)
    }

    /// `q` lies on the segment, endpoints excluded.
    pub fn contains_exclusive<P: VirtualPoint + ?Sized>(&self, q: &P) -> bool {
        self.contains(q) && !self.is_endpoint(q)
    }

    /// The segments cross at a single point that is an endpoint of neither.
    pub fn intersects(&self, other: &LineSegment2) -> bool {
        match self.line.intersection(&other.line) {
            Some(p) => {
                !self.is_endpoint(&p) && !other.is_endpoint(&p)
                    && self.contains(&p) && other.contains(&p)
            }
            None => false
        }
    }

    /// The segments share at least one point. Collinear segments that
    /// overlap or touch end to end count.
    pub fn intersects_inclusive(&self, other: &LineSegment2) -> bool {
        match self.line.intersection(&other.line) {
            Some(p) => self.contains(&p) && other.contains(&p),
            None => self.overlaps_collinear(other)
        }
    }

    fn overlaps_collinear(&self, other: &LineSegment2) -> bool {
        self.line == other.line
            && (self.contains(&other.a) || self.contains(&other.b)
                || other.contains(&self.a) || other.contains(&self.b))
    }

    /// The line crosses the segment away from its endpoints.
    pub fn intersects_line(&self, line: &Line2) -> bool {
        match self.line.intersection(line) {
            Some(p) => !self.is_endpoint(&p) && self.contains(&p),
            None => false
        }
    }

    /// The line touches the segment anywhere, or contains it entirely.
    pub fn intersects_line_inclusive(&self, line: &Line2) -> bool {
        match self.line.intersection(line) {
            Some(p) => self.contains(&p),
            None => self.line == *line
        }
    }

    /// The single point shared with `other`, if there is exactly one.
    pub fn intersection(&self, other: &LineSegment2) -> Option<Point> {
        self.line.intersection(&other.line)
            .filter(|p| self.contains(p) && other.contains(p))
    }

    pub fn closest_point<P: VirtualPoint + ?Sized>(&self, q: &P) -> Point {
        let foot = self.line.project(q);
        if self.in_range(&foot) {
            foot
        } else if q.dist(&self.a) <= q.dist(&self.b) {
            self.a
        } else {
            self.b
        }
    }

    pub fn distance_to<P: VirtualPoint + ?Sized>(&self, q: &P) -> f64 {
        q.dist(&self.closest_point(q))
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_corners(self.a, self.b)
    }

    pub fn translate(&mut self, v: &Vector) {
        self.a.translate(v);
        self.b.translate(v);
        self.line.translate(v);
    }

    pub fn rotate<P: VirtualPoint + ?Sized>(&mut self, angle: f64, pivot: &P) {
        self.a.rotate(angle, pivot);
        self.b.rotate(angle, pivot);
        self.line.rotate(angle, pivot);
    }
}

impl Segment for LineSegment2 {
    type Point = Point;

    fn from_endpoints(a: Point, b: Point) -> Self {
        let v = (b - a).normalize().unwrap_or_else(|| Vector::from_x(1.0));
        LineSegment2 { a, b, line: Line2 { p: a, v } }
    }
}

impl Intersect<&LineSegment2> for LineSegment2 {
    type Output = Option<Point>;

    fn intersect(&self, other: &LineSegment2) -> Option<Point> {
        self.intersection(other)
    }
}

impl Intersect<&Line2> for LineSegment2 {
    type Output = Option<Point>;

    fn intersect(&self, line: &Line2) -> Option<Point> {
        self.line.intersection(line).filter(|p| self.contains(p))
    }
}
