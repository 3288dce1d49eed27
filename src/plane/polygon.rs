//! Simple polygons, optionally tagged as a triangle, rectangle or square.
//!
//! A [`Polygon`] is a closed loop of at least three vertices. The loop must
//! be simple: no repeated vertices, no three consecutive vertices on a line,
//! and no two sides touching except where neighbours share a vertex. Every
//! constructor enforces this, so a polygon value is always valid.
//!
//! Vertices may wind either way.
use std::fmt;
use std::str::FromStr;

use crate::error::{GeometricError, Result};
use crate::plane::{BoundingBox, Circle, GeometricShape, LineSegment2, Point, Vector, VirtualPoint};
use crate::util::container::{Container, Orientation};
use crate::util::math::{are_equal, is_greater_or_equal};
use crate::util::parse::parse_to_array;
use crate::util::segment;

/// Extra structure a [`Polygon`] is checked for when it is built.
///
/// Rotating or translating a polygon keeps its kind valid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PolygonKind {
    General,
    Triangle,
    /// Four sides, every corner a right angle.
    Rectangle,
    /// A rectangle with equal sides.
    Square,
}

impl PolygonKind {
    /// The number of sides polygons of this kind must have.
    pub fn num_sides(&self) -> Option<usize> {
        match self {
            PolygonKind::General => None,
            PolygonKind::Triangle => Some(3),
            PolygonKind::Rectangle | PolygonKind::Square => Some(4),
        }
    }

    fn validate(&self, vertices: &[Point]) -> Result<()> {
        if let Some(expected) = self.num_sides() {
            if vertices.len() != expected {
                return Err(GeometricError::WrongVertexCount { expected, found: vertices.len() })
            }
        }

        if let PolygonKind::Rectangle | PolygonKind::Square = self {
            let sides: Vec<LineSegment2> = segment::ring::<LineSegment2>(vertices).collect();
            let n = sides.len();
            let square_corners = (0..n).all(|i| {
                sides[i].line().is_perpendicular(sides[(i + 1) % n].line())
            });
            if !square_corners {
                return Err(GeometricError::NotRectangular)
            }
            if *self == PolygonKind::Square {
                let length = sides[0].length();
                if !sides.iter().all(|s| are_equal(s.length(), length)) {
                    return Err(GeometricError::UnequalSides)
                }
            }
        }

        Ok(())
    }
}

/// A simple polygon that owns its vertices.
///
/// ```
/// # use hitbox::plane::{p2, Polygon, GeometricShape};
/// # use hitbox::util::container::Orientation;
/// let triangle = Polygon::new(vec![p2(0.0, 0.0), p2(4.0, 0.0), p2(0.0, 3.0)]).unwrap();
/// assert_eq!(triangle.perimeter(), 12.0);
/// assert_eq!(triangle.area(), 6.0);
/// assert_eq!(triangle.contains_point(&p2(1.0, 1.0)), Orientation::In);
/// assert_eq!(triangle.contains_point(&p2(2.0, 0.0)), Orientation::On);
///
/// let same: Polygon = "4,0; 0,0; 0,3".parse().unwrap();
/// assert_eq!(triangle, same);
/// ```
#[derive(Clone, Debug)]
pub struct Polygon {
    vertices: Vec<Point>,
    kind: PolygonKind,
}

fn validate(vertices: &[Point]) -> Result<()> {
    let n = vertices.len();
    if n < 3 {
        return Err(GeometricError::TooFewVertices(n))
    }
    if !vertices.iter().all(Point::is_finite) {
        return Err(GeometricError::NonFiniteCoordinate)
    }

    for i in 0..n {
        for j in (i + 1)..n {
            if vertices[i] == vertices[j] {
                return Err(GeometricError::CoincidentPoints(i, j))
            }
        }
    }

    let sides: Vec<LineSegment2> = segment::ring::<LineSegment2>(vertices).collect();

    for (i, side) in sides.iter().enumerate() {
        if side.line().is_collinear(&vertices[(i + 2) % n]) {
            return Err(GeometricError::CollinearVertices((i + 1) % n))
        }
    }

    // neighbouring sides share a vertex, any other contact is a crossing
    for i in 0..n {
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue
            }
            if sides[i].intersects_inclusive(&sides[j]) {
                return Err(GeometricError::SelfIntersecting(i, j))
            }
        }
    }

    Ok(())
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Result<Polygon> {
        Polygon::with_kind(vertices, PolygonKind::General)
    }

    pub fn with_kind(vertices: Vec<Point>, kind: PolygonKind) -> Result<Polygon> {
        validate(&vertices)?;
        kind.validate(&vertices)?;
        Ok(Polygon { vertices, kind })
    }

    /// Parses a coordinate list (see [`crate::util::parse`]) and checks it
    /// against `kind`.
    pub fn parse_as(s: &str, kind: PolygonKind) -> Result<Polygon> {
        let vertices = parse_to_array(s)?;
        Polygon::with_kind(vertices, kind)
    }

    pub fn kind(&self) -> PolygonKind { self.kind }
    pub fn vertices(&self) -> &[Point] { &self.vertices }
    pub fn num_sides(&self) -> usize { self.vertices.len() }

    /// Sides in vertex order, ending with the side from the last vertex back
    /// to the first.
    pub fn sides(&self) -> impl Iterator<Item=LineSegment2> + '_ {
        segment::ring::<LineSegment2>(&self.vertices)
    }

    /// Twice the area, positive for counter-clockwise winding.
    fn signed_double_area(&self) -> f64 {
        self.sides().map(|s| {
            let (a, b) = (s.first_point(), s.second_point());
            a.x() * b.y() - b.x() * a.y()
        }).sum()
    }

    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_double_area() > 0.0
    }

    /// Tolerant on-edge test first, then an even-odd ray cast towards +x.
    pub fn contains_point<P: VirtualPoint + ?Sized>(&self, p: &P) -> Orientation {
        let q = Point::from_virtual(p);
        if self.sides().any(|s| s.contains(&q)) {
            return Orientation::On
        }

        let mut inside = false;
        for s in self.sides() {
            let (a, b) = (s.first_point(), s.second_point());
            if (a.y() > q.y()) != (b.y() > q.y()) {
                let x = a.x() + (q.y() - a.y()) * (b.x() - a.x()) / (b.y() - a.y());
                if q.x() < x {
                    inside = !inside;
                }
            }
        }

        if inside { Orientation::In } else { Orientation::Out }
    }

    pub fn contains_circle(&self, c: &Circle) -> bool {
        let center = c.center();
        self.contains_point(&center).inclusive()
            && self.sides().all(|s| is_greater_or_equal(s.distance_to(&center), c.radius()))
    }

    pub fn contains_segment(&self, s: &LineSegment2) -> bool {
        self.contains_point(&s.first_point()).inclusive()
            && self.contains_point(&s.second_point()).inclusive()
            && !self.intersects_segment(s)
    }

    pub fn contains_polygon(&self, other: &Polygon) -> bool {
        other.vertices.iter().all(|v| self.contains_point(v).inclusive())
            && !other.sides().any(|s| self.intersects_segment(&s))
    }

    /// Some side crosses `s` away from both segments' endpoints.
    pub fn intersects_segment(&self, s: &LineSegment2) -> bool {
        self.sides().any(|side| side.intersects(s))
    }

    pub fn intersects_segment_inclusive(&self, s: &LineSegment2) -> bool {
        self.sides().any(|side| side.intersects_inclusive(s))
    }

    /// Sides cross, or one polygon's centroid is strictly inside the other.
    /// Polygons that only touch do not intersect.
    pub fn intersects_polygon(&self, other: &Polygon) -> bool {
        self.sides().any(|s| other.intersects_segment(&s))
            || other.contains_point(&self.centroid()).exclusive()
            || self.contains_point(&other.centroid()).exclusive()
    }

    pub fn intersects_polygon_inclusive(&self, other: &Polygon) -> bool {
        self.sides().any(|s| other.intersects_segment_inclusive(&s))
            || other.contains_point(&self.centroid()).inclusive()
            || self.contains_point(&other.centroid()).inclusive()
    }

    pub fn intersects_circle(&self, c: &Circle) -> bool {
        c.intersects_polygon(self)
    }

    pub fn intersects_circle_inclusive(&self, c: &Circle) -> bool {
        c.intersects_polygon_inclusive(self)
    }
}

impl Container<Point> for Polygon {
    fn contains(&self, p: &Point) -> Orientation {
        self.contains_point(p)
    }
}

impl GeometricShape for Polygon {
    /// The average of the vertices.
    fn centroid(&self) -> Point {
        let n = self.vertices.len() as f64;
        let (sx, sy) = self.vertices.iter()
            .fold((0.0, 0.0), |(sx, sy), v| (sx + v.x(), sy + v.y()));
        Point::new(sx / n, sy / n)
    }

    fn perimeter(&self) -> f64 {
        self.sides().map(|s| s.length()).sum()
    }

    fn area(&self) -> f64 {
        self.signed_double_area().abs() / 2.0
    }

    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from(self)
    }

    fn translate(&mut self, v: &Vector) {
        for vertex in self.vertices.iter_mut() {
            vertex.translate(v);
        }
    }

    fn rotate_about(&mut self, angle: f64, pivot: &Point) {
        for vertex in self.vertices.iter_mut() {
            vertex.rotate(angle, pivot);
        }
    }
}

impl From<&Polygon> for BoundingBox {
    fn from(polygon: &Polygon) -> BoundingBox {
        let first = polygon.vertices[0];
        let mut bbox = BoundingBox::from_corners(first, first);
        for v in &polygon.vertices[1..] {
            bbox.expand_to_include(v);
        }
        bbox
    }
}

/// Same vertex cycle, starting anywhere and winding either way. The kind
/// tag is not compared.
impl PartialEq for Polygon {
    fn eq(&self, other: &Polygon) -> bool {
        let (a, b) = (&self.vertices, &other.vertices);
        let n = a.len();
        if n != b.len() {
            return false
        }
        let start = match b.iter().position(|v| *v == a[0]) {
            Some(start) => start,
            None => return false,
        };
        (0..n).all(|i| a[i] == b[(start + i) % n])
            || (0..n).all(|i| a[i] == b[(start + n - i) % n])
    }
}

/// Writes `x0,y0;x1,y1;...`, which [`FromStr`] reads back.
impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ";")?;
            }
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}

impl FromStr for Polygon {
    type Err = GeometricError;

    fn from_str(s: &str) -> Result<Polygon> {
        Polygon::parse_as(s, PolygonKind::General)
    }
}

#[cfg(test)]
mod test {
    use std::f64::consts::PI;
    use approx::assert_relative_eq;
    use crate::error::ParseError;
    use crate::plane::{p2, v2};
    use super::*;

    fn poly(coords: &[(f64, f64)]) -> Polygon {
        Polygon::new(coords.iter().map(|&(x, y)| p2(x, y)).collect()).unwrap()
    }

    fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> LineSegment2 {
        LineSegment2::new(p2(ax, ay), p2(bx, by)).unwrap()
    }

    #[test]
    fn test_invalid() {
        assert_eq!(
            Polygon::new(vec![p2(0.0, 0.0), p2(1.0, 0.0)]).unwrap_err(),
            GeometricError::TooFewVertices(2)
        );
        assert_eq!(
            Polygon::new(vec![p2(0.0, 0.0), p2(1.0, 0.0), p2(1.0, 0.0)]).unwrap_err(),
            GeometricError::CoincidentPoints(1, 2)
        );
        assert_eq!(
            Polygon::new(vec![p2(0.0, 0.0), p2(1.0, 0.0), p2(2.0, 0.0), p2(1.0, 1.0)]).unwrap_err(),
            GeometricError::CollinearVertices(1)
        );
        // bow tie
        assert!(matches!(
            Polygon::new(vec![p2(0.0, 0.0), p2(1.0, 1.0), p2(1.0, 0.0), p2(0.0, 1.0)]),
            Err(GeometricError::SelfIntersecting(_, _))
        ));
        assert!(Polygon::new(vec![p2(f64::NAN, 0.0), p2(1.0, 0.0), p2(0.0, 1.0)]).is_err());
    }

    #[test]
    fn test_kinds() {
        let tri = vec![p2(0.0, 0.0), p2(1.0, 0.0), p2(0.0, 1.0)];
        assert_eq!(Polygon::with_kind(tri.clone(), PolygonKind::Triangle).unwrap().kind(), PolygonKind::Triangle);
        assert_eq!(
            Polygon::with_kind(tri, PolygonKind::Rectangle).unwrap_err(),
            GeometricError::WrongVertexCount { expected: 4, found: 3 }
        );

        let kite = vec![p2(0.0, 0.0), p2(2.0, 1.0), p2(0.0, 3.0), p2(-2.0, 1.0)];
        assert_eq!(
            Polygon::with_kind(kite, PolygonKind::Rectangle).unwrap_err(),
            GeometricError::NotRectangular
        );

        let rect = vec![p2(0.0, 0.0), p2(2.0, 0.0), p2(2.0, 1.0), p2(0.0, 1.0)];
        assert!(Polygon::with_kind(rect.clone(), PolygonKind::Rectangle).is_ok());
        assert_eq!(
            Polygon::with_kind(rect, PolygonKind::Square).unwrap_err(),
            GeometricError::UnequalSides
        );

        let diamond = vec![p2(1.0, 0.0), p2(2.0, 1.0), p2(1.0, 2.0), p2(0.0, 1.0)];
        assert!(Polygon::with_kind(diamond, PolygonKind::Square).is_ok());
    }

    #[test]
    fn test_parse() {
        let p = Polygon::parse_as("(0,0) (2,0) (2,2) (0,2)", PolygonKind::Square).unwrap();
        assert_eq!(p.num_sides(), 4);
        assert_eq!(p.to_string(), "0,0;2,0;2,2;0,2");
        assert_eq!(p.to_string().parse::<Polygon>().unwrap(), p);

        assert_eq!(
            "0,0;1".parse::<Polygon>().unwrap_err(),
            GeometricError::Parse(ParseError::OddTokenCount(3))
        );
        assert_eq!(
            "0,0;1,1".parse::<Polygon>().unwrap_err(),
            GeometricError::TooFewVertices(2)
        );
    }

    #[test]
    fn test_measures() {
        let p = poly(&[(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (0.0, 2.0)]);
        assert_eq!(p.centroid(), p2(2.0, 1.0));
        assert_relative_eq!(p.perimeter(), 12.0);
        assert_relative_eq!(p.area(), 8.0);
        assert!(p.is_counter_clockwise());

        let bbox = p.bounding_box();
        assert_eq!(bbox.min(), p2(0.0, 0.0));
        assert_eq!(bbox.max(), p2(4.0, 2.0));
    }

    #[test]
    fn test_equality() {
        let p = poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let rotated = poly(&[(1.0, 1.0), (0.0, 1.0), (0.0, 0.0), (1.0, 0.0)]);
        let reversed = poly(&[(1.0, 0.0), (0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]);
        let other = poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 2.0), (0.0, 1.0)]);
        let triangle = poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        assert_eq!(p, rotated);
        assert_eq!(p, reversed);
        assert_ne!(p, other);
        assert_ne!(p, triangle);
    }

    #[test]
    fn test_contains_point() {
        let p = poly(&[(1.0, 1.0), (4.0, 1.0), (4.0, 4.0), (1.0, 4.0)]);
        assert_eq!(p.contains_point(&p2(2.0, 2.0)), Orientation::In);
        assert_eq!(p.contains_point(&p2(1.0, 1.0)), Orientation::On);
        assert_eq!(p.contains_point(&p2(4.0, 2.5)), Orientation::On);
        assert_eq!(p.contains_point(&p2(5.0, 2.0)), Orientation::Out);
        // ray passes exactly through a vertex
        assert_eq!(p.contains_point(&p2(0.0, 4.0)), Orientation::Out);
        assert_eq!(p.contains_point(&p2(0.0, 1.0)), Orientation::Out);

        // concave "L"
        let l = poly(&[(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0), (1.0, 2.0), (0.0, 2.0)]);
        assert_eq!(l.contains_point(&p2(0.5, 1.5)), Orientation::In);
        assert_eq!(l.contains_point(&p2(1.5, 1.5)), Orientation::Out);
        assert_eq!(l.contains_point(&p2(1.5, 0.5)), Orientation::In);
    }

    #[test]
    fn test_polygon_intersection() {
        let separated = (
            poly(&[(3.0, 1.0), (4.0, 1.0), (4.0, 2.0), (3.0, 2.0)]),
            poly(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0)]),
        );
        assert!(!separated.0.intersects_polygon(&separated.1));
        assert!(!separated.0.intersects_polygon_inclusive(&separated.1));

        let corner = (
            poly(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0)]),
            poly(&[(1.0, 3.0), (3.0, 1.0), (3.0, 3.0)]),
        );
        assert!(!corner.0.intersects_polygon(&corner.1));
        assert!(corner.0.intersects_polygon_inclusive(&corner.1));

        let shared_side = (
            poly(&[(1.0, 1.0), (3.0, 1.0), (1.0, 3.0)]),
            poly(&[(1.0, 3.0), (3.0, 1.0), (3.0, 3.0)]),
        );
        assert!(!shared_side.0.intersects_polygon(&shared_side.1));
        assert!(shared_side.1.intersects_polygon_inclusive(&shared_side.0));

        let overlapping = (
            poly(&[(1.0, 1.0), (4.0, 1.0), (4.0, 4.0), (1.0, 4.0)]),
            poly(&[(3.0, 3.0), (5.0, 3.0), (5.0, 5.0), (3.0, 5.0)]),
        );
        assert!(overlapping.0.intersects_polygon(&overlapping.1));
        assert!(overlapping.1.intersects_polygon(&overlapping.0));

        let outer = poly(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let inner = poly(&[(4.0, 4.0), (5.0, 4.0), (5.0, 5.0)]);
        assert!(outer.intersects_polygon(&inner) && inner.intersects_polygon(&outer));
        assert!(outer.intersects_polygon(&outer.clone()));
    }

    #[test]
    fn test_segment_intersection() {
        let triangle = poly(&[(1.0, 1.0), (3.0, 1.0), (2.0, 3.0)]);
        assert!(triangle.intersects_segment(&seg(2.0, 2.0, 3.0, 3.0)));

        let square = poly(&[(2.0, 1.0), (4.0, 1.0), (4.0, 3.0), (2.0, 3.0)]);
        let along_top = seg(1.0, 3.0, 5.0, 3.0);
        assert!(!square.intersects_segment(&along_top));
        assert!(square.intersects_segment_inclusive(&along_top));

        // only meets the sides at the shared vertex (2, 3)
        let through_corner = seg(1.0, 4.0, 3.0, 2.0);
        assert!(!square.intersects_segment(&through_corner));
        assert!(square.intersects_segment_inclusive(&through_corner));

        assert!(square.intersects_segment(&seg(1.0, 2.0, 3.0, 2.0)));
    }

    #[test]
    fn test_contains_shapes() {
        let outer = poly(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let inner = poly(&[(4.0, 4.0), (5.0, 4.0), (5.0, 5.0)]);
        let crossing = poly(&[(8.0, 8.0), (12.0, 8.0), (12.0, 12.0)]);
        assert!(outer.contains_polygon(&inner));
        assert!(!inner.contains_polygon(&outer));
        assert!(!outer.contains_polygon(&crossing));
        assert!(outer.contains_polygon(&outer));

        assert!(outer.contains_circle(&Circle::new(p2(5.0, 5.0), 5.0).unwrap()));
        assert!(!outer.contains_circle(&Circle::new(p2(5.0, 5.0), 5.5).unwrap()));
        assert!(!outer.contains_circle(&Circle::new(p2(20.0, 5.0), 1.0).unwrap()));

        assert!(outer.contains_segment(&seg(0.0, 0.0, 10.0, 10.0)));
        assert!(!outer.contains_segment(&seg(5.0, 5.0, 15.0, 5.0)));
    }

    #[test]
    fn test_motion() {
        let mut p = poly(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        p.rotate_degrees(90.0);
        assert_eq!(p, poly(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]));
        assert_eq!(p.vertices()[0], p2(2.0, 0.0));

        p.rotate_about(PI, &p2(0.0, 0.0));
        assert_eq!(p.centroid(), p2(-1.0, -1.0));

        p.translate(&v2(1.0, 1.0));
        assert_eq!(p.centroid(), p2(0.0, 0.0));

        p.move_centroid(&p2(10.0, 10.0));
        assert_eq!(p.bounding_box().min(), p2(9.0, 9.0));
        assert_relative_eq!(p.area(), 4.0);
    }
}
