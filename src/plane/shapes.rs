//! Constructors for common polygons. Each returns a [`Polygon`] tagged with
//! the matching [`PolygonKind`].
use crate::error::{GeometricError, Result};
use crate::plane::{p2, v2, Point, Polygon, PolygonKind, Vector, VirtualPoint};

pub fn triangle(a: Point, b: Point, c: Point) -> Result<Polygon> {
    Polygon::with_kind(vec![a, b, c], PolygonKind::Triangle)
}

/// An axis-aligned rectangle with one corner at `origin`, spanning `extent`.
///
/// ```
/// # use hitbox::plane::{p2, v2, shapes, GeometricShape};
/// let r = shapes::rectangle(p2(1.0, 1.0), v2(3.0, 2.0)).unwrap();
/// assert_eq!(r.area(), 6.0);
/// assert!(shapes::rectangle(p2(1.0, 1.0), v2(3.0, 0.0)).is_err());
/// ```
pub fn rectangle(origin: Point, extent: Vector) -> Result<Polygon> {
    let ex = v2(extent.x(), 0.0);
    let ey = v2(0.0, extent.y());

    let vertices = vec![
        origin,
        origin + ex,
        origin + extent,
        origin + ey
    ];

    Polygon::with_kind(vertices, PolygonKind::Rectangle)
}

/// An axis-aligned rectangle with `a` and `b` as opposite corners.
pub fn rectangle_from_corners(a: Point, b: Point) -> Result<Polygon> {
    Polygon::with_kind(corners(a, b), PolygonKind::Rectangle)
}

/// An axis-aligned square with one corner at `origin`. A negative `side`
/// extends towards negative x and y.
pub fn square(origin: Point, side: f64) -> Result<Polygon> {
    let vertices = corners(origin, origin + v2(side, side));
    Polygon::with_kind(vertices, PolygonKind::Square)
}

/// An axis-aligned square with `a` and `b` as opposite corners. Fails with
/// [`GeometricError::UnequalSides`] unless the corners span equal widths and
/// heights.
pub fn square_from_corners(a: Point, b: Point) -> Result<Polygon> {
    Polygon::with_kind(corners(a, b), PolygonKind::Square)
}

fn corners(a: Point, b: Point) -> Vec<Point> {
    vec![a, p2(a.x(), b.y()), b, p2(b.x(), a.y())]
}

/// A regular polygon with `n` vertices on a circle around `center`, the first
/// one directly to the right of it.
pub fn regular(center: Point, radius: f64, n: usize) -> Result<Polygon> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(GeometricError::NonPositiveRadius(radius))
    }
    let step = 2.0 * std::f64::consts::PI / n as f64;
    let vertices = (0..n).map(|i| {
        let mut v = center + v2(radius, 0.0);
        v.rotate(step * i as f64, &center);
        v
    }).collect();

    let kind = match n {
        3 => PolygonKind::Triangle,
        4 => PolygonKind::Square,
        _ => PolygonKind::General,
    };
    Polygon::with_kind(vertices, kind)
}
