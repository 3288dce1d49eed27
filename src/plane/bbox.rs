use rstar::{RTreeObject, AABB};

use crate::error::{GeometricError, Result};
use crate::plane::{Point, VirtualPoint};
use crate::util::math::{is_greater_or_equal, is_less_or_equal, CALC_ERROR_MARGIN};

/// An axis-aligned box, used to cheaply rule out intersections.
///
/// `min` is never greater than `max` on either axis. Touching boxes
/// intersect, so a box never reports a miss for shapes that share even a
/// single point.
///
/// ```
/// # use hitbox::plane::{p2, BoundingBox};
/// let a = BoundingBox::from_points(&[p2(0.0, 0.0), p2(2.0, 1.0), p2(1.0, 3.0)]).unwrap();
/// assert_eq!(a.min(), p2(0.0, 0.0));
/// assert_eq!(a.max(), p2(2.0, 3.0));
///
/// let b = BoundingBox::from_corners(p2(2.0, 3.0), p2(4.0, 4.0));
/// assert!(a.intersects(&b));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    min: Point,
    max: Point,
}

impl BoundingBox {
    /// The smallest box holding both points, in any order.
    pub fn from_corners<P, Q>(a: P, b: Q) -> Self
    where
        P: VirtualPoint,
        Q: VirtualPoint,
    {
        BoundingBox {
            min: Point::new(a.x().min(b.x()), a.y().min(b.y())),
            max: Point::new(a.x().max(b.x()), a.y().max(b.y())),
        }
    }

    pub fn from_points<P: VirtualPoint>(points: &[P]) -> Result<Self> {
        let (first, rest) = points.split_first().ok_or(GeometricError::EmptyPointSet)?;
        let mut bbox = BoundingBox::from_corners(Point::from_virtual(first), Point::from_virtual(first));
        for p in rest {
            bbox.expand_to_include(p);
        }
        Ok(bbox)
    }

    pub fn min(&self) -> Point { self.min }
    pub fn max(&self) -> Point { self.max }

    pub fn width(&self) -> f64 {
        self.max.x() - self.min.x()
    }

    pub fn height(&self) -> f64 {
        self.max.y() - self.min.y()
    }

    pub fn center(&self) -> Point {
        self.min.midpoint(&self.max)
    }

    pub fn contains_point<P: VirtualPoint + ?Sized>(&self, p: &P) -> bool {
        is_greater_or_equal(p.x(), self.min.x()) && is_less_or_equal(p.x(), self.max.x())
            && is_greater_or_equal(p.y(), self.min.y()) && is_less_or_equal(p.y(), self.max.y())
    }

    pub fn intersects(&self, other: &BoundingBox) -> bool {
        is_less_or_equal(self.min.x(), other.max.x()) && is_greater_or_equal(self.max.x(), other.min.x())
            && is_less_or_equal(self.min.y(), other.max.y()) && is_greater_or_equal(self.max.y(), other.min.y())
    }

    pub fn expand_to_include<P: VirtualPoint + ?Sized>(&mut self, p: &P) {
        self.min = Point::new(self.min.x().min(p.x()), self.min.y().min(p.y()));
        self.max = Point::new(self.max.x().max(p.x()), self.max.y().max(p.y()));
    }

    /// The smallest box holding both boxes.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let mut bbox = *self;
        bbox.expand_to_include(&other.min);
        bbox.expand_to_include(&other.max);
        bbox
    }
}

/// The R-tree envelope grows by the error margin on every side so that the
/// index agrees with the tolerant [`BoundingBox::intersects`].
impl RTreeObject for BoundingBox {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.min.x() - CALC_ERROR_MARGIN, self.min.y() - CALC_ERROR_MARGIN],
            [self.max.x() + CALC_ERROR_MARGIN, self.max.y() + CALC_ERROR_MARGIN],
        )
    }
}
