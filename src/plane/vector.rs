use std::ops;
use cgmath::InnerSpace;

use crate::plane::{Vector2, VirtualPoint};
use crate::util::math::{are_equal, is_zero};

/// A displacement in the plane.
///
/// ```
/// # use hitbox::plane::{p2, v2, Vector};
/// let v = Vector::between(&p2(1.0, 1.0), &p2(4.0, 5.0));
/// assert_eq!(v, v2(3.0, 4.0));
/// assert_eq!(v.length(), 5.0);
/// assert!(v.has_right_angle(&v2(-4.0, 3.0)));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Vector {
    v: Vector2,
}

/// The zero vector.
impl Default for Vector {
    fn default() -> Self {
        Vector::new(0.0, 0.0)
    }
}

impl Vector {
    pub fn new(x: f64, y: f64) -> Self {
        Vector { v: Vector2::new(x, y) }
    }

    /// A vector along the x axis; `y` is implicitly zero.
    pub fn from_x(x: f64) -> Self {
        Vector::new(x, 0.0)
    }

    /// The vector from the origin to `p`.
    pub fn from_point<P: VirtualPoint + ?Sized>(p: &P) -> Self {
        Vector::new(p.x(), p.y())
    }

    /// The displacement `end - start`.
    pub fn between<P, Q>(start: &P, end: &Q) -> Self
    where
        P: VirtualPoint + ?Sized,
        Q: VirtualPoint + ?Sized,
    {
        Vector { v: end.position() - start.position() }
    }

    pub fn x(&self) -> f64 { self.v.x }
    pub fn y(&self) -> f64 { self.v.y }

    pub fn dot_product(&self, other: &Vector) -> f64 {
        self.v.dot(other.v)
    }

    /// The z component of the 3d cross product; positive when `other` is
    /// counter-clockwise from `self`.
    pub fn cross(&self, other: &Vector) -> f64 {
        self.v.perp_dot(other.v)
    }

    pub fn length(&self) -> f64 {
        self.dot_product(self).sqrt()
    }

    pub fn negate(&self) -> Vector {
        Vector { v: -self.v }
    }

    pub fn multiply(&self, scalar: f64) -> Vector {
        Vector { v: self.v * scalar }
    }

    /// The dot product is zero within the error margin. Meaningless when
    /// either vector is zero.
    pub fn has_right_angle(&self, other: &Vector) -> bool {
        is_zero(self.dot_product(other))
    }

    pub fn is_zero(&self) -> bool {
        is_zero(self.length())
    }

    /// The unit vector in the same direction, or `None` for the zero vector.
    pub fn normalize(&self) -> Option<Vector> {
        if self.is_zero() {
            None
        } else {
            Some(Vector { v: self.v.normalize() })
        }
    }

    /// This vector rotated a quarter turn counter-clockwise.
    pub fn perpendicular(&self) -> Vector {
        Vector::new(-self.v.y, self.v.x)
    }
}

impl From<Vector2> for Vector {
    fn from(v: Vector2) -> Vector {
        Vector { v }
    }
}

impl From<Vector> for Vector2 {
    fn from(v: Vector) -> Vector2 {
        v.v
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Vector) -> bool {
        are_equal(self.v.x, other.v.x) && are_equal(self.v.y, other.v.y)
    }
}

impl ops::Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.negate()
    }
}

impl ops::Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        self.multiply(scalar)
    }
}

impl ops::Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector { v: self.v + other.v }
    }
}

impl ops::Sub for Vector {
    type Output = Vector;

    fn sub(self, other: Vector) -> Vector {
        Vector { v: self.v - other.v }
    }
}
