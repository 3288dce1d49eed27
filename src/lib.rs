//! A library for two-dimensional geometry and collision detection between
//! simple shapes:
//!
//! ```
//! use hitbox::plane::{p2, v2, Circle, GeometricShape, LineSegment2, Shape};
//! use hitbox::shapes;
//!
//! let square: Shape = shapes::square(p2(-1.0, -1.0), 2.0).unwrap().into();
//! let inner: Shape = Circle::new(p2(0.0, 0.0), 0.5).unwrap().into();
//! let mut far: Shape = Circle::new(p2(5.0, 5.0), 0.5).unwrap().into();
//!
//! assert!(square.contains(&inner));
//! assert!(!square.intersects(&far));
//!
//! far.translate(&v2(-4.0, -4.0));
//! assert!(square.intersects(&far));
//!
//! let a = LineSegment2::new(p2(0.0, 0.0), p2(2.0, 2.0)).unwrap();
//! let b = LineSegment2::new(p2(0.0, 2.0), p2(2.0, 0.0)).unwrap();
//! assert_eq!(a.intersection(&b), Some(p2(1.0, 1.0)));
//! ```
//!
//! Common [`shapes`] can be constructed directly from the corresponding
//! module, and whole scenes of shapes are checked with [`collision`].
//!
//! All comparisons tolerate an absolute error of
//! [`CALC_ERROR_MARGIN`](util::math::CALC_ERROR_MARGIN).
pub mod collision;
pub mod error;
pub mod plane;
pub mod util;

pub use error::{GeometricError, ParseError};
pub use plane::shapes;
