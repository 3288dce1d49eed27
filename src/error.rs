//! Errors raised while building or computing with geometry.
//!
//! Construction errors are raised synchronously by constructors, so an
//! invalid shape never exists. Queries that can legitimately have no answer
//! (parallel lines, disjoint boxes) return `Option` instead of an error.
use thiserror::Error;

/// Failures while reading a coordinate list from text.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("no coordinates found")]
    Empty,
    #[error("expected an even number of coordinates, found {0}")]
    OddTokenCount(usize),
    #[error("token {index} ({token:?}) is not a number")]
    InvalidNumber { index: usize, token: String },
    #[error("expected {needed} coordinates from token {start}, found {found}")]
    InsufficientTokens { start: usize, needed: usize, found: usize },
    #[error("point count {0:?} is not a non-negative integer")]
    InvalidCount(String),
}

/// Broad classes of [`GeometricError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The inputs do not describe a valid object.
    Construction,
    /// An operation was asked for a result that does not exist.
    Computation,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeometricError {
    #[error("a polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("expected exactly {expected} vertices, got {found}")]
    WrongVertexCount { expected: usize, found: usize },
    #[error("a path needs at least 2 points, got {0}")]
    TooFewPoints(usize),
    #[error("points {0} and {1} coincide")]
    CoincidentPoints(usize, usize),
    #[error("vertices around index {0} are collinear")]
    CollinearVertices(usize),
    #[error("sides {0} and {1} intersect")]
    SelfIntersecting(usize, usize),
    #[error("not every corner is a right angle")]
    NotRectangular,
    #[error("sides are not all the same length")]
    UnequalSides,
    #[error("radius must be finite and positive, got {0}")]
    NonPositiveRadius(f64),
    #[error("coordinates must be finite")]
    NonFiniteCoordinate,
    #[error("a direction must not be the zero vector")]
    DegenerateDirection,
    #[error("cannot bound an empty set of points")]
    EmptyPointSet,
    #[error("lines are parallel and have no unique intersection")]
    ParallelLines,
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl GeometricError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GeometricError::ParallelLines => ErrorKind::Computation,
            _ => ErrorKind::Construction,
        }
    }
}

pub type Result<T> = std::result::Result<T, GeometricError>;
