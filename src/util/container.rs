/// Where a queried value lies relative to a closed shape.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Orientation {
    In,
    On,
    Out,
}

impl Orientation {
    /// Boundary counts as contained.
    pub fn inclusive(self) -> bool {
        self != Orientation::Out
    }

    /// Only the strict interior counts as contained.
    pub fn exclusive(self) -> bool {
        self == Orientation::In
    }
}

/// A type that implements `Container<P>` divides all possible values of `P` into
/// cases enumerated by `Orientation`:
///
/// - `Orientation::In`: the point is within the container.
/// - `Orientation::On`: the point is on the boundary of the container, within
///   the crate-wide error margin.
/// - `Orientation::Out`: the point is outside the container.
///
/// Circles, polygons and the `Shape` enum are point containers.
pub trait Container<P> {
    fn contains(&self, p: &P) -> Orientation;
}
