/// A bounded piece of a line between two endpoints.
pub trait Segment: Sized {
    type Point: Clone;

    /// Builds the segment without validation; callers guarantee that `start`
    /// and `end` are distinct.
    fn from_endpoints(start: Self::Point, end: Self::Point) -> Self;
}

/// Segments joining consecutive points of an open chain: `n` points give
/// `n - 1` segments.
pub fn chain<S: Segment>(points: &[S::Point]) -> impl Iterator<Item=S> + '_ {
    points.windows(2).map(|w| S::from_endpoints(w[0].clone(), w[1].clone()))
}

/// Segments joining consecutive points of a closed ring, including the
/// closing segment from the last point back to the first.
pub fn ring<S: Segment>(points: &[S::Point]) -> impl Iterator<Item=S> + '_ {
    let n = points.len();
    (0..n).map(move |i| {
        S::from_endpoints(points[i].clone(), points[(i + 1) % n].clone())
    })
}

#[cfg(test)]
mod test {
    use crate::plane::{p2, LineSegment2};
    use super::*;

    #[test]
    fn test_chain_and_ring() {
        let pts = [p2(0.0, 0.0), p2(2.0, 0.0), p2(2.0, 1.0)];

        let open: Vec<LineSegment2> = chain::<LineSegment2>(&pts).collect();
        assert_eq!(open.len(), 2);
        assert_eq!(open[1].first_point(), p2(2.0, 0.0));
        assert_eq!(open[1].second_point(), p2(2.0, 1.0));

        let closed: Vec<LineSegment2> = ring::<LineSegment2>(&pts).collect();
        assert_eq!(closed.len(), 3);
        assert_eq!(closed[2].first_point(), p2(2.0, 1.0));
        assert_eq!(closed[2].second_point(), p2(0.0, 0.0));
        assert_eq!(closed[2].length(), 5f64.sqrt());
    }
}
