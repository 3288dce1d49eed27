/// Computes the point where two linear objects meet.
///
/// `Output` is an `Option` for lines and segments: parallel lines and
/// disjoint segments have no unique intersection, which is a normal outcome
/// rather than an error.
pub trait Intersect<K> {
    type Output;

    fn intersect(&self, other: K) -> Self::Output;
}
