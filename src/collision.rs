//! Pairwise and scene-wide collision detection between [`Collider`]s.
//!
//! A scene is a plain slice of colliders. [`detect_collisions`] finds every
//! colliding pair and notifies both sides:
//!
//! ```
//! # use hitbox::collision::{detect_collisions, Collider};
//! # use hitbox::plane::{p2, shapes, Shape};
//! struct Crate { id: u32, shape: Shape, hits: Vec<u32> }
//!
//! impl Collider for Crate {
//!     type Owner = u32;
//!     fn shape(&self) -> &Shape { &self.shape }
//!     fn owner(&self) -> &u32 { &self.id }
//!     fn is_deep_collision(&self) -> bool { true }
//!     fn on_collision(&mut self, other: &u32) { self.hits.push(*other) }
//! }
//!
//! let boxed = |id, x| Crate {
//!     id,
//!     shape: shapes::square(p2(x, 0.0), 2.0).unwrap().into(),
//!     hits: vec![],
//! };
//! let mut scene = vec![boxed(0, 0.0), boxed(1, 1.0), boxed(2, 10.0)];
//!
//! assert_eq!(detect_collisions(&mut scene), 1);
//! assert_eq!(scene[0].hits, vec![1]);
//! assert_eq!(scene[1].hits, vec![0]);
//! assert!(scene[2].hits.is_empty());
//! ```
use std::ptr;

use rstar::{RTree, RTreeObject, AABB};

use crate::plane::{BoundingBox, GeometricShape, Shape};

/// Something in a scene that can collide: a shape attached to an owner.
pub trait Collider {
    /// What the other side of a collision is told about.
    type Owner;

    fn shape(&self) -> &Shape;
    fn owner(&self) -> &Self::Owner;

    /// Whether one shape lying wholly inside the other counts as a collision.
    /// When neither collider of a pair asks for it, only touching or
    /// crossing boundaries collide.
    fn is_deep_collision(&self) -> bool;

    fn on_collision(&mut self, other: &Self::Owner);
}

/// Whether `a` and `b` collide. Touching counts, as does one shape lying
/// inside the other. A collider never collides with itself.
pub fn collides<C: Collider>(a: &C, b: &C) -> bool {
    if ptr::eq(a, b) {
        return false
    }

    let (sa, sb) = (a.shape(), b.shape());
    if !sa.bounding_box().intersects(&sb.bounding_box()) {
        return false
    }
    if !(a.is_deep_collision() || b.is_deep_collision()) {
        return sa.intersects_inclusive(sb)
    }

    sa.intersects_inclusive(sb) || sa.contains(sb) || sb.contains(sa)
}

/// Whether `collider` collides with any other collider in `scene`.
pub fn collides_any<C: Collider>(collider: &C, scene: &[C]) -> bool {
    scene.iter().any(|other| collides(collider, other))
}

/// The colliders in `scene` that collide with `collider`, in scene order.
pub fn get_collisions<'a, C: Collider>(collider: &C, scene: &'a [C]) -> Vec<&'a C> {
    scene.iter().filter(|other| collides(collider, *other)).collect()
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    index: usize,
    bbox: BoundingBox,
}

impl RTreeObject for Entry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.bbox.envelope()
    }
}

/// Colliding index pairs `(i, j)` with `i < j`, in ascending order.
fn colliding_pairs<C: Collider>(scene: &[C]) -> Vec<(usize, usize)> {
    let entries: Vec<Entry> = scene.iter().enumerate()
        .map(|(index, c)| Entry { index, bbox: c.shape().bounding_box() })
        .collect();
    let tree = RTree::bulk_load(entries);

    let mut candidates = 0;
    let mut pairs: Vec<(usize, usize)> = tree.intersection_candidates_with_other_tree(&tree)
        .filter(|(a, b)| a.index < b.index)
        .inspect(|_| candidates += 1)
        .map(|(a, b)| (a.index, b.index))
        .filter(|&(i, j)| collides(&scene[i], &scene[j]))
        .collect();
    pairs.sort_unstable();

    log::debug!(
        "{} colliders, {} broad phase candidates, {} collisions",
        scene.len(), candidates, pairs.len()
    );
    pairs
}

/// Tells each collider of the pair about the other.
fn invoke<C: Collider>(scene: &mut [C], i: usize, j: usize) {
    log::trace!("collision between colliders {} and {}", i, j);
    let (left, right) = scene.split_at_mut(j);
    let (a, b) = (&mut left[i], &mut right[0]);
    a.on_collision(b.owner());
    b.on_collision(a.owner());
}

/// Finds every colliding pair in `scene` and calls
/// [`on_collision`](Collider::on_collision) once on each side of each pair,
/// in ascending `(i, j)` index order. Returns the number of pairs.
///
/// Candidate pairs come from an R-tree of bounding boxes, so sparse scenes
/// avoid the all-pairs exact test.
pub fn detect_collisions<C: Collider>(scene: &mut [C]) -> usize {
    let pairs = colliding_pairs(scene);
    for &(i, j) in &pairs {
        invoke(scene, i, j);
    }
    pairs.len()
}

/// Same contract as [`detect_collisions`], testing every pair directly.
pub fn detect_collisions_naive<C: Collider>(scene: &mut [C]) -> usize {
    let mut count = 0;
    for i in 0..scene.len() {
        for j in (i + 1)..scene.len() {
            if collides(&scene[i], &scene[j]) {
                invoke(scene, i, j);
                count += 1;
            }
        }
    }
    count
}
