//! Capabilities and helpers shared by the planar types.
pub mod container;
pub mod intersect;
pub mod math;
pub mod parse;
pub mod segment;
