use crate::{ECoord, WCoord};

/// Trait for types that can detect collisions (touching included) between `Self` and `T`.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for types that can compute the minimum distance between `Self` and `T`.
pub trait DistanceTo<T> {
    /// Minimum distance between two primitives, rounded down. Will be 0 in case of a collision.
    fn distance_to(&self, other: &T) -> ECoord;

    /// Squared version of [DistanceTo::distance_to], without rounding
    fn sq_distance_to(&self, other: &T) -> WCoord;
}
