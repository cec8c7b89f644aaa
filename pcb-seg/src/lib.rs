#![doc = document_features::document_features!()]
//! Exact integer line-segment geometry: orientation, distance, projection, intersection and
//! clearance checks between directed segments with integer endpoints.

/// Geometric primitives and the predicates defined on them
pub mod geometry;

/// Helper functions which do not belong to any specific primitive
pub mod util;

/// Coordinate type of every [`Point`](geometry::primitives::Point)
pub type Coord = i32;

/// Double-width integer holding coordinate differences, lengths and distances.
/// Any difference of two [`Coord`]s is formed in this type before it is used.
pub type ECoord = i64;

/// Quad-width integer for products of [`ECoord`]s: cross and dot products, squared lengths and
/// distances, line coefficients. No such product can overflow it.
pub type WCoord = i128;
