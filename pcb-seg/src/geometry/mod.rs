/// Enums to classify geometric relations
pub mod geo_enums;

/// Traits shared by the geometric primitives
pub mod geo_traits;

/// Primitive geometric types: points, segments and chains of segments
pub mod primitives;
