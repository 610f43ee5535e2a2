/// Set of enums representing various geometric properties
pub mod geo_enums;

/// Set of geometric primitives - atomic building blocks for the geometry module
pub mod primitives;
