//! The base module of the virtual truck loader, containing all components shared by packing heuristics.

/// Entities to model the truck loading problem
pub mod entities;

/// Geometric primitives and base operations
pub mod geometry;

/// Importing packing requests into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
