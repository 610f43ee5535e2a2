/// Bookkeeping of the free rectangles within a single layer
pub mod free_space;

/// Placement of a footprint in the first fitting free rectangle and guillotine splitting of the remainder
pub mod guillotine;

/// First-Fit Guillotine packing of a single layer
pub mod layer;

/// Stacking of layers into a truck
pub mod truck;

#[doc(inline)]
pub use truck::FFGOptimizer;

#[doc(inline)]
pub use truck::pack;
