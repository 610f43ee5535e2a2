/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

mod fpa;
mod utilization;

#[doc(inline)]
pub use fpa::EPSILON;
#[doc(inline)]
pub use fpa::FPA;
#[doc(inline)]
pub use utilization::utilization;
