mod cargo_box;
mod placed_box;
mod solution;
mod truck;

#[doc(inline)]
pub use cargo_box::CargoBox;

#[doc(inline)]
pub use placed_box::PlacedBox;

#[doc(inline)]
pub use solution::LayerRecord;

#[doc(inline)]
pub use solution::PackingSolution;

#[doc(inline)]
pub use truck::Truck;
