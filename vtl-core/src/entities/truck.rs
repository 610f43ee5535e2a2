use crate::geometry::primitives::{Dims3, Rect};

/// The container in which [`CargoBox`](crate::entities::CargoBox)es are loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct Truck {
    pub id: String,
    /// Interior dimensions of the truck bed
    pub dims: Dims3,
    /// Maximum total weight the truck can carry, unlimited if `None`
    pub max_weight: Option<f64>,
}

impl Truck {
    pub fn new(id: impl Into<String>, dims: Dims3, max_weight: Option<f64>) -> Self {
        Truck {
            id: id.into(),
            dims,
            max_weight,
        }
    }

    pub fn volume(&self) -> f64 {
        self.dims.volume()
    }

    /// The floor of the truck bed, spanning its width and depth
    pub fn floor(&self) -> Rect {
        Rect::new(0.0, 0.0, self.dims.width, self.dims.depth)
    }
}
