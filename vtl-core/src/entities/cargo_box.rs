use crate::geometry::geo_enums::Axis;
use crate::geometry::primitives::Dims3;

/// Box to be loaded into a [`Truck`](crate::entities::Truck).
#[derive(Clone, Debug, PartialEq)]
pub struct CargoBox {
    /// Unique identifier of the box within a request
    pub id: String,
    pub dims: Dims3,
    pub weight: f64,
    /// Accepted and carried along, but never consulted during placement
    pub priority: Option<f64>,
    /// Whether the box may be turned by 90 degrees on the floor (width and depth swapped)
    pub rotatable: bool,
}

impl CargoBox {
    pub fn new(id: impl Into<String>, dims: Dims3, weight: f64) -> Self {
        CargoBox {
            id: id.into(),
            dims,
            weight,
            priority: None,
            rotatable: true,
        }
    }

    pub fn with_rotatable(mut self, rotatable: bool) -> Self {
        self.rotatable = rotatable;
        self
    }

    pub fn with_priority(mut self, priority: Option<f64>) -> Self {
        self.priority = priority;
        self
    }

    pub fn volume(&self) -> f64 {
        self.dims.volume()
    }

    pub fn footprint(&self) -> f64 {
        self.dims.footprint()
    }

    /// Rotates the box by 90 degrees around `axis`, updating its dimensions in place.
    pub fn rotate(&mut self, axis: Axis) {
        self.dims = self.dims.rotated(axis);
    }

    /// Returns a copy of the box rotated by 90 degrees around `axis`.
    pub fn rotated(&self, axis: Axis) -> Self {
        CargoBox {
            dims: self.dims.rotated(axis),
            ..self.clone()
        }
    }
}
