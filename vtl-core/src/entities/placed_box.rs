use crate::geometry::primitives::{Dims3, Rect};

/// Represents a [`CargoBox`](crate::entities::CargoBox) that has been placed in a [`Truck`](crate::entities::Truck).
/// Only the id of the box is stored, the box itself remains owned by the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedBox {
    /// ID of the box that was placed
    pub box_id: String,
    /// Top-left corner of the footprint on the floor, and the bottom of the box
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Whether width and depth of the box were swapped to place it
    pub rotated: bool,
    /// Extents of the box as it was placed, after rotation
    pub dims: Dims3,
}

impl PlacedBox {
    /// The area occupied on the floor of its layer
    pub fn footprint_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.dims.width, self.dims.depth)
    }

    /// z coordinate of the top face
    pub fn top(&self) -> f64 {
        self.z + self.dims.height
    }

    /// 1 if width and depth were swapped, 0 otherwise
    pub fn rotation_code(&self) -> u8 {
        match self.rotated {
            true => 1,
            false => 0,
        }
    }
}
