use serde::{Deserialize, Serialize};

/// Two dimensional extent of a footprint on the floor of a layer.
/// `w` runs along the truck width, `h` along the truck depth.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub fn new(w: f64, h: f64) -> Self {
        Size { w, h }
    }

    /// The same footprint rotated by 90 degrees in-plane.
    pub fn swapped(self) -> Self {
        Size {
            w: self.h,
            h: self.w,
        }
    }

    pub fn area(&self) -> f64 {
        self.w * self.h
    }
}
