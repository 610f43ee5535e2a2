use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::geometry::geo_enums::Axis;
use crate::geometry::primitives::Size;

/// Dimensions of a cuboid.
/// `width` runs along the truck width, `height` is vertical and `depth` runs along the truck depth.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dims3 {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Dims3 {
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Dims3 {
            width,
            height,
            depth,
        }
    }

    /// Same as [`Dims3::new`], but rejects non-finite or non-positive dimensions.
    pub fn try_new(width: f64, height: f64, depth: f64) -> Result<Self> {
        for (name, v) in [("width", width), ("height", height), ("depth", depth)] {
            ensure!(
                v.is_finite() && v > 0.0,
                "invalid dimensions, {name} must be positive and finite: {v}"
            );
        }
        Ok(Dims3::new(width, height, depth))
    }

    /// Returns the dimensions after a 90 degree rotation around `axis`.
    pub fn rotated(self, axis: Axis) -> Self {
        let Dims3 {
            width,
            height,
            depth,
        } = self;
        match axis {
            Axis::X => Dims3::new(width, depth, height),
            Axis::Y => Dims3::new(depth, height, width),
            Axis::Z => Dims3::new(height, width, depth),
        }
    }

    pub fn volume(&self) -> f64 {
        self.width * self.height * self.depth
    }

    /// Area occupied on the floor
    pub fn footprint(&self) -> f64 {
        self.width * self.depth
    }

    /// Footprint as a 2D size on the floor of a layer
    pub fn floor_size(&self) -> Size {
        Size::new(self.width, self.depth)
    }
}
