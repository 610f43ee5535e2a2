use serde::{Deserialize, Serialize};

use crate::geometry::geo_enums::GeoRelation;
use crate::geometry::primitives::Size;
use crate::util::FPA;

/// Axis-aligned rectangle, anchored at its top-left corner.
/// `x` grows rightwards (truck width) and `y` grows downwards (truck depth).
/// It spans `[x, x + w]` by `[y, y + h]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Rect { x, y, w, h }
    }

    /// Rectangle anchored at the origin with the given size.
    pub fn from_size(size: Size) -> Self {
        Rect::new(0.0, 0.0, size.w, size.h)
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    /// True if the rectangle has no area (within tolerance).
    pub fn is_degenerate(&self) -> bool {
        FPA(self.w) <= FPA(0.0) || FPA(self.h) <= FPA(0.0)
    }

    /// True if every edge of `other` lies within or on the bounds of `self`.
    pub fn contains(&self, other: &Rect) -> bool {
        FPA(self.x) <= FPA(other.x)
            && FPA(self.y) <= FPA(other.y)
            && FPA(self.right()) >= FPA(other.right())
            && FPA(self.bottom()) >= FPA(other.bottom())
    }

    /// True if the interiors of both rectangles overlap. Touching edges are not an overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        FPA(f64::max(self.x, other.x)) < FPA(f64::min(self.right(), other.right()))
            && FPA(f64::max(self.y, other.y)) < FPA(f64::min(self.bottom(), other.bottom()))
    }

    /// True if a footprint of `size` fits inside `self` without rotation.
    pub fn fits(&self, size: Size) -> bool {
        FPA(size.w) <= FPA(self.w) && FPA(size.h) <= FPA(self.h)
    }

    /// Returns the geometric relation between `self` and another [`Rect`].
    /// Equal rectangles are reported as `Surrounding`.
    pub fn relation_to(&self, other: &Rect) -> GeoRelation {
        if self.contains(other) {
            GeoRelation::Surrounding
        } else if other.contains(self) {
            GeoRelation::Enclosed
        } else if self.overlaps(other) {
            GeoRelation::Intersecting
        } else {
            GeoRelation::Disjoint
        }
    }
}
