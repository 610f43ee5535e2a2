use vtl_core::geometry::primitives::{Rect, Size};
use vtl_core::util::FPA;

use crate::config::SplitRule;
use crate::opt::free_space::FreeSpace;

/// A free rectangle in which a footprint fits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fit {
    /// Index of the free rectangle
    pub free_idx: usize,
    /// Footprint as it will be placed, after rotation
    pub used: Size,
    pub rotated: bool,
}

/// A footprint placed on the floor of a layer, carrying the key of whatever it represents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement2D<K> {
    pub key: K,
    /// Area occupied on the floor, after rotation
    pub rect: Rect,
    /// Width and depth were swapped
    pub rotated: bool,
}

/// The two canonical ways to cut the remainder of a free rectangle after a footprint was placed in its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CutOrder {
    /// Full-height strip to the right, bottom strip as wide as the footprint
    VerticalFirst,
    /// Strip to the right as high as the footprint, full-width bottom strip
    HorizontalFirst,
}

impl CutOrder {
    pub fn choose(rule: SplitRule, leftover_w: f64, leftover_h: f64) -> Self {
        let vertical_first = match rule {
            SplitRule::LargerLeftover => leftover_w >= leftover_h,
            SplitRule::SmallerLeftover => leftover_w <= leftover_h,
        };
        match vertical_first {
            true => CutOrder::VerticalFirst,
            false => CutOrder::HorizontalFirst,
        }
    }
}

/// Returns the first free rectangle (in list order) in which `footprint` fits.
/// The unrotated orientation is tried first, the rotated one only if `allow_rotation`.
pub fn first_fit(free_rects: &[Rect], footprint: Size, allow_rotation: bool) -> Option<Fit> {
    free_rects
        .iter()
        .enumerate()
        .find_map(|(free_idx, fr)| {
            if fr.fits(footprint) {
                Some(Fit {
                    free_idx,
                    used: footprint,
                    rotated: false,
                })
            } else if allow_rotation && fr.fits(footprint.swapped()) {
                Some(Fit {
                    free_idx,
                    used: footprint.swapped(),
                    rotated: true,
                })
            } else {
                None
            }
        })
}

/// Splits what remains of `region` after a footprint of size `used` is placed in its top-left corner.
/// Returns at most two free rectangles, degenerate remainders are dropped.
pub fn split(region: Rect, used: Size, rule: SplitRule) -> impl Iterator<Item = Rect> {
    let leftover_w = region.w - used.w;
    let leftover_h = region.h - used.h;
    assert!(
        FPA(leftover_w) >= FPA(0.0) && FPA(leftover_h) >= FPA(0.0),
        "footprint {used:?} does not fit in free rectangle {region:?}"
    );
    //absorb rounding noise
    let (lw, lh) = (leftover_w.max(0.0), leftover_h.max(0.0));

    let (right, bottom) = match CutOrder::choose(rule, lw, lh) {
        CutOrder::VerticalFirst => (
            Rect::new(region.x + used.w, region.y, lw, region.h),
            Rect::new(region.x, region.y + used.h, used.w, lh),
        ),
        CutOrder::HorizontalFirst => (
            Rect::new(region.x + used.w, region.y, lw, used.h),
            Rect::new(region.x, region.y + used.h, region.w, lh),
        ),
    };

    [right, bottom].into_iter().filter(|r| !r.is_degenerate())
}

/// Places `footprint` in the first fitting free rectangle of `free_space` and splits the remainder.
/// Returns `None` if it fits nowhere, in which case `free_space` is left untouched.
pub fn place<K>(
    free_space: &mut FreeSpace,
    key: K,
    footprint: Size,
    allow_rotation: bool,
    rule: SplitRule,
) -> Option<Placement2D<K>> {
    let fit = first_fit(free_space.rects(), footprint, allow_rotation)?;
    let region = free_space.take(fit.free_idx);
    free_space.insert(split(region, fit.used, rule));

    Some(Placement2D {
        key,
        rect: Rect::new(region.x, region.y, fit.used.w, fit.used.h),
        rotated: fit.rotated,
    })
}
