use log::trace;
use vtl_core::geometry::primitives::{Rect, Size};
use vtl_core::util::assertions;

use crate::config::FFGConfig;
use crate::opt::free_space::FreeSpace;
use crate::opt::guillotine::{self, Placement2D};

/// A footprint offered to the layer packer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerItem<K> {
    /// Identifies the item, carried through to its placement
    pub key: K,
    pub footprint: Size,
    /// Whether this item may be turned on the floor, on top of [`FFGConfig::allow_rotation`]
    pub rotatable: bool,
}

#[derive(Clone, Debug)]
pub struct LayerResult<K> {
    /// Placements, in the order the items were offered
    pub placed: Vec<Placement2D<K>>,
    /// Keys of the items that did not fit, in the order they were offered
    pub unplaced: Vec<K>,
    /// Free rectangles remaining after the last placement
    pub free_rects: Vec<Rect>,
}

/// First-Fit Guillotine over a single layer with a `floor` of the given size.
/// Items are tried strictly in the given order, without backtracking or lookahead.
pub fn pack_layer<K: Copy>(
    floor: Size,
    items: impl IntoIterator<Item = LayerItem<K>>,
    config: &FFGConfig,
) -> LayerResult<K> {
    let floor = Rect::from_size(floor);
    let mut free_space = FreeSpace::new(floor, config.merge_free_rects);
    let mut placed: Vec<Placement2D<K>> = vec![];
    let mut unplaced = vec![];

    for item in items {
        let allow_rotation = config.allow_rotation && item.rotatable;
        let placement = guillotine::place(
            &mut free_space,
            item.key,
            item.footprint,
            allow_rotation,
            config.split_rule,
        );
        match placement {
            Some(p) => {
                trace!(
                    "[FFG] placed footprint {:?} at ({:.3}, {:.3}), rotated: {}, {} free rects left",
                    item.footprint,
                    p.rect.x,
                    p.rect.y,
                    p.rotated,
                    free_space.rects().len()
                );
                placed.push(p);
                debug_assert!(assertions::free_rects_tile_floor(
                    free_space.rects(),
                    &placed.iter().map(|p| p.rect).collect::<Vec<_>>(),
                    &floor
                ));
            }
            None => unplaced.push(item.key),
        }
    }

    LayerResult {
        placed,
        unplaced,
        free_rects: free_space.rects().to_vec(),
    }
}
