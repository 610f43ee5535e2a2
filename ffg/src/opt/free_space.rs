use std::mem;

use itertools::Itertools;
use ordered_float::OrderedFloat;
use vtl_core::geometry::primitives::Rect;
use vtl_core::util::FPA;

/// Set of free rectangles on the floor of a single layer.
/// The rectangles are pairwise disjoint and, together with the placed footprints, exactly tile the floor.
#[derive(Clone, Debug)]
pub struct FreeSpace {
    rects: Vec<Rect>,
    merge: bool,
}

impl FreeSpace {
    /// Creates the free space of an empty floor. If `merge` is enabled, adjacent free rectangles are merged after every update.
    pub fn new(floor: Rect, merge: bool) -> Self {
        let rects = match floor.is_degenerate() {
            true => vec![],
            false => vec![floor],
        };
        FreeSpace { rects, merge }
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Removes and returns the free rectangle at `idx`, the order of the others is kept.
    pub fn take(&mut self, idx: usize) -> Rect {
        self.rects.remove(idx)
    }

    /// Adds new free rectangles and restores the normal form of the set.
    pub fn insert(&mut self, rects: impl IntoIterator<Item = Rect>) {
        self.rects.extend(rects);
        self.normalize();
    }

    fn normalize(&mut self) {
        let rects = prune_contained(mem::take(&mut self.rects));
        self.rects = match self.merge {
            true => merge_adjacent(rects),
            false => rects,
        };
    }
}

/// Removes all degenerate rectangles and all rectangles contained in another one.
/// Of a set of (nearly) equal rectangles only the first is kept. Survivors keep their relative order.
pub fn prune_contained(rects: Vec<Rect>) -> Vec<Rect> {
    let keep = rects
        .iter()
        .enumerate()
        .map(|(i, r)| {
            !r.is_degenerate()
                && !rects
                    .iter()
                    .enumerate()
                    .any(|(j, s)| j != i && s.contains(r) && (j < i || !r.contains(s)))
        })
        .collect_vec();

    rects
        .into_iter()
        .zip(keep)
        .filter_map(|(r, keep)| keep.then_some(r))
        .collect()
}

/// Merges rectangles sharing a full edge until no more merges are possible.
/// Each round first sorts by `(y, h, x, w)` and tries horizontal merges (same y-span),
/// only if none were found it sorts by `(x, w, y, h)` and tries vertical merges (same x-span).
/// The result is therefore ordered by `(x, w, y, h)`. The area covered by the set is never changed.
pub fn merge_adjacent(mut rects: Vec<Rect>) -> Vec<Rect> {
    loop {
        rects = prune_contained(rects);

        rects.sort_by_key(|r| (OrderedFloat(r.y), OrderedFloat(r.h), OrderedFloat(r.x), OrderedFloat(r.w)));
        if merge_pass(&mut rects, merge_horizontal) {
            continue;
        }

        rects.sort_by_key(|r| (OrderedFloat(r.x), OrderedFloat(r.w), OrderedFloat(r.y), OrderedFloat(r.h)));
        if !merge_pass(&mut rects, merge_vertical) {
            break;
        }
    }
    prune_contained(rects)
}

/// Single sweep over `rects`: every rectangle is merged with the first later one it can be merged with.
/// Merged rectangles are appended at the back. Returns whether anything was merged.
fn merge_pass(rects: &mut Vec<Rect>, merge: fn(&Rect, &Rect) -> Option<Rect>) -> bool {
    let mut changed = false;
    let mut i = 0;
    while i < rects.len() {
        let found = (i + 1..rects.len()).find_map(|j| merge(&rects[i], &rects[j]).map(|m| (j, m)));
        match found {
            Some((j, merged)) => {
                //j > i, remove the back one first
                rects.remove(j);
                rects.remove(i);
                rects.push(merged);
                changed = true;
            }
            None => i += 1,
        }
    }
    changed
}

fn merge_horizontal(a: &Rect, b: &Rect) -> Option<Rect> {
    if FPA(a.y) != FPA(b.y) || FPA(a.h) != FPA(b.h) {
        return None;
    }
    if FPA(a.right()) == FPA(b.x) || FPA(b.right()) == FPA(a.x) {
        let x = f64::min(a.x, b.x);
        Some(Rect::new(x, a.y, f64::max(a.right(), b.right()) - x, a.h))
    } else {
        None
    }
}

fn merge_vertical(a: &Rect, b: &Rect) -> Option<Rect> {
    if FPA(a.x) != FPA(b.x) || FPA(a.w) != FPA(b.w) {
        return None;
    }
    if FPA(a.bottom()) == FPA(b.y) || FPA(b.bottom()) == FPA(a.y) {
        let y = f64::min(a.y, b.y);
        Some(Rect::new(a.x, y, a.w, f64::max(a.bottom(), b.bottom()) - y))
    } else {
        None
    }
}
