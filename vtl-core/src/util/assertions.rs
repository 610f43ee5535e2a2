use std::collections::HashMap;

use itertools::Itertools;
use log::error;

use crate::entities::{CargoBox, PackingSolution, PlacedBox, Truck};
use crate::geometry::geo_enums::GeoRelation;
use crate::geometry::primitives::Rect;
use crate::util::FPA;

//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks and in tests

pub fn free_rects_disjoint(free_rects: &[Rect]) -> bool {
    for (a, b) in free_rects.iter().tuple_combinations() {
        if a.relation_to(b) != GeoRelation::Disjoint {
            error!("free rectangles {a:?} and {b:?} overlap");
            return false;
        }
    }
    true
}

pub fn free_rects_within(free_rects: &[Rect], floor: &Rect) -> bool {
    free_rects.iter().all(|r| floor.contains(r))
}

/// Checks that the free rectangles and the occupied rectangles together exactly cover the floor.
pub fn free_rects_tile_floor(free_rects: &[Rect], occupied: &[Rect], floor: &Rect) -> bool {
    let covered = free_rects
        .iter()
        .chain(occupied.iter())
        .map(|r| r.area())
        .sum::<f64>();
    let tolerance = 1e-9 * f64::max(1.0, floor.area());
    free_rects_disjoint(&[free_rects, occupied].concat())
        && free_rects_within(free_rects, floor)
        && (covered - floor.area()).abs() <= tolerance
}

pub fn placements_within_truck(truck: &Truck, placed: &[PlacedBox]) -> bool {
    let floor = truck.floor();
    placed.iter().all(|pb| {
        floor.contains(&pb.footprint_rect())
            && FPA(pb.z) >= FPA(0.0)
            && FPA(pb.top()) <= FPA(truck.dims.height)
    })
}

pub fn placements_do_not_overlap(placed: &[PlacedBox]) -> bool {
    for (a, b) in placed.iter().tuple_combinations() {
        let vertical_overlap = FPA(f64::max(a.z, b.z)) < FPA(f64::min(a.top(), b.top()));
        if vertical_overlap && a.footprint_rect().overlaps(&b.footprint_rect()) {
            error!("placed boxes {} and {} overlap", a.box_id, b.box_id);
            return false;
        }
    }
    true
}

/// Every box id appears exactly once, either as placed or as unplaced
pub fn solution_accounts_for_all_boxes(boxes: &[CargoBox], solution: &PackingSolution) -> bool {
    let mut counts: HashMap<&str, usize> = boxes.iter().map(|b| (b.id.as_str(), 0)).collect();
    let ids = solution
        .placed
        .iter()
        .map(|pb| pb.box_id.as_str())
        .chain(solution.unplaced.iter().map(|id| id.as_str()));
    for id in ids {
        match counts.get_mut(id) {
            Some(c) => *c += 1,
            None => {
                error!("solution contains unknown box id {id}");
                return false;
            }
        }
    }
    counts.values().all(|&c| c == 1)
}

/// Placed boxes have the dimensions of their box, swapped in-plane if rotated
pub fn placed_dims_match_boxes(boxes: &[CargoBox], placed: &[PlacedBox]) -> bool {
    let by_id: HashMap<&str, &CargoBox> = boxes.iter().map(|b| (b.id.as_str(), b)).collect();
    placed.iter().all(|pb| match by_id.get(pb.box_id.as_str()) {
        None => false,
        Some(b) => {
            let (w, d) = match pb.rotated {
                false => (b.dims.width, b.dims.depth),
                true => (b.dims.depth, b.dims.width),
            };
            FPA(pb.dims.width) == FPA(w)
                && FPA(pb.dims.depth) == FPA(d)
                && FPA(pb.dims.height) == FPA(b.dims.height)
        }
    })
}
