use std::cmp::Reverse;
use std::time::Instant;

use itertools::Itertools;
use log::{debug, info, warn};
use ordered_float::OrderedFloat;
use thousands::Separable;
use vtl_core::entities::{CargoBox, LayerRecord, PackingSolution, PlacedBox, Truck};
use vtl_core::geometry::primitives::Dims3;
use vtl_core::util::{FPA, assertions};

use crate::config::{FFGConfig, SortKey};
use crate::opt::layer::{LayerItem, pack_layer};

/// First-Fit Guillotine optimizer, stacks greedily packed layers on the floor of a truck.
pub struct FFGOptimizer<'a> {
    pub truck: &'a Truck,
    pub boxes: &'a [CargoBox],
    pub config: FFGConfig,
}

impl<'a> FFGOptimizer<'a> {
    pub fn new(truck: &'a Truck, boxes: &'a [CargoBox], config: FFGConfig) -> Self {
        Self {
            truck,
            boxes,
            config,
        }
    }

    pub fn solve(&self) -> PackingSolution {
        let start = Instant::now();
        let truck_height = self.truck.dims.height;
        let floor = self.truck.floor().size();

        let mut placed: Vec<PlacedBox> = vec![];
        let mut layers = vec![];
        let mut notes = vec![];
        let mut placed_weight = 0.0;

        //indices into self.boxes of the boxes still to be loaded
        let mut remaining = box_order(self.boxes, self.config.sort_key);
        let mut z = 0.0;

        while !remaining.is_empty() && FPA(z) < FPA(truck_height) {
            //stable, so boxes of equal height keep the configured order
            remaining = remaining
                .into_iter()
                .sorted_by_cached_key(|&i| Reverse(OrderedFloat(self.boxes[i].dims.height)))
                .collect();
            let layer_height = self.boxes[remaining[0]].dims.height;

            if FPA(z + layer_height) > FPA(truck_height) {
                warn!(
                    "[FFG] layer of height {layer_height:.3} at z {z:.3} exceeds the truck height {truck_height:.3}, {} boxes left unplaced",
                    remaining.len()
                );
                notes.push(format!(
                    "stopped at z={z}: no vertical room left for a layer of height {layer_height}"
                ));
                break;
            }

            let items = remaining.iter().map(|&i| LayerItem {
                key: i,
                footprint: self.boxes[i].dims.floor_size(),
                rotatable: self.boxes[i].rotatable,
            });
            let layer = pack_layer(floor, items, &self.config);

            if layer.placed.is_empty() {
                warn!(
                    "[FFG] no box fits on the floor of the layer at z {z:.3}, {} boxes left unplaced",
                    remaining.len()
                );
                notes.push(format!("stopped at z={z}: no remaining box fits on the floor"));
                break;
            }

            for p in &layer.placed {
                let b = &self.boxes[p.key];
                placed_weight += b.weight;
                placed.push(PlacedBox {
                    box_id: b.id.clone(),
                    x: p.rect.x,
                    y: p.rect.y,
                    z,
                    rotated: p.rotated,
                    dims: Dims3::new(p.rect.w, b.dims.height, p.rect.h),
                });
            }
            debug!(
                "[FFG] layer {} at z {z:.3} with height {layer_height:.3}: {} placed, {} remaining",
                layers.len(),
                layer.placed.len(),
                layer.unplaced.len()
            );
            layers.push(LayerRecord {
                z,
                height: layer_height,
                n_placed: layer.placed.len(),
            });

            remaining = layer.unplaced;
            z += layer_height;
        }

        let unplaced = remaining
            .into_iter()
            .map(|i| self.boxes[i].id.clone())
            .collect_vec();

        let placed_volume: f64 = placed.iter().map(|pb| pb.dims.volume()).sum();
        let utilization = match self.truck.volume() > 0.0 {
            true => placed_volume / self.truck.volume(),
            false => 0.0,
        };

        if let Some(max_weight) = self.truck.max_weight {
            if placed_weight > max_weight {
                warn!("[FFG] placed weight {placed_weight:.3} exceeds the maximum of {max_weight:.3}");
                notes.push(format!(
                    "placed weight {placed_weight} exceeds the maximum weight {max_weight} of truck {}",
                    self.truck.id
                ));
            }
        }
        if self.boxes.iter().any(|b| b.priority.is_some()) {
            notes.push("box priorities do not influence placement".to_string());
        }

        let solution = PackingSolution {
            placed,
            unplaced,
            utilization,
            placed_weight,
            layers,
            notes,
        };

        debug_assert!(assertions::placements_within_truck(
            self.truck,
            &solution.placed
        ));
        debug_assert!(assertions::placements_do_not_overlap(&solution.placed));
        debug_assert!(assertions::solution_accounts_for_all_boxes(
            self.boxes, &solution
        ));

        info!(
            "[FFG] packed {}/{} boxes in {} layers in {:.3}ms",
            solution.n_placed().separate_with_commas(),
            self.boxes.len().separate_with_commas(),
            solution.layers.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        info!(
            "[FFG] utilization of truck {}: {:.3}%",
            self.truck.id,
            solution.utilization * 100.0
        );

        solution
    }
}

/// Packs `boxes` into `truck` layer by layer.
/// Every box ends up either in [`PackingSolution::placed`] or in [`PackingSolution::unplaced`].
pub fn pack(truck: &Truck, boxes: &[CargoBox], config: &FFGConfig) -> PackingSolution {
    FFGOptimizer::new(truck, boxes, *config).solve()
}

/// Indices of `boxes` in the order in which they are offered to the packer.
/// The sort is stable, ties keep their input order.
pub fn box_order(boxes: &[CargoBox], sort_key: SortKey) -> Vec<usize> {
    let indices = 0..boxes.len();
    match sort_key {
        SortKey::FootprintDesc => indices
            .sorted_by_cached_key(|&i| Reverse(OrderedFloat(boxes[i].footprint())))
            .collect(),
        SortKey::VolumeDesc => indices
            .sorted_by_cached_key(|&i| Reverse(OrderedFloat(boxes[i].volume())))
            .collect(),
        SortKey::InputOrder => indices.collect(),
    }
}
