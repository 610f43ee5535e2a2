use std::collections::HashMap;

use anyhow::{Result, bail, ensure};

use crate::entities::{CargoBox, PlacedBox, Truck};

/// Computes the fraction of the truck volume occupied by the `placed` boxes.
/// Every placed box is looked up in `boxes` by id, an unknown id is an error.
pub fn utilization(truck: &Truck, boxes: &[CargoBox], placed: &[PlacedBox]) -> Result<f64> {
    ensure!(
        truck.volume() > 0.0,
        "truck {} has no interior volume",
        truck.id
    );
    let volumes: HashMap<&str, f64> = boxes
        .iter()
        .map(|b| (b.id.as_str(), b.volume()))
        .collect();

    let mut total_volume = 0.0;
    for pb in placed {
        match volumes.get(pb.box_id.as_str()) {
            Some(v) => total_volume += v,
            None => bail!(
                "placed box {} could not be located in the load list",
                pb.box_id
            ),
        }
    }
    Ok(total_volume / truck.volume())
}
