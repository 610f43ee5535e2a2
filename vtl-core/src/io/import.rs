use anyhow::{Context, Result, ensure};
use itertools::Itertools;

use crate::entities::{CargoBox, Truck};
use crate::geometry::primitives::Dims3;
use crate::io::ext_repr::{ExtBox, ExtPackingRequest, ExtTruck};

pub fn import_truck(ext_truck: &ExtTruck) -> Result<Truck> {
    let dims = Dims3::try_new(ext_truck.width, ext_truck.height, ext_truck.depth)
        .with_context(|| format!("truck {}", ext_truck.id))?;
    if let Some(max_weight) = ext_truck.max_weight {
        ensure!(
            max_weight.is_finite() && max_weight > 0.0,
            "truck {}: max weight must be positive, got {max_weight}",
            ext_truck.id
        );
    }
    Ok(Truck::new(ext_truck.id.clone(), dims, ext_truck.max_weight))
}

pub fn import_box(ext_box: &ExtBox) -> Result<CargoBox> {
    let dims = Dims3::try_new(ext_box.width, ext_box.height, ext_box.depth)
        .with_context(|| format!("box {}", ext_box.id))?;
    ensure!(
        ext_box.weight.is_finite() && ext_box.weight >= 0.0,
        "box {}: weight must be non-negative, got {}",
        ext_box.id,
        ext_box.weight
    );
    Ok(CargoBox::new(ext_box.id.clone(), dims, ext_box.weight)
        .with_rotatable(ext_box.rotatable)
        .with_priority(ext_box.priority))
}

/// Converts and validates an external request. Box ids must be unique.
pub fn import_request(ext_request: &ExtPackingRequest) -> Result<(Truck, Vec<CargoBox>)> {
    let truck = import_truck(&ext_request.truck)?;

    let duplicates = ext_request
        .boxes
        .iter()
        .map(|b| b.id.as_str())
        .duplicates()
        .collect_vec();
    ensure!(duplicates.is_empty(), "duplicate box ids: {duplicates:?}");

    let boxes = ext_request
        .boxes
        .iter()
        .map(import_box)
        .collect::<Result<Vec<_>>>()?;

    Ok((truck, boxes))
}
