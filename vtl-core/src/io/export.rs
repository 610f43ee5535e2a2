use crate::entities::{PackingSolution, PlacedBox, Truck};
use crate::geometry::geo_enums::Origin;
use crate::io::ext_repr::{ExtPackingResponse, ExtPlacedBox};

/// Exports a placed box, converting its coordinates to the requested `origin` convention.
pub fn export_placed_box(pb: &PlacedBox, truck: &Truck, origin: Origin) -> ExtPlacedBox {
    let x = match origin {
        Origin::TopLeft => pb.x,
        //mirror around the center of the truck width
        Origin::TopRight => truck.dims.width - (pb.x + pb.dims.width),
    };
    ExtPlacedBox {
        id: pb.box_id.clone(),
        x,
        y: pb.y,
        z: pb.z,
        rotation: pb.rotation_code(),
    }
}

pub fn export_solution(
    solution: &PackingSolution,
    truck: &Truck,
    origin: Origin,
    runtime_ms: f64,
) -> ExtPackingResponse {
    ExtPackingResponse {
        placed: solution
            .placed
            .iter()
            .map(|pb| export_placed_box(pb, truck, origin))
            .collect(),
        unplaced: solution.unplaced.clone(),
        utilization: solution.utilization,
        runtime_ms,
        notes: solution.notes.clone(),
    }
}
