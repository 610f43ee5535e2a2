use crate::entities::PlacedBox;
use crate::util::FPA;

/// Summary of a single horizontal layer of a [`PackingSolution`].
#[derive(Clone, Debug, PartialEq)]
pub struct LayerRecord {
    /// Height of the floor of the layer
    pub z: f64,
    pub height: f64,
    pub n_placed: usize,
}

/// Result of packing a set of boxes into a truck.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PackingSolution {
    /// Placed boxes, in placement order
    pub placed: Vec<PlacedBox>,
    /// IDs of the boxes which could not be placed
    pub unplaced: Vec<String>,
    /// Total volume of the placed boxes divided by the volume of the truck
    pub utilization: f64,
    /// Sum of the weight of all placed boxes
    pub placed_weight: f64,
    pub layers: Vec<LayerRecord>,
    /// Informational messages about the packing run
    pub notes: Vec<String>,
}

impl PackingSolution {
    /// Returns the boxes placed on the floor of `layer`
    pub fn placed_in_layer<'a>(
        &'a self,
        layer: &'a LayerRecord,
    ) -> impl Iterator<Item = &'a PlacedBox> + 'a {
        self.placed
            .iter()
            .filter(move |pb| FPA(pb.z) == FPA(layer.z))
    }

    pub fn n_placed(&self) -> usize {
        self.placed.len()
    }
}
