use serde::{Deserialize, Serialize};

/// External representation of a [`Truck`](crate::entities::Truck).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtTruck {
    /// Unique identifier of the truck
    pub id: String,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    /// Maximum total weight of the load, unlimited if not specified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_weight: Option<f64>,
}

/// External representation of a [`CargoBox`](crate::entities::CargoBox).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtBox {
    /// Unique identifier of the box
    pub id: String,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub weight: f64,
    /// Whether the box may be turned on the floor. Allowed if not specified
    #[serde(default = "default_rotatable")]
    pub rotatable: bool,
    /// Reserved for future use, has no effect on the placement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<f64>,
}

fn default_rotatable() -> bool {
    true
}

/// A truck and the boxes to be loaded into it
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPackingRequest {
    pub truck: ExtTruck,
    pub boxes: Vec<ExtBox>,
}

/// External representation of a [`PlacedBox`](crate::entities::PlacedBox).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacedBox {
    /// The id of the box in the request
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// 1 if width and depth of the box were swapped, 0 otherwise
    pub rotation: u8,
}

/// External representation of a [`PackingSolution`](crate::entities::PackingSolution).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPackingResponse {
    pub placed: Vec<ExtPlacedBox>,
    /// IDs of the boxes that could not be loaded
    pub unplaced: Vec<String>,
    /// Total volume of the placed boxes divided by the volume of the truck
    pub utilization: f64,
    /// Time it took to compute the solution in milliseconds
    pub runtime_ms: f64,
    pub notes: Vec<String>,
}
