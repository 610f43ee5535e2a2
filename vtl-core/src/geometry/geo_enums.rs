use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq)]
/// Possible relations between two rectangles A and B.
/// A is `GeoRelation` to B. Touching edges do not count as an overlap.
pub enum GeoRelation {
    /// The interiors of A and B overlap and neither A ⊆ B nor B ⊆ A
    Intersecting,
    /// A ⊆ B
    Enclosed,
    /// B ⊆ A
    Surrounding,
    /// The interiors of A and B are disjoint
    Disjoint,
}

/// Axis around which a box can be rotated by 90 degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Swaps depth and height
    X,
    /// Swaps width and depth (in-plane rotation on the truck floor)
    Y,
    /// Swaps width and height
    Z,
}

impl TryFrom<char> for Axis {
    type Error = anyhow::Error;

    fn try_from(c: char) -> Result<Self> {
        match c.to_ascii_lowercase() {
            'x' => Ok(Axis::X),
            'y' => Ok(Axis::Y),
            'z' => Ok(Axis::Z),
            _ => bail!("invalid axis: {c:?}, expected one of x, y or z"),
        }
    }
}

impl FromStr for Axis {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Axis::try_from(c),
            _ => bail!("invalid axis: {s:?}, expected one of x, y or z"),
        }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let c = match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        };
        write!(f, "{c}")
    }
}

/// Corner of the floor that is used as the origin of exported coordinates.
/// Internally all coordinates are relative to the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// x measured rightwards from the left edge to the left side of a box
    #[default]
    TopLeft,
    /// x measured leftwards from the right edge to the right side of a box
    TopRight,
}

impl FromStr for Origin {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "top_left" => Ok(Origin::TopLeft),
            "top_right" => Ok(Origin::TopRight),
            _ => bail!("unknown origin: {s:?}, expected top_left or top_right"),
        }
    }
}
