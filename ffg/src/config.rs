use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use vtl_core::geometry::geo_enums::Origin;
use vtl_core::io::svg::svg_util::SvgDrawOptions;

/// Configuration for the First-Fit Guillotine packer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct FFGConfig {
    /// Order in which the boxes are offered to the packer
    pub sort_key: SortKey,
    /// Allow boxes to be turned by 90 degrees on the floor (width and depth swapped)
    pub allow_rotation: bool,
    /// Rule deciding the cut order when splitting a free rectangle
    pub split_rule: SplitRule,
    /// Merge adjacent free rectangles after every placement
    pub merge_free_rects: bool,
    /// Corner used as origin for the exported coordinates
    pub origin: Origin,
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for FFGConfig {
    fn default() -> Self {
        Self {
            sort_key: SortKey::FootprintDesc,
            allow_rotation: true,
            split_rule: SplitRule::LargerLeftover,
            merge_free_rects: true,
            origin: Origin::TopLeft,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

/// Initial ordering of the boxes, ties keep the input order.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Descending width × depth
    #[default]
    FootprintDesc,
    /// Descending width × height × depth
    VolumeDesc,
    /// Keep the order of the request
    #[serde(rename = "none")]
    InputOrder,
}

/// Decides between the two canonical guillotine cut orders, based on the leftover width and height.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SplitRule {
    /// Vertical cut first if the leftover width ≥ leftover height
    #[default]
    LargerLeftover,
    /// Vertical cut first if the leftover width ≤ leftover height
    SmallerLeftover,
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "footprint_desc" => Ok(SortKey::FootprintDesc),
            "volume_desc" => Ok(SortKey::VolumeDesc),
            "none" => Ok(SortKey::InputOrder),
            _ => bail!("unknown sort key: {s:?}, expected footprint_desc, volume_desc or none"),
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SortKey::FootprintDesc => "footprint_desc",
            SortKey::VolumeDesc => "volume_desc",
            SortKey::InputOrder => "none",
        };
        write!(f, "{s}")
    }
}

impl FromStr for SplitRule {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "larger_leftover" => Ok(SplitRule::LargerLeftover),
            "smaller_leftover" => Ok(SplitRule::SmallerLeftover),
            _ => bail!("unknown split rule: {s:?}, expected larger_leftover or smaller_leftover"),
        }
    }
}

impl Display for SplitRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SplitRule::LargerLeftover => "larger_leftover",
            SplitRule::SmallerLeftover => "smaller_leftover",
        };
        write!(f, "{s}")
    }
}
