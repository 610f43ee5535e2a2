use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use svg::node::element::Path;
use svg::node::element::path::Data;

use crate::geometry::primitives::Rect;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Write the id of each box on top of it
    #[serde(default)]
    pub box_labels: bool,
    ///Draw the outline of the boxes placed in the layer directly below
    #[serde(default)]
    pub layer_below: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            box_labels: true,
            layer_below: false,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f32,
    pub floor_fill: Color,
    pub box_fill: Color,
    pub rotated_box_fill: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::EARTH_TONES
    }
}

impl SvgLayoutTheme {
    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        floor_fill: Color(0xCC, 0x82, 0x4A),
        box_fill: Color(0xFF, 0xC8, 0x79),
        rotated_box_fill: Color(0xFF, 0xA5, 0x00),
    };
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(u8, u8, u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl TryFrom<&str> for Color {
    type Error = anyhow::Error;

    fn try_from(s: &str) -> anyhow::Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        anyhow::ensure!(
            hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
            "invalid color: {s:?}, expected #RRGGBB"
        );
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}

pub fn rect_data(rect: &Rect) -> Data {
    let (x_min, y_min) = (rect.x as f32, rect.y as f32);
    let (x_max, y_max) = (rect.right() as f32, rect.bottom() as f32);
    Data::new()
        .move_to((x_min, y_min))
        .line_to((x_max, y_min))
        .line_to((x_max, y_max))
        .line_to((x_min, y_max))
        .close()
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}
