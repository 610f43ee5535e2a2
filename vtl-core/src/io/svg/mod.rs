mod layer_to_svg;

/// Drawing options, themes and small helpers to build SVG elements
pub mod svg_util;

#[doc(inline)]
pub use layer_to_svg::layer_to_svg;
