use svg::Document;
use svg::node::element::{Group, Text, Title};

use crate::entities::{PackingSolution, Truck};
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use crate::util::FPA;

/// Draws a top-down view of a single layer of `solution`.
pub fn layer_to_svg(
    truck: &Truck,
    solution: &PackingSolution,
    layer_idx: usize,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let floor = truck.floor();
    let (fw, fd) = (floor.w as f32, floor.h as f32);
    let margin = 0.05 * f32::max(fw, fd);
    let theme = &options.theme;
    let stroke_width = f32::min(fw, fd) * 0.001 * theme.stroke_width_multiplier;

    let layer = solution.layers.get(layer_idx);

    let label = {
        let label_content = match layer {
            Some(l) => format!(
                "truck: {} | layer {} | z: {:.3} | height: {:.3} | boxes: {} | {}",
                truck.id, layer_idx, l.z, l.height, l.n_placed, title
            ),
            None => format!("truck: {} | empty | {}", truck.id, title),
        };
        let font_size = f32::min(fw, fd) * 0.025;
        Text::new(label_content)
            .set("x", 0.0_f32)
            .set("y", -0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let floor_group = Group::new()
        .set("id", format!("truck_{}", truck.id))
        .add(svg_util::data_to_path(
            svg_util::rect_data(&floor),
            &[
                ("fill", &*format!("{}", theme.floor_fill)),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!(
            "truck, id: {}, width: {:.3}, depth: {:.3}",
            truck.id, floor.w, floor.h
        )));

    let below_layer = layer_idx
        .checked_sub(1)
        .and_then(|below_idx| solution.layers.get(below_idx));
    let below_group = match (options.layer_below, below_layer) {
        (true, Some(below)) => {
            let dashed = [
                ("fill", "none"),
                ("stroke", "black"),
                ("stroke-opacity", "0.4"),
                ("stroke-width", &*format!("{}", stroke_width)),
                ("stroke-dasharray", &*format!("{}", 5.0 * stroke_width)),
            ];
            solution
                .placed_in_layer(below)
                .fold(Group::new().set("id", "layer_below"), |g, pb| {
                    g.add(svg_util::data_to_path(
                        svg_util::rect_data(&pb.footprint_rect()),
                        &dashed,
                    ))
                })
        }
        _ => Group::new().set("id", "layer_below"),
    };

    let mut boxes_group = Group::new().set("id", "boxes");
    let placed = solution
        .placed
        .iter()
        .filter(|pb| layer.is_some_and(|l| FPA(pb.z) == FPA(l.z)));
    for pb in placed {
        let rect = pb.footprint_rect();
        let fill = match pb.rotated {
            true => theme.rotated_box_fill,
            false => theme.box_fill,
        };
        let mut box_group = Group::new()
            .set("id", format!("box_{}", pb.box_id))
            .add(svg_util::data_to_path(
                svg_util::rect_data(&rect),
                &[
                    ("fill", &*format!("{fill}")),
                    ("fill-opacity", "0.8"),
                    ("stroke", "black"),
                    ("stroke-width", &*format!("{}", stroke_width)),
                ],
            ))
            .add(Title::new(format!(
                "box, id: {}, x: {:.3}, y: {:.3}, z: {:.3}, w: {:.3}, d: {:.3}, h: {:.3}, rotated: {}",
                pb.box_id, pb.x, pb.y, pb.z, pb.dims.width, pb.dims.depth, pb.dims.height, pb.rotated
            )));
        if options.box_labels {
            let font_size = f32::min(rect.w as f32, rect.h as f32) * 0.2;
            box_group = box_group.add(
                Text::new(pb.box_id.clone())
                    .set("x", (rect.x + rect.w / 2.0) as f32)
                    .set("y", (rect.y + rect.h / 2.0) as f32)
                    .set("font-size", font_size)
                    .set("font-family", "monospace")
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle"),
            );
        }
        boxes_group = boxes_group.add(box_group);
    }

    let vbox_svg = (-margin, -margin, fw + 2.0 * margin, fd + 2.0 * margin);

    Document::new()
        .set("viewBox", vbox_svg)
        .add(floor_group)
        .add(below_group)
        .add(boxes_group)
        .add(label)
}
