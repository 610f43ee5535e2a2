#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use test_case::test_case;
    use vtl_core::entities::{CargoBox, PackingSolution, PlacedBox, Truck};
    use vtl_core::geometry::geo_enums::{Axis, GeoRelation, Origin};
    use vtl_core::geometry::primitives::{Dims3, Rect};
    use vtl_core::io::export::{export_placed_box, export_solution};
    use vtl_core::io::ext_repr::ExtPackingRequest;
    use vtl_core::io::import::import_request;
    use vtl_core::io::svg::layer_to_svg;
    use vtl_core::io::svg::svg_util::{Color, SvgDrawOptions};
    use vtl_core::util::{FPA, assertions, utilization};

    const REQUEST: &str = r#"{
        "truck": {"id": "t1", "width": 10, "height": 8, "depth": 20, "max_weight": 100},
        "boxes": [
            {"id": "a", "width": 2, "height": 3, "depth": 4, "weight": 1.5},
            {"id": "b", "width": 5, "height": 5, "depth": 5, "weight": 0, "rotatable": false, "priority": 2}
        ]
    }"#;

    fn request() -> ExtPackingRequest {
        serde_json::from_str(REQUEST).unwrap()
    }

    fn placed(id: &str, x: f64, y: f64, z: f64, dims: Dims3) -> PlacedBox {
        PlacedBox {
            box_id: id.to_string(),
            x,
            y,
            z,
            rotated: false,
            dims,
        }
    }

    #[test_case(Axis::X; "x")]
    #[test_case(Axis::Y; "y")]
    #[test_case(Axis::Z; "z")]
    fn rotation_restores_dims(axis: Axis) {
        let original = CargoBox::new("r", Dims3::new(1.0, 2.0, 3.0), 1.0);
        let once = original.rotated(axis);
        assert_ne!(once.dims, original.dims);
        assert_eq!(once.volume(), original.volume());

        let mut b = original.clone();
        for _ in 0..4 {
            b.rotate(axis);
        }
        assert_eq!(b, original);
        assert_eq!(once.rotated(axis), original);
    }

    #[test]
    fn rotation_swaps_expected_dims() {
        let dims = Dims3::new(1.0, 2.0, 3.0);
        assert_eq!(dims.rotated(Axis::X), Dims3::new(1.0, 3.0, 2.0));
        assert_eq!(dims.rotated(Axis::Y), Dims3::new(3.0, 2.0, 1.0));
        assert_eq!(dims.rotated(Axis::Z), Dims3::new(2.0, 1.0, 3.0));
    }

    #[test_case("x", Some(Axis::X))]
    #[test_case("Y", Some(Axis::Y))]
    #[test_case(" z ", Some(Axis::Z))]
    #[test_case("w", None)]
    #[test_case("xy", None)]
    #[test_case("", None)]
    fn axis_parsing(s: &str, expected: Option<Axis>) {
        assert_eq!(Axis::from_str(s).ok(), expected);
    }

    #[test]
    fn axis_from_char() {
        assert_eq!(Axis::try_from('z').unwrap(), Axis::Z);
        assert!(Axis::try_from('q').is_err());
        assert_eq!(Axis::Y.to_string(), "y");
    }

    #[test]
    fn origin_parsing() {
        assert_eq!(Origin::from_str("top_right").unwrap(), Origin::TopRight);
        assert!(Origin::from_str("bottom_left").is_err());
    }

    #[test]
    fn import_valid_request() {
        let (truck, boxes) = import_request(&request()).unwrap();
        assert_eq!(truck.dims, Dims3::new(10.0, 8.0, 20.0));
        assert_eq!(truck.max_weight, Some(100.0));
        assert_eq!(boxes.len(), 2);
        assert!(boxes[0].rotatable);
        assert!(!boxes[1].rotatable);
        assert_eq!(boxes[1].priority, Some(2.0));
    }

    #[test]
    fn import_rejects_duplicate_ids() {
        let mut req = request();
        req.boxes[1].id = "a".to_string();
        let err = import_request(&req).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test_case(0.0, 1.0, 1.0; "zero width")]
    #[test_case(1.0, -2.0, 1.0; "negative height")]
    #[test_case(1.0, 1.0, f64::NAN; "nan depth")]
    fn import_rejects_invalid_box_dims(w: f64, h: f64, d: f64) {
        let mut req = request();
        req.boxes[0].width = w;
        req.boxes[0].height = h;
        req.boxes[0].depth = d;
        assert!(import_request(&req).is_err());
    }

    #[test]
    fn import_rejects_invalid_truck_and_weight() {
        let mut req = request();
        req.truck.depth = 0.0;
        assert!(import_request(&req).is_err());

        let mut req = request();
        req.truck.max_weight = Some(0.0);
        assert!(import_request(&req).is_err());

        let mut req = request();
        req.boxes[0].weight = -1.0;
        assert!(import_request(&req).is_err());
    }

    #[test]
    fn utilization_of_placements() {
        let (truck, boxes) = import_request(&request()).unwrap();
        let pbs = [placed("b", 0.0, 0.0, 0.0, boxes[1].dims)];
        let u = utilization(&truck, &boxes, &pbs).unwrap();
        assert_eq!(FPA(u), FPA(125.0 / 1600.0));
        assert_eq!(utilization(&truck, &boxes, &[]).unwrap(), 0.0);
    }

    #[test]
    fn utilization_rejects_unknown_id() {
        let (truck, boxes) = import_request(&request()).unwrap();
        let pbs = [placed("ghost", 0.0, 0.0, 0.0, Dims3::new(1.0, 1.0, 1.0))];
        assert!(utilization(&truck, &boxes, &pbs).is_err());
    }

    #[test]
    fn top_right_export_mirrors_x() {
        let truck = Truck::new("t", Dims3::new(10.0, 5.0, 10.0), None);
        let mut pb = placed("a", 1.0, 2.0, 3.0, Dims3::new(4.0, 1.0, 1.0));
        pb.rotated = true;

        let tl = export_placed_box(&pb, &truck, Origin::TopLeft);
        assert_eq!((tl.x, tl.y, tl.z), (1.0, 2.0, 3.0));
        assert_eq!(tl.rotation, 1);

        let tr = export_placed_box(&pb, &truck, Origin::TopRight);
        assert_eq!((tr.x, tr.y, tr.z), (5.0, 2.0, 3.0));
    }

    #[test]
    fn response_serialization() {
        let truck = Truck::new("t", Dims3::new(10.0, 5.0, 10.0), None);
        let solution = PackingSolution {
            placed: vec![placed("a", 0.0, 0.0, 0.0, Dims3::new(5.0, 5.0, 10.0))],
            unplaced: vec!["b".to_string()],
            utilization: 0.5,
            ..PackingSolution::default()
        };
        let response = export_solution(&solution, &truck, Origin::TopLeft, 1.25);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["placed"][0]["id"], "a");
        assert_eq!(json["placed"][0]["rotation"], 0);
        assert_eq!(json["unplaced"][0], "b");
        assert_eq!(json["runtime_ms"], 1.25);
    }

    #[test_case(Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(2.0, 2.0, 3.0, 3.0), GeoRelation::Surrounding; "surrounding")]
    #[test_case(Rect::new(2.0, 2.0, 3.0, 3.0), Rect::new(0.0, 0.0, 10.0, 10.0), GeoRelation::Enclosed; "enclosed")]
    #[test_case(Rect::new(0.0, 0.0, 4.0, 4.0), Rect::new(2.0, 2.0, 4.0, 4.0), GeoRelation::Intersecting; "intersecting")]
    #[test_case(Rect::new(0.0, 0.0, 4.0, 4.0), Rect::new(4.0, 0.0, 4.0, 4.0), GeoRelation::Disjoint; "touching")]
    fn rect_relations(a: Rect, b: Rect, expected: GeoRelation) {
        assert_eq!(a.relation_to(&b), expected);
    }

    #[test]
    fn rect_tolerance() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let b = Rect::new(1e-12, 0.0, 1.0 - 1e-12, 1.0);
        assert!(a.contains(&b) && b.contains(&a));
        assert!(Rect::new(0.0, 0.0, 5.0, 1e-12).is_degenerate());
    }

    #[test]
    fn assertions_detect_overlap() {
        let truck = Truck::new("t", Dims3::new(10.0, 10.0, 10.0), None);
        let dims = Dims3::new(5.0, 5.0, 5.0);
        let stacked = [placed("a", 0.0, 0.0, 0.0, dims), placed("b", 0.0, 0.0, 5.0, dims)];
        assert!(assertions::placements_do_not_overlap(&stacked));
        assert!(assertions::placements_within_truck(&truck, &stacked));

        let clashing = [placed("a", 0.0, 0.0, 0.0, dims), placed("b", 4.0, 4.0, 4.0, dims)];
        assert!(!assertions::placements_do_not_overlap(&clashing));

        let outside = [placed("a", 6.0, 0.0, 0.0, dims)];
        assert!(!assertions::placements_within_truck(&truck, &outside));
    }

    #[test]
    fn colors() {
        let c = Color::try_from("#1A2b3C").unwrap();
        assert_eq!(c.to_string(), "#1A2B3C");
        assert!(Color::try_from("#12345").is_err());
        assert!(Color::try_from("zzzzzz").is_err());
        assert!(Color::try_from("#+1+1+1").is_err());
    }

    #[test]
    fn layer_svg_contains_every_box() {
        let truck = Truck::new("t", Dims3::new(10.0, 10.0, 10.0), None);
        let dims = Dims3::new(5.0, 5.0, 5.0);
        let solution = PackingSolution {
            placed: vec![
                placed("a", 0.0, 0.0, 0.0, dims),
                placed("b", 5.0, 0.0, 0.0, dims),
                placed("c", 0.0, 0.0, 5.0, dims),
            ],
            layers: vec![
                vtl_core::entities::LayerRecord {
                    z: 0.0,
                    height: 5.0,
                    n_placed: 2,
                },
                vtl_core::entities::LayerRecord {
                    z: 5.0,
                    height: 5.0,
                    n_placed: 1,
                },
            ],
            ..PackingSolution::default()
        };
        let svg = layer_to_svg(&truck, &solution, 0, SvgDrawOptions::default(), "layer 0").to_string();
        assert!(svg.contains("box_a"));
        assert!(svg.contains("box_b"));
        assert!(!svg.contains("box_c"));

        let options = SvgDrawOptions {
            layer_below: true,
            ..SvgDrawOptions::default()
        };
        let svg = layer_to_svg(&truck, &solution, 1, options, "layer 1").to_string();
        assert!(svg.contains("box_c"));
        assert!(svg.contains("stroke-dasharray"));

        //layers that do not exist are drawn as an empty floor
        let svg = layer_to_svg(&truck, &solution, 5, options, "missing").to_string();
        assert!(svg.contains("empty"));
        assert!(!svg.contains("box_"));
    }
}
