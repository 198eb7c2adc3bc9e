use approx::assert_relative_eq;
use glam::{DVec2, DVec3};
use roof_mesh::{
    generate, generate_with, offset_polygon, Polygon2, PolygonOffset, RoofConfig, RoofError,
    RoofType,
};

fn unit_square() -> Polygon2 {
    Polygon2::new(vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0, 0.0),
        DVec2::new(1.0, 1.0),
        DVec2::new(0.0, 1.0),
    ])
    .unwrap()
}

fn skewed_quad() -> Polygon2 {
    Polygon2::new(vec![
        DVec2::new(-2.0, -1.0),
        DVec2::new(7.0, 0.5),
        DVec2::new(6.0, 5.0),
        DVec2::new(-1.5, 4.0),
    ])
    .unwrap()
}

#[test]
fn flat_unit_square_scenario() {
    let config = RoofConfig::new(RoofType::Flat);
    let roof = generate(&unit_square(), 3.0, &config).unwrap();

    assert_eq!(roof.name(), "Roof");
    assert_eq!(roof.face_count(), 1);

    let cap = &roof.faces()[0];
    assert!(cap.is_quad());
    assert!(cap.vertices().iter().all(|v| v.y == 3.0));
    for corner in unit_square().points() {
        assert!(
            cap.vertices().contains(&DVec3::new(corner.x, 3.0, corner.y)),
            "missing corner {corner:?}"
        );
    }
}

#[test]
fn gabled_with_thickness_and_overhang_scenario() {
    let config = RoofConfig::new(RoofType::Gabled)
        .with_thickness(0.2)
        .with_overhang(0.5);
    let roof = generate(&unit_square(), 3.0, &config).unwrap();

    // cap (4) + border (4) + overhang (4)
    assert_eq!(roof.face_count(), 12);

    let (min, max) = roof.bounding_box();
    assert_relative_eq!(max.y, 3.0 + 0.2 + 2.0, epsilon = 1e-12);
    assert_eq!(min.y, 3.0);
    assert!(roof.validate());
}

#[test]
fn zero_overhang_keeps_footprint() {
    for footprint in [unit_square(), skewed_quad()] {
        assert_eq!(offset_polygon(&footprint, 0.0).unwrap(), footprint);

        let roof = generate(&footprint, 0.0, &RoofConfig::new(RoofType::Flat)).unwrap();
        let cap = roof.faces()[0].vertices();
        let p = footprint.points();
        for (vertex, corner) in cap.iter().zip([p[0], p[3], p[2], p[1]]) {
            assert_eq!(*vertex, DVec3::new(corner.x, 0.0, corner.y));
        }
    }
}

#[test]
fn bounding_box_starts_at_base_height_without_thickness() {
    for roof_type in RoofType::ALL {
        for overhang in [0.0, 0.75] {
            let config = RoofConfig::new(roof_type).with_overhang(overhang);
            let roof = generate(&skewed_quad(), -4.5, &config).unwrap();
            assert_eq!(roof.bounding_box().0.y, -4.5, "{roof_type} overhang {overhang}");
        }
    }
}

#[test]
fn thickness_raises_cap_and_border_spans_it() {
    let base = 10.0;
    let thickness = 0.5;

    for roof_type in RoofType::ALL {
        let config = RoofConfig::new(roof_type).with_thickness(thickness);
        let roof = generate(&skewed_quad(), base, &config).unwrap();

        let cap_faces = if roof_type == RoofType::Flat { 1 } else { 4 };
        let cap_min = roof.faces()[..cap_faces]
            .iter()
            .flat_map(|f| f.vertices())
            .map(|v| v.y)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(cap_min, base + thickness, "{roof_type}");

        let border = &roof.faces()[cap_faces..];
        assert_eq!(border.len(), 4);
        for face in border {
            let ys: Vec<f64> = face.vertices().iter().map(|v| v.y).collect();
            assert_eq!(ys.iter().filter(|&&y| y == base).count(), 2);
            assert_eq!(ys.iter().filter(|&&y| y == base + thickness).count(), 2);
        }
    }
}

#[test]
fn ridge_endpoints_share_height() {
    for roof_type in [RoofType::Gabled, RoofType::Hipped] {
        let config = RoofConfig::new(roof_type).with_thickness(0.3).with_hip_inset(1.0);
        let roof = generate(&skewed_quad(), 1.0, &config).unwrap();

        let slope = roof.faces()[0].vertices();
        let (ridge1, ridge0) = (slope[1], slope[2]);
        assert_relative_eq!(ridge0.y, 1.0 + 0.3 + 2.0, epsilon = 1e-12);
        assert_eq!(ridge0.y, ridge1.y);
    }
}

#[test]
fn hipped_with_zero_inset_equals_gabled() {
    let footprint = skewed_quad();
    let gabled = generate(
        &footprint,
        2.0,
        &RoofConfig::new(RoofType::Gabled).with_overhang(0.25),
    )
    .unwrap();
    let hipped = generate(
        &footprint,
        2.0,
        &RoofConfig::new(RoofType::Hipped)
            .with_overhang(0.25)
            .with_hip_inset(0.0),
    )
    .unwrap();
    assert_eq!(gabled, hipped);
}

#[test]
fn configurable_ridge_heights() {
    let config = RoofConfig::new(RoofType::Hipped)
        .with_hipped_ridge_height(5.0)
        .with_hip_inset(1.0);
    let roof = generate(&skewed_quad(), 0.0, &config).unwrap();
    assert_relative_eq!(roof.bounding_box().1.y, 5.0, epsilon = 1e-12);
}

#[test]
fn flat_roof_accepts_larger_footprints() {
    let hexagon = Polygon2::new(vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(2.0, 0.0),
        DVec2::new(3.0, 1.5),
        DVec2::new(2.0, 3.0),
        DVec2::new(0.0, 3.0),
        DVec2::new(-1.0, 1.5),
    ])
    .unwrap();
    let config = RoofConfig::new(RoofType::Flat)
        .with_thickness(0.1)
        .with_overhang(0.2);
    let roof = generate(&hexagon, 0.0, &config).unwrap();
    assert_eq!(roof.face_count(), 1 + 6 + 6);
    assert_eq!(roof.faces()[0].vertex_count(), 6);
}

#[test]
fn flat_roof_rejects_concave_footprint() {
    let l_shape = Polygon2::new(vec![
        DVec2::new(2.0, 1.0),
        DVec2::new(1.0, 1.0),
        DVec2::new(1.0, 2.0),
        DVec2::new(0.0, 2.0),
        DVec2::new(0.0, 0.0),
        DVec2::new(2.0, 0.0),
    ])
    .unwrap();
    let err = generate(&l_shape, 0.0, &RoofConfig::new(RoofType::Flat)).unwrap_err();
    assert!(matches!(err, RoofError::InvalidFootprint { .. }), "{err}");
}

#[test]
fn negligible_overhang_and_thickness_add_no_skirts() {
    for roof_type in RoofType::ALL {
        let config = RoofConfig::new(roof_type)
            .with_overhang(1e-11)
            .with_thickness(1e-11)
            .with_hip_inset(0.25);
        let roof = generate(&unit_square(), 0.0, &config).unwrap();

        let cap_faces = if roof_type == RoofType::Flat { 1 } else { 4 };
        assert_eq!(roof.face_count(), cap_faces, "{roof_type}");
        assert!(roof.validate(), "{roof_type}");
    }
}

#[test]
fn rejects_negative_dimensions() {
    let footprint = unit_square();
    for config in [
        RoofConfig::new(RoofType::Flat).with_thickness(-0.1),
        RoofConfig::new(RoofType::Gabled).with_overhang(-1.0),
        RoofConfig::new(RoofType::Hipped).with_hip_inset(-2.0),
    ] {
        let err = generate(&footprint, 0.0, &config).unwrap_err();
        assert!(matches!(err, RoofError::InvalidConfig { .. }), "{err}");
    }
}

#[test]
fn rejects_non_finite_base_height() {
    let err = generate(&unit_square(), f64::NAN, &RoofConfig::default()).unwrap_err();
    assert!(matches!(err, RoofError::InvalidConfig { .. }));
}

#[test]
fn rejects_triangle_footprint() {
    let triangle = Polygon2::new(vec![DVec2::ZERO, DVec2::X, DVec2::Y]).unwrap();
    for roof_type in RoofType::ALL {
        let err = generate(&triangle, 0.0, &RoofConfig::new(roof_type)).unwrap_err();
        assert!(matches!(err, RoofError::InvalidFootprint { .. }));
    }
}

#[test]
fn ridged_roofs_need_quadrilaterals() {
    let pentagon = Polygon2::new(vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(4.0, 0.0),
        DVec2::new(5.0, 3.0),
        DVec2::new(2.0, 5.0),
        DVec2::new(-1.0, 3.0),
    ])
    .unwrap();
    let err = generate(&pentagon, 0.0, &RoofConfig::new(RoofType::Gabled)).unwrap_err();
    assert!(matches!(err, RoofError::InvalidFootprint { .. }));
}

#[test]
fn unknown_roof_type_name() {
    let err = "mansard".parse::<RoofType>().unwrap_err();
    assert_eq!(err.to_string(), "Unsupported roof type: mansard");
}

struct DropCorner;

impl PolygonOffset for DropCorner {
    fn offset(&self, polygon: &Polygon2, _distance: f64) -> Result<Polygon2, RoofError> {
        Polygon2::new(polygon.points()[1..].to_vec())
    }
}

#[test]
fn offset_must_keep_correspondence() {
    let err = generate_with(&DropCorner, &unit_square(), 0.0, &RoofConfig::default()).unwrap_err();
    assert!(matches!(err, RoofError::Offset { .. }));
}

#[test]
fn config_from_json() {
    let config: RoofConfig =
        serde_json::from_str(r#"{ "type": "hipped", "thickness": 0.3 }"#).unwrap();
    assert_eq!(config.roof_type, RoofType::Hipped);
    assert_eq!(config.thickness, 0.3);
    assert_eq!(config.overhang, 0.0);
    assert_eq!(config.hip_inset, 2.0);

    let unknown = serde_json::from_str::<RoofConfig>(r#"{ "type": "dome" }"#);
    assert!(unknown.is_err());
}

#[test]
fn export_buffers_cover_every_face() {
    let config = RoofConfig::new(RoofType::Gabled)
        .with_thickness(0.2)
        .with_overhang(0.5);
    let roof = generate(&unit_square(), 0.0, &config).unwrap();

    // 2 quads and 2 triangles in the cap, 8 band quads.
    assert_eq!(roof.triangle_count(), 2 * 2 + 2 + 8 * 2);
    assert_eq!(roof.indices_u32().len(), roof.triangle_count() * 3);
    assert_eq!(roof.vertices_f32().len(), roof.normals_f32().len());
    let vertex_count = roof.vertices_f32().len() as u32 / 3;
    assert!(roof.indices_u32().iter().all(|&i| i < vertex_count));
}
