#![warn(clippy::pedantic)]

use approx::assert_relative_eq;
use gussetx::{
    build_gusset, build_gussets, cross3, hull_contains, pin_hole_joints, point, Bridge,
    ConnectionCost, DraftingOutline, Gusset, GussetMesh, GussetOptions, JointId, LoadError,
};

const TRIANGLE_JSON: &str = r#"{
    "joints": [
        { "x": 0.0, "y": 0.0, "fixed": true },
        { "x": 1.0, "y": 1.0 },
        { "x": 2.0, "y": 0.0, "fixed": true }
    ],
    "members": [
        { "a": 0, "b": 1, "material_size_mm": 100.0 },
        { "a": 1, "b": 2, "material_size_mm": 200.0 },
        { "a": 2, "b": 0, "material_size_mm": 300.0 }
    ]
}"#;

fn triangle_bridge() -> Bridge {
    Bridge::from_json_str(TRIANGLE_JSON).expect("triangle description is valid")
}

fn assert_strictly_convex(gusset: &Gusset) {
    let hull = &gusset.hull;
    let n = hull.len();
    for i in 0..n {
        let turn = cross3(hull[i], hull[(i + 1) % n], hull[(i + 2) % n]);
        assert!(turn > 0.0, "joint {:?} turns {turn} at {i}", gusset.joint);
    }
}

#[test]
fn triangle_bridge_gussets_match_reference() {
    let bridge = triangle_bridge();
    let gussets = build_gussets(&bridge, &GussetOptions::default());
    assert_eq!(gussets.len(), 3);

    let depths: Vec<f64> = gussets.iter().map(|g| g.half_depth_m).collect();
    assert_relative_eq!(depths[0], 0.17, epsilon = 1.0e-12);
    assert_relative_eq!(depths[1], 0.12, epsilon = 1.0e-12);
    assert_relative_eq!(depths[2], 0.17, epsilon = 1.0e-12);

    for gusset in &gussets {
        assert!(gusset.hull.len() >= 4);
        assert_strictly_convex(gusset);
        assert!(hull_contains(&gusset.hull, point(0.0, 0.0), 1.0e-9));
    }

    let a = &gussets[0];
    assert_eq!(a.hull.len(), 5);
    assert!(a
        .hull
        .iter()
        .any(|p| (p.x - 0.17).abs() < 1.0e-3 && (p.y - 0.269).abs() < 1.0e-3));
}

#[test]
fn builds_are_repeatable_and_match_single_joint_builds() {
    let bridge = triangle_bridge();
    let options = GussetOptions::default();
    let first = build_gussets(&bridge, &options);
    let second = build_gussets(&bridge, &options);
    assert_eq!(first, second);

    for gusset in &first {
        let single = build_gusset(&bridge, gusset.joint, &options).expect("joint exists");
        assert_eq!(&single, gusset);
    }
}

#[cfg(feature = "rayon")]
#[test]
fn parallel_build_matches_sequential_build() {
    let bridge = triangle_bridge();
    let options = GussetOptions::default();
    assert_eq!(
        gussetx::build_gussets_par(&bridge, &options),
        build_gussets(&bridge, &options)
    );
}

#[test]
fn minimum_size_thickens_every_plate() {
    let bridge = triangle_bridge();
    let options = GussetOptions::new(500.0).expect("valid options");
    for gusset in build_gussets(&bridge, &options) {
        assert_relative_eq!(gusset.half_depth_m, 0.27, epsilon = 1.0e-12);
    }
}

#[test]
fn edits_are_reflected_in_the_next_build() {
    let mut bridge = triangle_bridge();
    let apex = JointId::new(1);
    let options = GussetOptions::default();
    let before = build_gusset(&bridge, apex, &options).expect("joint exists");

    bridge.move_joint(apex, point(1.0, 3.0)).expect("move is valid");
    let after = build_gusset(&bridge, apex, &options).expect("joint exists");
    assert_eq!(after.position, point(1.0, 3.0));
    assert_ne!(before.hull, after.hull);

    let lone = bridge.add_joint(point(5.0, 5.0));
    let gusset = build_gusset(&bridge, lone, &options).expect("joint exists");
    assert!(gusset.is_empty());
    assert_relative_eq!(gusset.half_depth_m, 0.0);
}

#[test]
fn consumers_agree_on_the_triangle() {
    let bridge = triangle_bridge();
    let gussets = build_gussets(&bridge, &GussetOptions::default());

    let mesh = GussetMesh::from_gusset(&gussets[0]);
    assert_eq!(mesh.vertex_count(), 32);
    assert_eq!(mesh.triangle_count(), 20);
    for normal in mesh.normals.chunks(3) {
        let length = normal.iter().map(|c| c * c).sum::<f32>().sqrt();
        assert_relative_eq!(length, 1.0, epsilon = 1.0e-6);
    }

    let outline = DraftingOutline::from_gusset(&gussets[2]);
    let (min, max) = outline.bounds().expect("outline has points");
    assert!(min.x < 2.0 && max.x > 2.0);
    assert!(min.y < 0.0 && max.y > 0.0);

    let pinned: Vec<usize> = pin_hole_joints(&gussets)
        .map(|gusset| gusset.joint.index())
        .collect();
    assert_eq!(pinned, vec![0, 2]);

    assert_relative_eq!(ConnectionCost::for_bridge(&bridge).cost(), 2400.0);
}

#[test]
fn gussets_serialize_with_plain_joint_indices() {
    let bridge = triangle_bridge();
    let gussets = build_gussets(&bridge, &GussetOptions::default());
    let json = serde_json::to_value(&gussets[1]).expect("gusset serializes");
    assert_eq!(json["joint"], 1);
    assert_eq!(json["hull"].as_array().map(Vec::len), Some(gussets[1].hull.len()));
}

#[test]
fn invalid_descriptions_are_rejected() {
    let dangling = r#"{ "joints": [{ "x": 0.0, "y": 0.0 }], "members": [{ "a": 0, "b": 3, "material_size_mm": 10.0 }] }"#;
    assert!(matches!(
        Bridge::from_json_str(dangling),
        Err(LoadError::UnknownJointReference { joint: 3, .. })
    ));

    let stacked = r#"{ "joints": [{ "x": 1.0, "y": 1.0 }, { "x": 1.0, "y": 1.0 }], "members": [{ "a": 0, "b": 1, "material_size_mm": 10.0 }] }"#;
    assert!(matches!(
        Bridge::from_json_str(stacked),
        Err(LoadError::Edit { member: 0, .. })
    ));
}
