use gussetx::{build_gussets, point, Bridge, ConnectionCost, GussetMesh, GussetOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut bridge = Bridge::new();
    let a = bridge.add_joint(point(0.0, 0.0));
    let b = bridge.add_joint(point(1.0, 1.0));
    let c = bridge.add_joint(point(2.0, 0.0));
    bridge.add_member(a, b, 100.0)?;
    bridge.add_member(b, c, 200.0)?;
    bridge.add_member(c, a, 300.0)?;

    for gusset in build_gussets(&bridge, &GussetOptions::default()) {
        let mesh = GussetMesh::from_gusset(&gusset);
        println!(
            "joint {}: half-depth = {:.3} m, {} hull points, {} triangles",
            gusset.joint.index(),
            gusset.half_depth_m,
            gusset.hull.len(),
            mesh.triangle_count()
        );
    }
    println!("cost = {:.2}", ConnectionCost::for_bridge(&bridge).cost());

    Ok(())
}
