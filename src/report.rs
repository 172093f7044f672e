use gussetx::{ConnectionCost, Gusset};
use std::fmt::Write;

/// Coordinate frame hull vertices are reported in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame {
    /// Relative to each gusset's joint.
    Joint,
    /// World coordinates.
    World,
}

/// Render a textual summary of the gussets of a bridge and their cost.
#[must_use]
pub fn render_summary(gussets: &[Gusset], cost: &ConnectionCost, frame: Frame) -> String {
    let mut output = String::new();

    let label = match frame {
        Frame::Joint => "joint-local",
        Frame::World => "world",
    };
    writeln!(&mut output, "Gussets ({} joints, {label} coordinates)", gussets.len())
        .expect("writing to string cannot fail");

    for gusset in gussets {
        writeln!(
            &mut output,
            "Joint {} at ({:.3}, {:.3}): half-depth = {:.3} m",
            gusset.joint.index(),
            gusset.position.x,
            gusset.position.y,
            gusset.half_depth_m
        )
        .expect("writing to string cannot fail");

        if gusset.is_empty() {
            output.push_str("  no members\n");
            continue;
        }
        let outline = match frame {
            Frame::Joint => gusset.hull.clone(),
            Frame::World => gusset.world_hull(),
        };
        for vertex in outline {
            writeln!(&mut output, "  ({:+.4}, {:+.4})", vertex.x, vertex.y)
                .expect("writing to string cannot fail");
        }
    }

    writeln!(
        &mut output,
        "Connections: {} x {:.2} x 2 trusses = {:.2}",
        cost.connection_count,
        cost.connection_fee,
        cost.cost()
    )
    .expect("writing to string cannot fail");

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use gussetx::{point, JointId};

    fn sample() -> (Vec<Gusset>, ConnectionCost) {
        let gussets = vec![
            Gusset {
                joint: JointId::new(0),
                position: point(1.0, 2.0),
                hull: vec![point(0.5, 0.0), point(0.0, 0.5), point(-0.5, 0.0)],
                half_depth_m: 0.17,
            },
            Gusset {
                joint: JointId::new(1),
                position: point(3.0, 0.0),
                hull: Vec::new(),
                half_depth_m: 0.0,
            },
        ];
        let cost = ConnectionCost {
            connection_count: 2,
            connection_fee: 400.0,
        };
        (gussets, cost)
    }

    #[test]
    fn formats_joint_local_report() {
        let (gussets, cost) = sample();
        let report = render_summary(&gussets, &cost, Frame::Joint);
        assert!(report.contains("joint-local coordinates"));
        assert!(report.contains("Joint 0 at (1.000, 2.000): half-depth = 0.170 m"));
        assert!(report.contains("  (+0.5000, +0.0000)"));
        assert!(report.contains("  no members"));
        assert!(report.contains("= 1600.00"));
    }

    #[test]
    fn world_frame_offsets_vertices() {
        let (gussets, cost) = sample();
        let report = render_summary(&gussets, &cost, Frame::World);
        assert!(report.contains("world coordinates"));
        assert!(report.contains("  (+1.5000, +2.0000)"));
        assert!(!report.contains("  (+0.5000, +0.0000)"));
    }
}
