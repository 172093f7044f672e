//! Triangle meshes of gusset plates for 3D rendering.
//!
//! A plate is its hull extruded by `half_depth_m` either side of the truss plane. The
//! outer band gets one quad per hull edge with its own flat normal, and each end cap is
//! a triangle fan around the joint.

use nalgebra::Vector3;

use crate::gusset::Gusset;

/// Indexed triangle mesh of one gusset, in coordinates relative to its joint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GussetMesh {
    /// Vertex positions, three components per vertex.
    pub positions: Vec<f32>,
    /// Unit vertex normals, three components per vertex.
    pub normals: Vec<f32>,
    /// Counter-clockwise triangles, three vertex indices each.
    pub indices: Vec<u32>,
}

impl GussetMesh {
    /// Extrude `gusset` into a closed plate.
    ///
    /// A hull of `n` points gives `6n + 2` vertices and `4n` triangles. Gussets of
    /// isolated joints give an empty mesh.
    ///
    /// # Examples
    /// ```
    /// use gussetx::{build_gusset, point, Bridge, GussetMesh, GussetOptions};
    ///
    /// let mut bridge = Bridge::new();
    /// let a = bridge.add_joint(point(0.0, 0.0));
    /// let b = bridge.add_joint(point(3.0, 0.0));
    /// bridge.add_member(a, b, 100.0)?;
    /// let gusset = build_gusset(&bridge, a, &GussetOptions::default()).expect("joint exists");
    ///
    /// let mesh = GussetMesh::from_gusset(&gusset);
    /// assert_eq!(mesh.vertex_count(), 26);
    /// assert_eq!(mesh.triangle_count(), 16);
    /// # Ok::<(), gussetx::BridgeEditError>(())
    /// ```
    #[must_use]
    pub fn from_gusset(gusset: &Gusset) -> Self {
        let hull = &gusset.hull;
        let n = hull.len();
        if n == 0 {
            return Self::default();
        }
        let depth = gusset.half_depth_m as f32;
        let vertex_count = 6 * n + 2;
        let mut mesh = Self {
            positions: Vec::with_capacity(3 * vertex_count),
            normals: Vec::with_capacity(3 * vertex_count),
            indices: Vec::with_capacity(3 * 4 * n),
        };

        // Outer band. Facets have their own normals, so corners are repeated.
        for (q, p) in (0..n).map(|p| ((p + n - 1) % n, p)) {
            let trailing = hull[q];
            let leading = hull[p];
            let outward = Vector3::new(leading.y - trailing.y, trailing.x - leading.x, 0.0)
                .try_normalize(0.0)
                .unwrap_or_else(Vector3::zeros);
            let normal = [outward.x as f32, outward.y as f32, 0.0];
            for (x, y, z) in [
                (trailing.x, trailing.y, -depth),
                (trailing.x, trailing.y, depth),
                (leading.x, leading.y, -depth),
                (leading.x, leading.y, depth),
            ] {
                mesh.push_vertex([x as f32, y as f32, z], normal);
            }
        }

        // End caps, centred on the joint.
        let positive_center = mesh.vertex_index();
        mesh.push_vertex([0.0, 0.0, depth], [0.0, 0.0, 1.0]);
        for point in hull {
            mesh.push_vertex([point.x as f32, point.y as f32, depth], [0.0, 0.0, 1.0]);
        }
        let negative_center = mesh.vertex_index();
        mesh.push_vertex([0.0, 0.0, -depth], [0.0, 0.0, -1.0]);
        for point in hull.iter().rev() {
            mesh.push_vertex([point.x as f32, point.y as f32, -depth], [0.0, 0.0, -1.0]);
        }

        for facet in 0..n {
            let k = (4 * facet) as u32;
            mesh.indices.extend_from_slice(&[k, k + 3, k + 1, k + 3, k, k + 2]);
        }
        for center in [positive_center, negative_center] {
            mesh.push_fan(center, n as u32);
        }
        mesh
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Index the next pushed vertex will get.
    fn vertex_index(&self) -> u32 {
        self.vertex_count() as u32
    }

    /// Append one vertex.
    fn push_vertex(&mut self, position: [f32; 3], normal: [f32; 3]) {
        self.positions.extend_from_slice(&position);
        self.normals.extend_from_slice(&normal);
    }

    /// Triangle fan around `center` over the `rim` vertices that follow it.
    fn push_fan(&mut self, center: u32, rim: u32) {
        let mut q = rim;
        for p in 1..=rim {
            self.indices.extend_from_slice(&[center, center + q, center + p]);
            q = p;
        }
    }
}

/// World translations placing a gusset on the back and front truss planes.
///
/// The two trusses of a bridge sit `truss_centerline_offset` either side of the roadway
/// centreline, so every joint carries a pair of plates.
#[must_use]
pub fn instance_offsets(gusset: &Gusset, truss_centerline_offset: f64) -> [Vector3<f64>; 2] {
    let Gusset { position, .. } = gusset;
    [
        Vector3::new(position.x, position.y, -truss_centerline_offset),
        Vector3::new(position.x, position.y, truss_centerline_offset),
    ]
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use petgraph::graph::NodeIndex;

    use super::*;
    use crate::geometry::point;

    fn square_gusset() -> Gusset {
        Gusset {
            joint: NodeIndex::new(0),
            position: point(2.0, 3.0),
            hull: vec![point(1.0, 1.0), point(-1.0, 1.0), point(-1.0, -1.0), point(1.0, -1.0)],
            half_depth_m: 0.5,
        }
    }

    fn vertex(buffer: &[f32], index: u32) -> [f32; 3] {
        let base = 3 * index as usize;
        [buffer[base], buffer[base + 1], buffer[base + 2]]
    }

    #[test]
    fn empty_hull_gives_empty_mesh() {
        let gusset = Gusset {
            hull: Vec::new(),
            half_depth_m: 0.0,
            ..square_gusset()
        };
        assert_eq!(GussetMesh::from_gusset(&gusset), GussetMesh::default());
    }

    #[test]
    fn counts_follow_hull_size() {
        let mesh = GussetMesh::from_gusset(&square_gusset());
        assert_eq!(mesh.vertex_count(), 26);
        assert_eq!(mesh.normals.len(), mesh.positions.len());
        assert_eq!(mesh.triangle_count(), 16);
        assert!(mesh.indices.iter().all(|&index| (index as usize) < mesh.vertex_count()));
    }

    #[test]
    fn band_normals_point_outward() {
        let mesh = GussetMesh::from_gusset(&square_gusset());
        // First facet runs from the last hull point (1, -1) to the first (1, 1).
        assert_eq!(vertex(&mesh.positions, 0), [1.0, -1.0, -0.5]);
        assert_eq!(vertex(&mesh.positions, 3), [1.0, 1.0, 0.5]);
        for corner in 0..4 {
            let normal = vertex(&mesh.normals, corner);
            assert_relative_eq!(normal[0], 1.0);
            assert_relative_eq!(normal[1], 0.0);
            assert_relative_eq!(normal[2], 0.0);
        }
        // Second facet runs from (1, 1) to (-1, 1) and faces +y.
        let normal = vertex(&mesh.normals, 4);
        assert_relative_eq!(normal[0], 0.0);
        assert_relative_eq!(normal[1], 1.0);
    }

    #[test]
    fn band_quads_are_split_consistently() {
        let mesh = GussetMesh::from_gusset(&square_gusset());
        assert_eq!(&mesh.indices[..12], &[0, 3, 1, 3, 0, 2, 4, 7, 5, 7, 4, 6]);
    }

    #[test]
    fn caps_fan_around_the_joint() {
        let mesh = GussetMesh::from_gusset(&square_gusset());
        let band = 2 * 4 * 3;
        assert_eq!(
            &mesh.indices[band..band + 12],
            &[16, 20, 17, 16, 17, 18, 16, 18, 19, 16, 19, 20]
        );
        assert_eq!(vertex(&mesh.positions, 16), [0.0, 0.0, 0.5]);
        assert_eq!(vertex(&mesh.normals, 16), [0.0, 0.0, 1.0]);
        assert_eq!(vertex(&mesh.positions, 21), [0.0, 0.0, -0.5]);
        // Negative cap walks the hull backwards.
        assert_eq!(vertex(&mesh.positions, 22), [1.0, -1.0, -0.5]);
        assert_eq!(vertex(&mesh.normals, 22), [0.0, 0.0, -1.0]);
    }

    #[test]
    fn cap_triangles_face_their_normals() {
        let mesh = GussetMesh::from_gusset(&square_gusset());
        for triangle in mesh.indices.chunks(3).skip(8) {
            let [a, b, c] = [triangle[0], triangle[1], triangle[2]].map(|index| {
                let [x, y, z] = vertex(&mesh.positions, index);
                Vector3::new(x, y, z)
            });
            let facing = (b - a).cross(&(c - a));
            let normal = vertex(&mesh.normals, triangle[0]);
            assert!(facing.z * normal[2] > 0.0);
        }
    }

    #[test]
    fn instances_sit_on_both_truss_planes() {
        let [back, front] = instance_offsets(&square_gusset(), 5.2);
        assert_eq!(back, Vector3::new(2.0, 3.0, -5.2));
        assert_eq!(front, Vector3::new(2.0, 3.0, 5.2));
    }
}
