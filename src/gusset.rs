//! Gusset plates covering the member material that meets at each joint.
//!
//! Each member adjacent to a joint is modelled as a corridor: the rectangle swept by
//! its cross-section along its axis, inflated by [`GUSSET_THICKNESS_M`]. The gusset is
//! the convex hull of the corridor ends around the joint, plus points where the outer
//! edges of neighbouring corridors cross. Those crossing points fill the wedge
//! between members meeting at an acute angle, which the corridor ends alone miss.

use serde::Serialize;
use tracing::{debug, info};

use crate::bridge::{Bridge, IncidentMember, JointId};
use crate::config::GussetOptions;
use crate::geometry::{intersect_segments, Point2};
use crate::hull::ConvexHullBuilder;

/// Extra half-width added to every member when sizing gussets, in metres.
///
/// The plate ends up a little larger than the members it joins, so its outline never
/// coincides with member edges.
pub const GUSSET_THICKNESS_M: f64 = 0.02;

/// Metres per millimetre of member size, halved to give a half-width.
const HALF_WIDTH_M_PER_MM: f64 = 0.0005;

/// Convex plate joining the members at one joint.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Gusset {
    /// Joint the plate belongs to.
    #[serde(serialize_with = "serialize_joint")]
    pub joint: JointId,
    /// World position of that joint in metres.
    pub position: Point2,
    /// Counter-clockwise outline relative to the joint. Empty when no members meet here.
    pub hull: Vec<Point2>,
    /// Half the plate thickness, set by the widest member at the joint.
    pub half_depth_m: f64,
}

impl Gusset {
    /// Outline translated into world coordinates.
    #[must_use]
    pub fn world_hull(&self) -> Vec<Point2> {
        self.hull.iter().map(|&offset| offset + self.position).collect()
    }

    /// Whether no members meet at the joint.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hull.is_empty()
    }
}

/// Serialize a joint identity as its plain index.
fn serialize_joint<S: serde::Serializer>(joint: &JointId, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(joint.index() as u64)
}

/// Corridor of one member relative to the gusset joint as origin.
///
/// ```text
///  ------^----------------------------------------------------
/// |      | up                                                 |
/// |  p0  o---u--> p1                             p2        O  |
/// |                                                           |
///  -----------------------------------------------------------
/// ```
#[derive(Clone, Copy, Debug)]
struct MemberGeometry {
    /// Axial point half a width behind the joint.
    p0: Point2,
    /// Axial point half a width ahead of the joint.
    p1: Point2,
    /// Axial point half a width short of the far joint.
    p2: Point2,
    /// Perpendicular offset to the corridor's left edge.
    up: Point2,
    /// Half-width of the corridor in metres.
    half_size_m: f64,
}

impl MemberGeometry {
    /// Corridor geometry of `incident` seen from the joint at `origin`.
    fn new(origin: Point2, incident: &IncidentMember, options: &GussetOptions) -> Self {
        let half_size_m = HALF_WIDTH_M_PER_MM
            * options.minimum_member_size_mm.max(incident.material_size_mm)
            + GUSSET_THICKNESS_M;
        let axis = incident.other_position - origin;
        let u = axis * (half_size_m / axis.length());
        Self {
            p0: -u,
            p1: u,
            p2: axis - u,
            up: u.perp(),
            half_size_m,
        }
    }

    /// The four corners of the corridor around the joint.
    fn corners(&self) -> [Point2; 4] {
        [
            self.p0 + self.up,
            self.p0 - self.up,
            self.p1 + self.up,
            self.p1 - self.up,
        ]
    }
}

/// Build the gusset for a single joint.
///
/// Returns `None` when `joint` is not part of `bridge`.
///
/// # Examples
/// ```
/// use gussetx::{build_gusset, point, Bridge, GussetOptions};
///
/// let mut bridge = Bridge::new();
/// let a = bridge.add_joint(point(0.0, 0.0));
/// let b = bridge.add_joint(point(4.0, 0.0));
/// bridge.add_member(a, b, 200.0)?;
///
/// let gusset = build_gusset(&bridge, a, &GussetOptions::default()).expect("joint exists");
/// assert_eq!(gusset.hull.len(), 4);
/// assert!((gusset.half_depth_m - 0.12).abs() < 1.0e-12);
/// # Ok::<(), gussetx::BridgeEditError>(())
/// ```
#[must_use]
pub fn build_gusset(bridge: &Bridge, joint: JointId, options: &GussetOptions) -> Option<Gusset> {
    let position = bridge.joint_position(joint)?;
    let mut builder = ConvexHullBuilder::new();
    Some(build_with(bridge, joint, position, options, &mut builder))
}

/// Build one gusset per joint of `bridge`, in joint index order.
///
/// # Examples
/// ```
/// use gussetx::{build_gussets, point, Bridge, GussetOptions};
///
/// let mut bridge = Bridge::new();
/// let a = bridge.add_joint(point(0.0, 0.0));
/// let b = bridge.add_joint(point(1.0, 1.0));
/// let c = bridge.add_joint(point(2.0, 0.0));
/// bridge.add_member(a, b, 100.0)?;
/// bridge.add_member(b, c, 200.0)?;
/// bridge.add_member(c, a, 300.0)?;
///
/// let gussets = build_gussets(&bridge, &GussetOptions::default());
/// assert_eq!(gussets.len(), 3);
/// assert!((gussets[0].half_depth_m - 0.17).abs() < 1.0e-12);
/// # Ok::<(), gussetx::BridgeEditError>(())
/// ```
#[must_use]
pub fn build_gussets(bridge: &Bridge, options: &GussetOptions) -> Vec<Gusset> {
    let mut builder = ConvexHullBuilder::new();
    let gussets: Vec<Gusset> = bridge
        .joints()
        .filter_map(|joint| {
            let position = bridge.joint_position(joint)?;
            Some(build_with(bridge, joint, position, options, &mut builder))
        })
        .collect();
    info!(
        gussets = gussets.len(),
        minimum_member_size_mm = options.minimum_member_size_mm,
        "Built gussets"
    );
    gussets
}

/// Parallel counterpart of [`build_gussets`]; joints are processed independently.
#[cfg(feature = "rayon")]
#[must_use]
pub fn build_gussets_par(bridge: &Bridge, options: &GussetOptions) -> Vec<Gusset> {
    use rayon::prelude::*;

    let joints: Vec<(JointId, Point2)> = bridge
        .joints()
        .filter_map(|joint| Some((joint, bridge.joint_position(joint)?)))
        .collect();
    let gussets: Vec<Gusset> = joints
        .par_iter()
        .map_init(ConvexHullBuilder::new, |builder, &(joint, position)| {
            build_with(bridge, joint, position, options, builder)
        })
        .collect();
    info!(
        gussets = gussets.len(),
        minimum_member_size_mm = options.minimum_member_size_mm,
        "Built gussets in parallel"
    );
    gussets
}

/// Gusset for `joint` at `position`, reusing `builder` for the hull.
fn build_with(
    bridge: &Bridge,
    joint: JointId,
    position: Point2,
    options: &GussetOptions,
    builder: &mut ConvexHullBuilder,
) -> Gusset {
    let geometries: Vec<MemberGeometry> = bridge
        .incident_members(joint)
        .iter()
        .map(|incident| MemberGeometry::new(position, incident, options))
        .collect();

    builder.clear();
    let mut half_depth_m: f64 = 0.0;
    for (idx, geometry) in geometries.iter().enumerate() {
        half_depth_m = half_depth_m.max(geometry.half_size_m);
        builder.extend(geometry.corners());
        for (alt_idx, alt) in geometries.iter().enumerate() {
            if alt_idx == idx {
                continue;
            }
            // Left edge of this corridor against the right edge of the other.
            let crossing = intersect_segments(
                geometry.p0 + geometry.up,
                geometry.p2 + geometry.up,
                alt.p0 - alt.up,
                alt.p2 - alt.up,
            );
            if let Some(crossing) = crossing {
                builder.add_point(crossing);
                builder.add_point(crossing - geometry.up * 2.0);
                builder.add_point(crossing + alt.up * 2.0);
            }
        }
    }
    let hull = builder.build();

    debug!(
        joint = joint.index(),
        members = geometries.len(),
        hull_points = hull.len(),
        half_depth_m,
        "Built gusset"
    );
    Gusset {
        joint,
        position,
        hull,
        half_depth_m,
    }
}
