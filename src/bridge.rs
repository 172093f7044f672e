//! Joints and members of a truss bridge, the input to gusset construction.

use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::stable_graph::StableUnGraph;
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{BridgeEditError, LoadError, MemberGeometryError};
use crate::geometry::Point2;

/// Stable identity of a joint within its [`Bridge`].
pub type JointId = NodeIndex;

/// Stable identity of a member within its [`Bridge`].
pub type MemberId = EdgeIndex;

/// Internal representation of a bridge joint.
#[derive(Clone, Debug)]
struct Joint {
    /// Position of the joint in world metres.
    position: Point2,
    /// Whether the joint is anchored to the site.
    fixed: bool,
}

/// Internal representation of a bridge member.
#[derive(Clone, Debug)]
struct Member {
    /// Characteristic cross-section size in millimetres.
    material_size_mm: f64,
}

/// One member seen from one of its joints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IncidentMember {
    /// The member.
    pub member: MemberId,
    /// The joint at the far end of the member.
    pub other_joint: JointId,
    /// World position of the far joint.
    pub other_position: Point2,
    /// Cross-section size of the member in millimetres.
    pub material_size_mm: f64,
}

/// Container for the joints and members of a truss bridge.
///
/// Joint and member identities stay valid when other joints or members are removed.
/// Every edit is validated, so members always have positive length and size.
#[derive(Debug, Default)]
pub struct Bridge {
    /// Underlying graph storage for joints and members.
    graph: StableUnGraph<Joint, Member>,
}

impl Bridge {
    /// Create an empty bridge.
    ///
    /// # Examples
    /// ```
    /// use gussetx::Bridge;
    ///
    /// let bridge = Bridge::new();
    /// assert_eq!(bridge.joint_count(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: StableUnGraph::default(),
        }
    }

    /// Return the number of joints in the bridge.
    #[must_use]
    pub fn joint_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Return the number of members in the bridge.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterate over joint identities in index order.
    pub fn joints(&self) -> impl Iterator<Item = JointId> + '_ {
        self.graph.node_indices()
    }

    /// Iterate over member identities in index order.
    pub fn members(&self) -> impl Iterator<Item = MemberId> + '_ {
        self.graph.edge_indices()
    }

    /// Add a new joint to the bridge.
    ///
    /// # Examples
    /// ```
    /// use gussetx::{point, Bridge};
    ///
    /// let mut bridge = Bridge::new();
    /// let joint = bridge.add_joint(point(0.0, 0.0));
    /// assert_eq!(bridge.joint_count(), 1);
    /// assert_eq!(joint.index(), 0);
    /// ```
    pub fn add_joint(&mut self, position: Point2) -> JointId {
        self.graph.add_node(Joint {
            position,
            fixed: false,
        })
    }

    /// Mark a joint as anchored to the site or free.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeEditError::UnknownJoint`] when `joint` is not part of this bridge.
    pub fn set_joint_fixed(&mut self, joint: JointId, fixed: bool) -> Result<(), BridgeEditError> {
        let node = self
            .graph
            .node_weight_mut(joint)
            .ok_or(BridgeEditError::UnknownJoint(joint))?;
        node.fixed = fixed;
        Ok(())
    }

    /// Update the position of an existing joint.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeEditError::UnknownJoint`] when `joint` is not part of this bridge and
    /// [`BridgeEditError::InvalidMemberGeometry`] when the move would collapse one of its
    /// members to zero length.
    pub fn move_joint(&mut self, joint: JointId, position: Point2) -> Result<(), BridgeEditError> {
        if self.graph.node_weight(joint).is_none() {
            return Err(BridgeEditError::UnknownJoint(joint));
        }
        for incident in self.incident_members(joint) {
            if incident.other_position == position {
                return Err(MemberGeometryError::ZeroLength {
                    a: joint,
                    b: incident.other_joint,
                }
                .into());
            }
        }
        if let Some(node) = self.graph.node_weight_mut(joint) {
            node.position = position;
        }
        Ok(())
    }

    /// Remove a joint and all connected members from the bridge.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeEditError::UnknownJoint`] when `joint` is not part of this bridge.
    pub fn remove_joint(&mut self, joint: JointId) -> Result<(), BridgeEditError> {
        self.graph
            .remove_node(joint)
            .map(|_| ())
            .ok_or(BridgeEditError::UnknownJoint(joint))
    }

    /// Connect two joints with a new member of the given material size.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeEditError::UnknownJoint`] when either joint is missing and
    /// [`BridgeEditError::InvalidMemberGeometry`] when the member would be a self loop,
    /// have zero length or have a non-positive size.
    ///
    /// # Examples
    /// ```
    /// use gussetx::{point, Bridge, BridgeEditError, MemberGeometryError};
    ///
    /// let mut bridge = Bridge::new();
    /// let a = bridge.add_joint(point(0.0, 0.0));
    /// let b = bridge.add_joint(point(0.0, 0.0));
    ///
    /// let error = bridge.add_member(a, b, 120.0).expect_err("zero length rejected");
    /// assert_eq!(
    ///     error,
    ///     BridgeEditError::InvalidMemberGeometry(MemberGeometryError::ZeroLength { a, b })
    /// );
    /// ```
    pub fn add_member(
        &mut self,
        a: JointId,
        b: JointId,
        material_size_mm: f64,
    ) -> Result<MemberId, BridgeEditError> {
        let start = self.position_of(a)?;
        let end = self.position_of(b)?;
        if a == b {
            return Err(MemberGeometryError::SelfLoop { joint: a }.into());
        }
        if start == end {
            return Err(MemberGeometryError::ZeroLength { a, b }.into());
        }
        check_size(material_size_mm)?;
        Ok(self.graph.add_edge(a, b, Member { material_size_mm }))
    }

    /// Remove a member from the bridge.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeEditError::UnknownMember`] when `member` is not part of this bridge.
    pub fn remove_member(&mut self, member: MemberId) -> Result<(), BridgeEditError> {
        self.graph
            .remove_edge(member)
            .map(|_| ())
            .ok_or(BridgeEditError::UnknownMember(member))
    }

    /// Change the material size of a member.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeEditError::UnknownMember`] when `member` is not part of this bridge
    /// and [`BridgeEditError::InvalidMemberGeometry`] when the size is not positive.
    pub fn set_member_size(
        &mut self,
        member: MemberId,
        material_size_mm: f64,
    ) -> Result<(), BridgeEditError> {
        let edge = self
            .graph
            .edge_weight_mut(member)
            .ok_or(BridgeEditError::UnknownMember(member))?;
        check_size(material_size_mm)?;
        edge.material_size_mm = material_size_mm;
        Ok(())
    }

    /// Retrieve the position of a joint.
    #[must_use]
    pub fn joint_position(&self, joint: JointId) -> Option<Point2> {
        self.graph.node_weight(joint).map(|joint| joint.position)
    }

    /// Whether a joint is anchored to the site.
    #[must_use]
    pub fn joint_is_fixed(&self, joint: JointId) -> Option<bool> {
        self.graph.node_weight(joint).map(|joint| joint.fixed)
    }

    /// Retrieve the joints at either end of a member.
    #[must_use]
    pub fn member_endpoints(&self, member: MemberId) -> Option<(JointId, JointId)> {
        self.graph.edge_endpoints(member)
    }

    /// Retrieve the material size of a member in millimetres.
    #[must_use]
    pub fn member_size_mm(&self, member: MemberId) -> Option<f64> {
        self.graph
            .edge_weight(member)
            .map(|member| member.material_size_mm)
    }

    /// Retrieve the length of a member in metres.
    #[must_use]
    pub fn member_length(&self, member: MemberId) -> Option<f64> {
        let (a, b) = self.graph.edge_endpoints(member)?;
        Some(self.graph[a].position.distance(self.graph[b].position))
    }

    /// Members meeting at `joint`, ordered by member index.
    ///
    /// Unknown joints have no incident members.
    #[must_use]
    pub fn incident_members(&self, joint: JointId) -> Vec<IncidentMember> {
        if self.graph.node_weight(joint).is_none() {
            return Vec::new();
        }
        let mut incident: Vec<IncidentMember> = self
            .graph
            .edges(joint)
            .map(|edge| {
                let other_joint = if edge.source() == joint {
                    edge.target()
                } else {
                    edge.source()
                };
                IncidentMember {
                    member: edge.id(),
                    other_joint,
                    other_position: self.graph[other_joint].position,
                    material_size_mm: edge.weight().material_size_mm,
                }
            })
            .collect();
        incident.sort_by_key(|incident| incident.member.index());
        incident
    }

    /// Build a validated bridge from a plain description.
    ///
    /// Joints are created in list order, so the `n`th described joint gets index `n`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::UnknownJointReference`] when a member names a missing joint
    /// and [`LoadError::Edit`] when a member is geometrically invalid.
    pub fn from_description(description: &BridgeDescription) -> Result<Self, LoadError> {
        let mut bridge = Self::new();
        let joints: Vec<JointId> = description
            .joints
            .iter()
            .map(|joint| {
                let id = bridge.add_joint(Point2::new(joint.x, joint.y));
                bridge.graph[id].fixed = joint.fixed;
                id
            })
            .collect();
        for (position, member) in description.members.iter().enumerate() {
            let lookup = |joint: usize| {
                joints
                    .get(joint)
                    .copied()
                    .ok_or(LoadError::UnknownJointReference {
                        member: position,
                        joint,
                        joint_count: joints.len(),
                    })
            };
            let a = lookup(member.a)?;
            let b = lookup(member.b)?;
            bridge
                .add_member(a, b, member.material_size_mm)
                .map_err(|source| LoadError::Edit {
                    member: position,
                    source,
                })?;
        }
        debug!(
            joints = bridge.joint_count(),
            members = bridge.member_count(),
            "Loaded bridge description"
        );
        Ok(bridge)
    }

    /// Parse a [`BridgeDescription`] from JSON and build the bridge.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Json`] for malformed input, otherwise as
    /// [`Bridge::from_description`].
    ///
    /// # Examples
    /// ```
    /// use gussetx::Bridge;
    ///
    /// let bridge = Bridge::from_json_str(
    ///     r#"{
    ///         "joints": [{ "x": 0.0, "y": 0.0, "fixed": true }, { "x": 4.0, "y": 0.0 }],
    ///         "members": [{ "a": 0, "b": 1, "material_size_mm": 120.0 }]
    ///     }"#,
    /// )?;
    /// assert_eq!(bridge.member_count(), 1);
    /// # Ok::<(), gussetx::LoadError>(())
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let description: BridgeDescription = serde_json::from_str(json)?;
        Self::from_description(&description)
    }

    /// Look up a joint position or report the joint as unknown.
    fn position_of(&self, joint: JointId) -> Result<Point2, BridgeEditError> {
        self.joint_position(joint)
            .ok_or(BridgeEditError::UnknownJoint(joint))
    }
}

/// Reject member sizes that are not strictly positive numbers.
fn check_size(material_size_mm: f64) -> Result<(), MemberGeometryError> {
    if material_size_mm > 0.0 && material_size_mm.is_finite() {
        Ok(())
    } else {
        Err(MemberGeometryError::NonPositiveSize {
            size_mm: material_size_mm,
        })
    }
}

/// Plain, serializable description of a bridge.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BridgeDescription {
    /// Joints in index order.
    pub joints: Vec<JointDescription>,
    /// Members referring to joints by their position in `joints`.
    pub members: Vec<MemberDescription>,
}

/// Serializable joint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct JointDescription {
    /// Horizontal position in metres.
    pub x: f64,
    /// Vertical position in metres.
    pub y: f64,
    /// Whether the joint is anchored to the site.
    #[serde(default)]
    pub fixed: bool,
}

/// Serializable member.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberDescription {
    /// Position of the first joint in the joint list.
    pub a: usize,
    /// Position of the second joint in the joint list.
    pub b: usize,
    /// Cross-section size in millimetres.
    pub material_size_mm: f64,
}
