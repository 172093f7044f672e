//! Error types produced while editing bridges or configuring gusset construction.

use petgraph::graph::{EdgeIndex, NodeIndex};
use thiserror::Error;

/// Reason a member cannot take part in gusset construction.
///
/// These are rejected when the bridge is edited, so the gusset constructor never
/// divides by a zero member length.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum MemberGeometryError {
    /// Returned when both ends of a member sit at the same position.
    #[error("member between joints {a:?} and {b:?} has zero length")]
    ZeroLength {
        /// First endpoint of the member.
        a: NodeIndex,
        /// Second endpoint of the member.
        b: NodeIndex,
    },
    /// Returned when a member would connect a joint to itself.
    #[error("member cannot connect joint {joint:?} to itself")]
    SelfLoop {
        /// The joint named as both endpoints.
        joint: NodeIndex,
    },
    /// Returned when the material size is zero, negative or not a number.
    #[error("material size must be positive (received {size_mm} mm)")]
    NonPositiveSize {
        /// Rejected material size in millimetres.
        size_mm: f64,
    },
}

/// Error returned when gusset options are not usable.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ConfigurationError {
    /// Returned when the enforced minimum member size is negative.
    #[error("minimum member size must not be negative (received {0} mm)")]
    NegativeMinimumSize(f64),
    /// Returned when the enforced minimum member size is infinite or not a number.
    #[error("minimum member size must be finite (received {0} mm)")]
    NonFiniteMinimumSize(f64),
}

/// Error returned when editing a [`Bridge`](crate::Bridge) with invalid indices or geometry.
///
/// # Examples
///
/// ```
/// use petgraph::graph::EdgeIndex;
/// use gussetx::{Bridge, BridgeEditError};
///
/// let mut bridge = Bridge::new();
/// let invalid_member = EdgeIndex::new(42);
/// let error = bridge
///     .set_member_size(invalid_member, 200.0)
///     .expect_err("unknown member is rejected");
/// assert_eq!(error, BridgeEditError::UnknownMember(invalid_member));
/// ```
#[derive(Debug, Error, PartialEq)]
pub enum BridgeEditError {
    /// Returned when a joint cannot be found in the bridge.
    #[error("joint {0:?} does not exist in this bridge")]
    UnknownJoint(NodeIndex),
    /// Returned when a member cannot be found in the bridge.
    #[error("member {0:?} does not exist in this bridge")]
    UnknownMember(EdgeIndex),
    /// Returned when the edit would leave a member with unusable geometry.
    #[error("{0}")]
    InvalidMemberGeometry(MemberGeometryError),
}

impl From<MemberGeometryError> for BridgeEditError {
    fn from(value: MemberGeometryError) -> Self {
        Self::InvalidMemberGeometry(value)
    }
}

/// Error returned when loading a bridge or options from JSON.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Returned when the text is not valid JSON for the expected shape.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Returned when a member names a joint position that is not in the joint list.
    #[error("member {member} refers to joint {joint}, but only {joint_count} joints are listed")]
    UnknownJointReference {
        /// Position of the offending member in the member list.
        member: usize,
        /// Joint position the member refers to.
        joint: usize,
        /// Number of joints in the description.
        joint_count: usize,
    },
    /// Returned when a described member is geometrically invalid.
    #[error("member {member} is invalid: {source}")]
    Edit {
        /// Position of the offending member in the member list.
        member: usize,
        /// Why the member was rejected.
        #[source]
        source: BridgeEditError,
    },
    /// Returned when the options are out of range.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
