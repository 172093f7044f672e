#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

pub mod bridge;
pub mod config;
pub mod cost;
pub mod drafting;
pub mod errors;
pub mod geometry;
pub mod gusset;
pub mod hull;
pub mod mesh;
pub mod site;

pub use bridge::{
    Bridge, BridgeDescription, IncidentMember, JointDescription, JointId, MemberDescription,
    MemberId,
};
pub use config::GussetOptions;
pub use cost::{ConnectionCost, CONNECTION_FEE};
pub use drafting::{DraftingOutline, PIN_MARKER_RADIUS_M};
pub use errors::{BridgeEditError, ConfigurationError, LoadError, MemberGeometryError};
pub use geometry::{cross3, intersect_segments, point, Point2};
#[cfg(feature = "rayon")]
pub use gusset::build_gussets_par;
pub use gusset::{build_gusset, build_gussets, Gusset, GUSSET_THICKNESS_M};
pub use hull::{convex_hull, hull_contains, ConvexHullBuilder};
pub use mesh::{instance_offsets, GussetMesh};
pub use site::{is_joint_clear_of_roadway, pin_hole_joints, MIN_ROADWAY_CLEARANCE_M};
