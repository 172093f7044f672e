//! Connection cost of a bridge.

use crate::bridge::Bridge;

/// Fee per gusset, in dollars. Each joint carries two gussets, one per truss.
pub const CONNECTION_FEE: f64 = 400.0;

/// Cost of the gusset connections of a bridge.
///
/// Depends only on the number of joints, not on plate geometry.
///
/// # Examples
/// ```
/// use gussetx::{point, Bridge, ConnectionCost};
///
/// let mut bridge = Bridge::new();
/// bridge.add_joint(point(0.0, 0.0));
/// bridge.add_joint(point(4.0, 0.0));
/// bridge.add_joint(point(2.0, 3.0));
///
/// let cost = ConnectionCost::for_bridge(&bridge);
/// assert_eq!(cost.connection_count, 3);
/// assert_eq!(cost.cost(), 2400.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectionCost {
    /// Number of joints needing connections.
    pub connection_count: usize,
    /// Fee per gusset.
    pub connection_fee: f64,
}

impl ConnectionCost {
    /// Connection cost for every joint of `bridge`.
    #[must_use]
    pub fn for_bridge(bridge: &Bridge) -> Self {
        Self {
            connection_count: bridge.joint_count(),
            connection_fee: CONNECTION_FEE,
        }
    }

    /// Total cost of both trusses' gussets.
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.connection_count as f64 * self.connection_fee * 2.0
    }
}
