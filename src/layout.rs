use gussetx::{point, Bridge, BridgeEditError};

/// Build the demo bridge: a single triangle with members of three different sizes.
///
/// The two deck joints are supports, so the layout reads like the smallest possible
/// through truss.
pub fn build_demo_bridge() -> Result<Bridge, BridgeEditError> {
    let mut bridge = Bridge::new();
    let left = bridge.add_joint(point(0.0, 0.0));
    let apex = bridge.add_joint(point(1.0, 1.0));
    let right = bridge.add_joint(point(2.0, 0.0));
    bridge.set_joint_fixed(left, true)?;
    bridge.set_joint_fixed(right, true)?;

    bridge.add_member(left, apex, 100.0)?;
    bridge.add_member(apex, right, 200.0)?;
    bridge.add_member(right, left, 300.0)?;

    Ok(bridge)
}
