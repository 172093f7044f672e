//! Site rules that decide which joints get pin holes.

use crate::geometry::Point2;
use crate::gusset::Gusset;

/// Height band above the deck, in metres, kept free for traffic.
pub const MIN_ROADWAY_CLEARANCE_M: f64 = 4.5;

/// Whether a joint at `position` lies outside the roadway envelope.
///
/// Joints at or below the deck and joints at or above the clearance height are clear.
///
/// # Examples
/// ```
/// use gussetx::{is_joint_clear_of_roadway, point};
///
/// assert!(is_joint_clear_of_roadway(point(3.0, 0.0)));
/// assert!(!is_joint_clear_of_roadway(point(3.0, 2.0)));
/// assert!(is_joint_clear_of_roadway(point(3.0, 4.5)));
/// ```
#[must_use]
pub fn is_joint_clear_of_roadway(position: Point2) -> bool {
    position.y <= 0.0 || position.y >= MIN_ROADWAY_CLEARANCE_M
}

/// Gussets whose joints are clear of the roadway and so carry a pin.
pub fn pin_hole_joints<'a, I>(gussets: I) -> impl Iterator<Item = &'a Gusset>
where
    I: IntoIterator<Item = &'a Gusset>,
{
    gussets
        .into_iter()
        .filter(|gusset| is_joint_clear_of_roadway(gusset.position))
}

#[cfg(test)]
mod tests {
    use petgraph::graph::NodeIndex;

    use super::*;
    use crate::geometry::point;

    #[test]
    fn clearance_band_is_exclusive() {
        assert!(is_joint_clear_of_roadway(point(0.0, -1.0)));
        assert!(is_joint_clear_of_roadway(point(0.0, 0.0)));
        assert!(!is_joint_clear_of_roadway(point(0.0, 1.0e-9)));
        assert!(!is_joint_clear_of_roadway(point(0.0, 4.499)));
        assert!(is_joint_clear_of_roadway(point(0.0, 7.0)));
    }

    #[test]
    fn pin_holes_skip_joints_inside_the_envelope() {
        let gussets: Vec<Gusset> = [0.0, 2.0, 6.0, -1.0]
            .iter()
            .enumerate()
            .map(|(index, &y)| Gusset {
                joint: NodeIndex::new(index),
                position: point(index as f64, y),
                hull: Vec::new(),
                half_depth_m: 0.0,
            })
            .collect();
        let pinned: Vec<usize> = pin_hole_joints(&gussets)
            .map(|gusset| gusset.joint.index())
            .collect();
        assert_eq!(pinned, vec![0, 2, 3]);
    }
}
