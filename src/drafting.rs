//! Plan outlines of gusset plates for 2D drafting.

use crate::geometry::{point, Point2};
use crate::gusset::Gusset;

/// Radius of the pin marker drawn at each joint, in metres.
pub const PIN_MARKER_RADIUS_M: f64 = 0.04;

/// World-coordinate outline of one gusset with its pin marker.
///
/// # Examples
/// ```
/// use gussetx::{build_gusset, point, Bridge, DraftingOutline, GussetOptions};
///
/// let mut bridge = Bridge::new();
/// let a = bridge.add_joint(point(4.0, 0.0));
/// let b = bridge.add_joint(point(8.0, 0.0));
/// bridge.add_member(a, b, 60.0)?;
/// let gusset = build_gusset(&bridge, a, &GussetOptions::default()).expect("joint exists");
///
/// let outline = DraftingOutline::from_gusset(&gusset);
/// assert_eq!(outline.pin_center, point(4.0, 0.0));
/// let (min, max) = outline.bounds().expect("outline has points");
/// assert!(min.x < 4.0 && max.x > 4.0);
/// # Ok::<(), gussetx::BridgeEditError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DraftingOutline {
    /// Plate outline, counter-clockwise, in world coordinates.
    pub polygon: Vec<Point2>,
    /// Centre of the pin marker, at the joint.
    pub pin_center: Point2,
    /// Radius of the pin marker.
    pub pin_radius_m: f64,
}

impl DraftingOutline {
    /// Outline of `gusset` placed at its joint.
    #[must_use]
    pub fn from_gusset(gusset: &Gusset) -> Self {
        Self {
            polygon: gusset.world_hull(),
            pin_center: gusset.position,
            pin_radius_m: PIN_MARKER_RADIUS_M,
        }
    }

    /// Axis-aligned `(min, max)` corners of the polygon, or `None` when it is empty.
    #[must_use]
    pub fn bounds(&self) -> Option<(Point2, Point2)> {
        let (first, rest) = self.polygon.split_first()?;
        let bounds = rest.iter().fold((*first, *first), |(min, max), p| {
            (
                point(min.x.min(p.x), min.y.min(p.y)),
                point(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some(bounds)
    }
}
