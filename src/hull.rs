//! Planar convex hulls of unordered point sets.
//!
//! Points are sorted by `x` then `y` and split about the line joining the extreme
//! points into an upper and a lower chain. Each chain is reduced on its own stack
//! between the two extreme points, popping every point that fails to make a strict
//! left turn. The hull is the upper chain from the rightmost point to the leftmost,
//! followed by the lower chain back toward the rightmost.

use crate::geometry::{cross3, Point2};

/// Turns with a cross product at or below this value are not left turns.
pub const HULL_EPSILON: f64 = 1.0e-12;

/// Accumulates candidate points and builds their convex hull.
///
/// The builder keeps its buffers between uses, so one instance can serve any number
/// of hulls. Building always empties the candidate set.
///
/// # Examples
/// ```
/// use gussetx::{point, ConvexHullBuilder};
///
/// let mut builder = ConvexHullBuilder::new();
/// builder.add(0.0, 0.0);
/// builder.add(1.0, 1.0);
/// builder.add(2.0, 0.0);
/// builder.add(1.0, 0.5);
/// let hull = builder.build();
/// assert_eq!(hull, vec![point(2.0, 0.0), point(1.0, 1.0), point(0.0, 0.0)]);
/// assert!(builder.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ConvexHullBuilder {
    /// Candidate points in insertion order.
    points: Vec<Point2>,
}

impl ConvexHullBuilder {
    /// Create a builder with no candidate points.
    #[must_use]
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Add a candidate point by coordinates.
    pub fn add(&mut self, x: f64, y: f64) {
        self.points.push(Point2::new(x, y));
    }

    /// Add a candidate point.
    pub fn add_point(&mut self, point: Point2) {
        self.points.push(point);
    }

    /// Number of candidate points collected so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no candidate points have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Discard all candidate points.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Build the hull of the collected points and reset the builder.
    pub fn build(&mut self) -> Vec<Point2> {
        let mut hull = Vec::new();
        self.build_into(&mut hull);
        hull
    }

    /// Like [`ConvexHullBuilder::build`], but writes into `hull`, replacing its contents.
    pub fn build_into(&mut self, hull: &mut Vec<Point2>) {
        hull_of_sortable(&mut self.points, hull);
        self.points.clear();
    }
}

impl Extend<Point2> for ConvexHullBuilder {
    fn extend<I: IntoIterator<Item = Point2>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl FromIterator<Point2> for ConvexHullBuilder {
    fn from_iter<I: IntoIterator<Item = Point2>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Convex hull of `points`, counter-clockwise, starting at the rightmost point.
///
/// Up to two points are returned unchanged. Collinear boundary points are dropped, so
/// an input whose points all lie on one line yields its two extreme points.
///
/// # Examples
/// ```
/// use gussetx::{convex_hull, point};
///
/// let square = [point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0), point(0.0, 1.0), point(0.5, 0.5)];
/// let hull = convex_hull(&square);
/// assert_eq!(hull, vec![point(1.0, 1.0), point(0.0, 1.0), point(0.0, 0.0), point(1.0, 0.0)]);
/// ```
#[must_use]
pub fn convex_hull(points: &[Point2]) -> Vec<Point2> {
    let mut scratch = points.to_vec();
    let mut hull = Vec::new();
    hull_of_sortable(&mut scratch, &mut hull);
    hull
}

/// Whether `point` lies inside or on the boundary of the counter-clockwise convex
/// polygon `hull`, allowing `tolerance` of outward slack.
///
/// Degenerate hulls of one or two points are treated as a point or a segment.
#[must_use]
pub fn hull_contains(hull: &[Point2], point: Point2, tolerance: f64) -> bool {
    match hull {
        [] => false,
        [only] => only.distance(point) <= tolerance,
        [a, b] => distance_to_segment(*a, *b, point) <= tolerance,
        _ => hull.iter().enumerate().all(|(idx, &start)| {
            let end = hull[(idx + 1) % hull.len()];
            let edge = end - start;
            let length = edge.length();
            length == 0.0 || edge.cross(point - start) / length >= -tolerance
        }),
    }
}

/// Distance from `point` to the closed segment `a-b`.
fn distance_to_segment(a: Point2, b: Point2, point: Point2) -> f64 {
    let edge = b - a;
    let length_squared = edge.dot(edge);
    if length_squared == 0.0 {
        return a.distance(point);
    }
    let t = ((point - a).dot(edge) / length_squared).clamp(0.0, 1.0);
    (a + edge * t).distance(point)
}

/// Sort `points` in place and write their hull into `hull`.
fn hull_of_sortable(points: &mut [Point2], hull: &mut Vec<Point2>) {
    hull.clear();
    if points.len() <= 2 {
        hull.extend_from_slice(points);
        return;
    }
    points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    let leftmost = points[0];
    let rightmost = points[points.len() - 1];
    if leftmost == rightmost {
        hull.push(rightmost);
        return;
    }
    let axis = rightmost - leftmost;

    // Each chain runs between the two anchors on its own stack.
    let (upper, lower): (Vec<Point2>, Vec<Point2>) = points[..points.len() - 1]
        .iter()
        .partition(|&&p| axis.cross(p - leftmost) > 0.0);

    hull.push(rightmost);
    for &p in upper.iter().rev().chain([&leftmost]) {
        pop_non_left_turns(hull, p);
        hull.push(p);
    }

    // Lower chain starts at the leftmost point, which is its first member.
    let mut lower_chain = Vec::with_capacity(lower.len() + 1);
    for &p in lower.iter().chain([&rightmost]) {
        pop_non_left_turns(&mut lower_chain, p);
        lower_chain.push(p);
    }
    if let [_, interior @ .., _] = lower_chain.as_slice() {
        hull.extend_from_slice(interior);
    }
}

/// Drop trailing points of `chain` that would not turn strictly left toward `next`.
///
/// The first point of the chain is never dropped.
fn pop_non_left_turns(chain: &mut Vec<Point2>, next: Point2) {
    while let [.., before, last] = chain.as_slice() {
        if cross3(*before, *last, next) > HULL_EPSILON {
            break;
        }
        chain.pop();
    }
}
