//! Planar geometric types and primitives for gusset construction.

use std::ops::{Add, Mul, Neg, Sub};

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Relative determinant magnitude below which two segments are treated as parallel.
pub const PARALLEL_EPSILON: f64 = 1.0e-12;

/// Position or offset in the plane of the truss measured in metres.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    /// Distance along the horizontal axis.
    pub x: f64,
    /// Distance along the vertical axis.
    pub y: f64,
}

impl Point2 {
    /// Create a [`Point2`] with explicit coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin of the plane.
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Multiply both components by `factor`.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Rotate by 90 degrees counter-clockwise.
    #[must_use]
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Dot product with `other`.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the cross product with `other`.
    #[must_use]
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (other - self).length()
    }

    /// Convert the point into an algebraic vector.
    #[must_use]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl Add for Point2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl From<Vector2<f64>> for Point2 {
    fn from(value: Vector2<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Point2> for Vector2<f64> {
    fn from(value: Point2) -> Self {
        value.to_vector()
    }
}

/// Convenience helper for creating [`Point2`] instances.
///
/// # Examples
/// ```
/// use gussetx::point;
///
/// let joint = point(1.5, -0.25);
/// assert_eq!(joint.y, -0.25);
/// ```
#[must_use]
pub const fn point(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

/// Signed turn of the path `o -> a -> b`; positive for a left (counter-clockwise) turn.
#[must_use]
pub fn cross3(o: Point2, a: Point2, b: Point2) -> f64 {
    (a - o).cross(b - a)
}

/// Intersect the closed segments `p0-p1` and `q0-q1`.
///
/// Returns `None` when the segments are parallel, collinear or simply do not meet.
/// A determinant that is tiny compared with the product of the segment lengths counts
/// as parallel so nearly aligned members don't produce far-flung points.
///
/// # Examples
/// ```
/// use gussetx::{intersect_segments, point};
///
/// let hit = intersect_segments(point(0.0, 0.0), point(2.0, 2.0), point(0.0, 2.0), point(2.0, 0.0));
/// assert_eq!(hit, Some(point(1.0, 1.0)));
///
/// let miss = intersect_segments(point(0.0, 0.0), point(1.0, 0.0), point(0.0, 1.0), point(1.0, 1.0));
/// assert_eq!(miss, None);
/// ```
#[must_use]
pub fn intersect_segments(p0: Point2, p1: Point2, q0: Point2, q1: Point2) -> Option<Point2> {
    let p = p1 - p0;
    let q = q1 - q0;
    let determinant = p.cross(q);
    if determinant.abs() <= PARALLEL_EPSILON * p.length() * q.length() {
        return None;
    }
    let w = p0 - q0;
    let s = q.cross(w) / determinant;
    let t = p.cross(w) / determinant;
    if s.is_nan() || t.is_nan() || !(0.0..=1.0).contains(&s) || !(0.0..=1.0).contains(&t) {
        return None;
    }
    Some(p0 + p * s)
}
