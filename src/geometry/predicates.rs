//! Geometric predicates for planar geometry.
//!
//! This module contains the orientation predicate (signed-area / left-turn
//! test) that the periphery orientation convention and the gift-wrapping
//! boundary recovery are built on.

use crate::geometry::point::Point2;

/// Represents the orientation of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// The triple turns clockwise (signed area < 0)
    NEGATIVE,
    /// The triple is collinear (signed area = 0)
    DEGENERATE,
    /// The triple turns counter-clockwise (signed area > 0)
    POSITIVE,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NEGATIVE => write!(f, "NEGATIVE"),
            Self::DEGENERATE => write!(f, "DEGENERATE"),
            Self::POSITIVE => write!(f, "POSITIVE"),
        }
    }
}

/// Twice the signed area of triangle `abc`.
///
/// Positive when `c` lies to the left of the directed line `a → b`
/// (counter-clockwise turn), negative to the right, zero when collinear.
///
/// # Example
///
/// ```
/// use planegraph::geometry::point::Point2;
/// use planegraph::geometry::predicates::orient2d;
///
/// let a = Point2::new(0.0, 0.0);
/// let b = Point2::new(1.0, 0.0);
/// let c = Point2::new(0.0, 1.0);
/// assert!(orient2d(&a, &b, &c) > 0.0);
/// ```
#[inline]
#[must_use]
pub fn orient2d(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Classifies the sign of [`orient2d`] as an [`Orientation`].
#[inline]
#[must_use]
pub fn orientation(a: &Point2, b: &Point2, c: &Point2) -> Orientation {
    let det = orient2d(a, b, c);
    if det > 0.0 {
        Orientation::POSITIVE
    } else if det < 0.0 {
        Orientation::NEGATIVE
    } else {
        Orientation::DEGENERATE
    }
}

/// Returns `true` when `c` lies strictly to the left of the directed line
/// `a → b`.
#[inline]
#[must_use]
pub fn is_left(a: &Point2, b: &Point2, c: &Point2) -> bool {
    orient2d(a, b, c) > 0.0
}
