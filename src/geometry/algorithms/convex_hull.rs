//! Gift-wrapping boundary recovery.
//!
//! Recomputes the outer boundary of a vertex cloud from scratch, ignoring the
//! edge set entirely. This is a *geometric convex hull*, not necessarily the
//! topological periphery maintained incrementally by the engine: vertices may
//! have been moved, or placed in ways that violate the outward-placement
//! convention. Callers needing the authoritative boundary for insertion must
//! use the maintained periphery; this walk is a diagnostic cross-check and a
//! reset aid.

use crate::core::vertex::VertexId;
use crate::geometry::point::Point2;
use crate::geometry::predicates::orient2d;

/// Computes the convex hull of `points` by a gift-wrapping walk, returning
/// hull vertex ids in counter-clockwise order.
///
/// The walk starts at the vertex with minimum x (ties broken by minimum y)
/// and repeatedly selects the candidate `w` such that no other vertex lies
/// strictly to the right of the directed line current `→ w`. Collinear ties
/// are resolved by taking the candidate farthest from the current point, so
/// the result never depends on input evaluation order.
///
/// Termination is bounded by the vertex count: on degenerate input (collinear
/// or duplicate positions) the walk stops after at most `points.len()` steps
/// and returns the partial hull built so far rather than hanging or
/// signalling an error. Inputs with fewer than 3 points are returned as-is.
/// The result is best-effort diagnostic output in all degenerate cases.
///
/// # Examples
///
/// ```rust
/// use planegraph::core::vertex::VertexId;
/// use planegraph::geometry::algorithms::convex_hull::gift_wrap;
/// use planegraph::geometry::point::Point2;
///
/// let square = [
///     (VertexId::new(1), Point2::new(0.0, 0.0)),
///     (VertexId::new(2), Point2::new(1.0, 0.0)),
///     (VertexId::new(3), Point2::new(1.0, 1.0)),
///     (VertexId::new(4), Point2::new(0.0, 1.0)),
/// ];
/// let hull = gift_wrap(&square);
/// assert_eq!(hull.len(), 4);
/// assert_eq!(hull[0], VertexId::new(1));
/// ```
#[must_use]
pub fn gift_wrap(points: &[(VertexId, Point2)]) -> Vec<VertexId> {
    if points.len() < 3 {
        return points.iter().map(|&(id, _)| id).collect();
    }

    let start = lowest_leftmost(points);
    let mut hull = Vec::new();
    let mut current = start;

    // Safety bound: a hull revisits no vertex, so more than `len` steps
    // means degenerate input; bail with the partial hull.
    for _ in 0..points.len() {
        hull.push(points[current].0);
        let next = wrap_step(points, current);
        if next == start {
            break;
        }
        current = next;
    }

    hull
}

/// Index of the point with minimum x, ties broken by minimum y.
fn lowest_leftmost(points: &[(VertexId, Point2)]) -> usize {
    let mut best = 0;
    for (i, (_, p)) in points.iter().enumerate().skip(1) {
        let (_, q) = &points[best];
        if p.x.total_cmp(&q.x).then(p.y.total_cmp(&q.y)).is_lt() {
            best = i;
        }
    }
    best
}

/// Picks the next hull point from `current`: the candidate with every other
/// point on or to its left, farthest-first among collinear candidates.
fn wrap_step(points: &[(VertexId, Point2)], current: usize) -> usize {
    let here = &points[current].1;
    let mut endpoint = usize::from(current == 0);

    for (j, (_, candidate)) in points.iter().enumerate() {
        if j == current || j == endpoint {
            continue;
        }
        let det = orient2d(here, &points[endpoint].1, candidate);
        if det < 0.0 {
            endpoint = j;
        } else if det == 0.0
            && here.distance_to(candidate) > here.distance_to(&points[endpoint].1)
        {
            endpoint = j;
        }
    }

    endpoint
}
