//! The triangulation engine.
//!
//! [`Triangulation`] owns the vertex arena, the edge set, and the
//! incrementally maintained [`Periphery`], and exposes the three mutating
//! operations the presentation layer may issue: whole-graph reset, fan
//! insertion onto a periphery arc, and the display-only truncation bound.
//! Every mutating operation validates its inputs before touching any state,
//! so the graph is never observable in a partially updated form.

use crate::core::edge::EdgeKey;
use crate::core::periphery::Periphery;
use crate::core::selection::{PickOutcome, Selection, SelectionState};
use crate::core::vertex::{ColorClass, Vertex, VertexId};
use crate::geometry::algorithms::convex_hull::gift_wrap;
use crate::geometry::point::Point2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeSet;
use thiserror::Error;

/// Nominal span separating newly placed vertices from the boundary they are
/// fanned onto; also sets the scale of the seed triangle.
pub const NOMINAL_SPAN: f64 = 100.0;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors reported by the triangulation engine.
///
/// Every error is recoverable: the operation that produced it left the graph
/// unchanged.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TriangulationError {
    /// An insertion endpoint is unusable: it is not on the current periphery,
    /// or both endpoints coincide (a degenerate single-vertex arc).
    #[error("vertex {vertex} is not a usable boundary endpoint")]
    InvalidBoundaryVertex {
        /// The offending endpoint.
        vertex: VertexId,
    },
    /// An operation requiring a periphery was called before any seed exists.
    #[error("operation requires a seeded graph with a non-empty periphery")]
    EmptyGraph,
    /// An invariant check found the graph structure inconsistent.
    #[error("periphery invariant violated: {details}")]
    InvalidPeriphery {
        /// Human-readable description of the violated invariant.
        details: String,
    },
}

// =============================================================================
// TRIANGULATION
// =============================================================================

/// An incrementally-growing planar triangulated graph.
///
/// The graph grows only by fan insertions: a new vertex placed outside the
/// current boundary and connected to one contiguous arc of it. Vertices and
/// edges are never removed; the only way to shrink the graph is a whole-graph
/// [`reset`](Triangulation::reset).
///
/// # Examples
///
/// ```rust
/// use planegraph::prelude::*;
///
/// let mut graph = Triangulation::seeded();
/// assert_eq!(graph.periphery().len(), 3);
///
/// let v4 = graph
///     .insert_on_arc(VertexId::new(1), VertexId::new(2), ColorClass::new(3))
///     .unwrap();
/// assert_eq!(graph.vertex(v4).unwrap().degree(), 2);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Triangulation {
    vertices: Vec<Vertex>,
    edges: BTreeSet<EdgeKey>,
    periphery: Periphery,
    truncation: Option<VertexId>,
    #[serde(skip)]
    selection: Selection,
}

impl Triangulation {
    /// Creates an empty graph with no seed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph already holding the seed triangle.
    #[must_use]
    pub fn seeded() -> Self {
        let mut graph = Self::default();
        graph.reset();
        graph
    }

    // -------------------------------------------------------------------------
    // Mutating operations
    // -------------------------------------------------------------------------

    /// Clears all state and installs the seed triangle: vertices 1, 2, 3 in
    /// mutually visible positions around the origin, three edges, and the
    /// periphery `[1, 2, 3]` in counter-clockwise orientation. The truncation
    /// bound is cleared and any in-progress selection is cancelled.
    ///
    /// This replaces the whole graph at once; it is the only shrinking
    /// operation.
    pub fn reset(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.periphery.clear();
        self.truncation = None;
        self.selection.cancel();

        let a = self.alloc_vertex(
            Point2::new(-NOMINAL_SPAN, -NOMINAL_SPAN / 2.0),
            ColorClass::new(0),
        );
        let b = self.alloc_vertex(
            Point2::new(NOMINAL_SPAN, -NOMINAL_SPAN / 2.0),
            ColorClass::new(1),
        );
        let c = self.alloc_vertex(Point2::new(0.0, NOMINAL_SPAN), ColorClass::new(2));

        self.add_edge(a, b);
        self.add_edge(b, c);
        self.add_edge(c, a);
        self.periphery.install(vec![a, b, c]);
    }

    /// Fans a new vertex onto the periphery arc from `vp` to `vq`.
    ///
    /// The arc is the contiguous run of boundary vertices found by walking
    /// the periphery in its stored orientation from `vp` to `vq`, inclusive
    /// on both ends; when `vp` appears after `vq` in the linear listing the
    /// arc wraps around the end of the listing, which is the normal wrap
    /// case, not an error.
    ///
    /// The new vertex is placed at the arc centroid pushed outward toward the
    /// midpoint of the arc endpoints, scaled to [`NOMINAL_SPAN`]. This is an
    /// outward heuristic: callers may rely on the vertex being distinct from
    /// and outside the existing boundary region, not on exact coordinates.
    /// It is connected to every arc vertex, and the arc's interior is then
    /// enclosed: the periphery keeps `vp` and `vq` and lists the new vertex
    /// between them.
    ///
    /// # Errors
    ///
    /// - [`TriangulationError::EmptyGraph`] when no seed exists yet.
    /// - [`TriangulationError::InvalidBoundaryVertex`] when `vp == vq` or
    ///   either endpoint is not currently on the periphery.
    ///
    /// The graph is unchanged on any error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planegraph::prelude::*;
    ///
    /// let mut graph = Triangulation::seeded();
    /// let (v1, v2) = (VertexId::new(1), VertexId::new(2));
    ///
    /// let v4 = graph.insert_on_arc(v1, v2, ColorClass::new(0)).unwrap();
    /// assert_eq!(
    ///     graph.periphery().as_slice(),
    ///     &[v1, v4, v2, VertexId::new(3)]
    /// );
    /// assert_eq!(graph.edge_count(), 5);
    /// ```
    pub fn insert_on_arc(
        &mut self,
        vp: VertexId,
        vq: VertexId,
        color: ColorClass,
    ) -> Result<VertexId, TriangulationError> {
        if self.periphery.is_empty() {
            return Err(TriangulationError::EmptyGraph);
        }
        if vp == vq {
            return Err(TriangulationError::InvalidBoundaryVertex { vertex: vp });
        }
        let p = self
            .periphery
            .position_of(vp)
            .ok_or(TriangulationError::InvalidBoundaryVertex { vertex: vp })?;
        let q = self
            .periphery
            .position_of(vq)
            .ok_or(TriangulationError::InvalidBoundaryVertex { vertex: vq })?;

        // All input checking is done; from here the operation cannot fail.
        let arc = self.periphery.arc_between(p, q);
        let arc_points: SmallVec<[Point2; 8]> = arc
            .iter()
            .filter_map(|&v| self.vertex(v))
            .map(Vertex::position)
            .collect();

        let id = self.alloc_vertex(fan_position(&arc_points), color);
        for &v in &arc {
            self.add_edge(id, v);
        }
        self.periphery.splice(p, q, id);

        Ok(id)
    }

    /// Fans a new vertex onto a randomly chosen periphery arc.
    ///
    /// The two arc endpoints are picked with a cyclic separation of at least
    /// 2 positions in *either* direction, so they are never equal and never
    /// adjacent on the boundary; this rules out degenerate arcs by
    /// construction. The color class is drawn from the default palette.
    ///
    /// Returns `None` when no such pair exists, i.e. while the periphery has
    /// fewer than 4 vertices (on the seed triangle every pair of boundary
    /// vertices is cyclically adjacent, so the graph must first grow through
    /// a deliberate [`insert_on_arc`](Triangulation::insert_on_arc) call).
    pub fn insert_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<VertexId> {
        let n = self.periphery.len();
        if n < 4 {
            return None;
        }
        let i = rng.random_range(0..n);
        let offset = rng.random_range(2..=n - 2);
        let j = (i + offset) % n;
        debug_assert!(self.periphery.cyclic_separation(i, j) >= 2);
        let vp = self.periphery.as_slice()[i];
        let vq = self.periphery.as_slice()[j];
        let color = ColorClass::random(rng);

        self.insert_on_arc(vp, vq, color).ok()
    }

    /// Moves a vertex for layout purposes. Returns `false` for an unknown
    /// id. Adjacency and the maintained periphery are untouched, so the
    /// incremental periphery and [`recompute_boundary`] may disagree
    /// afterwards; that divergence is expected and documented.
    ///
    /// [`recompute_boundary`]: Triangulation::recompute_boundary
    pub fn set_vertex_position(&mut self, id: VertexId, position: Point2) -> bool {
        match self.vertex_mut(id) {
            Some(vertex) => {
                vertex.set_position(position);
                true
            }
            None => false,
        }
    }

    /// Limits the visible view to vertices with id at most `bound`.
    ///
    /// This is a pure display filter: no vertex, edge, or periphery entry is
    /// mutated, and raising the bound (or clearing it) restores the full
    /// view.
    pub fn set_truncation(&mut self, bound: VertexId) {
        self.truncation = Some(bound);
    }

    /// Removes the truncation bound, making the whole graph visible again.
    pub fn clear_truncation(&mut self) {
        self.truncation = None;
    }

    // -------------------------------------------------------------------------
    // Selection adapter
    // -------------------------------------------------------------------------

    /// Starts the interactive two-pick insertion flow.
    pub fn begin_add(&mut self) {
        self.selection.begin();
    }

    /// Cancels the interactive insertion flow, clearing any recorded pick.
    pub fn cancel_selection(&mut self) {
        self.selection.cancel();
    }

    /// Current state of the interactive insertion flow.
    #[must_use]
    pub fn selection_state(&self) -> SelectionState {
        self.selection.state()
    }

    /// Feeds one vertex-pick event (`None` is a miss) to the selection flow.
    ///
    /// Picks are validated against the current periphery. When the second
    /// valid pick arrives the recorded pair is handed to
    /// [`insert_on_arc`](Triangulation::insert_on_arc) with a random color
    /// class and the flow returns to idle whether or not the insertion
    /// succeeded; the insertion result is returned. Any other pick returns
    /// `None`.
    pub fn pick_vertex<R: Rng + ?Sized>(
        &mut self,
        hit: Option<VertexId>,
        rng: &mut R,
    ) -> Option<Result<VertexId, TriangulationError>> {
        let outcome = self.selection.on_pick(hit, |v| self.periphery.contains(v));
        match outcome {
            PickOutcome::PairReady { vp, vq } => {
                Some(self.insert_on_arc(vp, vq, ColorClass::random(rng)))
            }
            PickOutcome::FirstRecorded(_) | PickOutcome::Ignored => None,
        }
    }

    // -------------------------------------------------------------------------
    // Boundary recovery
    // -------------------------------------------------------------------------

    /// Recomputes the boundary from scratch by a gift-wrapping walk over all
    /// vertex positions, ignoring the edge set and the maintained periphery.
    ///
    /// The result is the *geometric convex hull* in counter-clockwise order.
    /// It is a best-effort diagnostic: it need not match the topological
    /// periphery when vertices have been moved, and on collinear or
    /// duplicate-position input a partial hull is returned (the walk has a
    /// built-in termination bound and cannot hang). The maintained periphery
    /// is not mutated and stays authoritative for insertion.
    #[must_use]
    pub fn recompute_boundary(&self) -> Vec<VertexId> {
        let points: Vec<(VertexId, Point2)> = self
            .vertices
            .iter()
            .map(|v| (v.id(), v.position()))
            .collect();
        gift_wrap(&points)
    }

    // -------------------------------------------------------------------------
    // Read accessors
    // -------------------------------------------------------------------------

    /// Looks up a vertex by id. Every vertex ever created stays queryable
    /// here regardless of the truncation bound.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        (id.get() as usize)
            .checked_sub(1)
            .and_then(|i| self.vertices.get(i))
    }

    /// All vertices in creation order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Number of vertices ever created.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Iterates all edges in canonical order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeKey> + '_ {
        self.edges.iter().copied()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether an edge between `a` and `b` exists, in either direction.
    #[must_use]
    pub fn contains_edge(&self, a: VertexId, b: VertexId) -> bool {
        a != b && self.edges.contains(&EdgeKey::new(a, b))
    }

    /// The maintained boundary cycle.
    #[must_use]
    pub fn periphery(&self) -> &Periphery {
        &self.periphery
    }

    /// The current truncation bound, if any.
    #[must_use]
    pub fn truncation(&self) -> Option<VertexId> {
        self.truncation
    }

    /// Vertices visible under the current truncation bound.
    pub fn visible_vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.iter().filter(|v| self.is_visible(v.id()))
    }

    /// Edges whose both endpoints are visible under the truncation bound.
    pub fn visible_edges(&self) -> impl Iterator<Item = EdgeKey> + '_ {
        self.edges
            .iter()
            .copied()
            .filter(|e| self.is_visible(e.v0()) && self.is_visible(e.v1()))
    }

    /// Periphery entries visible under the truncation bound, in cycle order.
    pub fn visible_periphery(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.periphery.iter().filter(|&v| self.is_visible(v))
    }

    /// Hit-test: the visible vertex closest to `point` within `radius`.
    #[must_use]
    pub fn vertex_at(&self, point: Point2, radius: f64) -> Option<VertexId> {
        self.visible_vertices()
            .map(|v| (v.id(), v.distance_to(&point)))
            .filter(|&(_, d)| d <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Checks the structural invariants of the graph:
    ///
    /// - the periphery is empty only while the graph is empty, and has at
    ///   least 3 distinct vertices otherwise
    /// - every periphery entry resolves to a vertex, and consecutive entries
    ///   (cyclically) are connected by an edge
    /// - every edge endpoint resolves, and the neighbor sets mirror the edge
    ///   set symmetrically
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::InvalidPeriphery`] describing the first
    /// violation found.
    pub fn validate(&self) -> Result<(), TriangulationError> {
        if self.periphery.is_empty() {
            if self.vertices.is_empty() && self.edges.is_empty() {
                return Ok(());
            }
            return Err(TriangulationError::InvalidPeriphery {
                details: "non-empty graph has no periphery".to_string(),
            });
        }

        let ring = self.periphery.as_slice();
        if ring.len() < 3 {
            return Err(TriangulationError::InvalidPeriphery {
                details: format!("periphery has {} vertices, expected at least 3", ring.len()),
            });
        }
        let distinct: BTreeSet<VertexId> = ring.iter().copied().collect();
        if distinct.len() != ring.len() {
            return Err(TriangulationError::InvalidPeriphery {
                details: "periphery lists a vertex more than once".to_string(),
            });
        }
        for (i, &v) in ring.iter().enumerate() {
            if self.vertex(v).is_none() {
                return Err(TriangulationError::InvalidPeriphery {
                    details: format!("periphery entry {v} does not resolve to a vertex"),
                });
            }
            let next = ring[(i + 1) % ring.len()];
            if !self.contains_edge(v, next) {
                return Err(TriangulationError::InvalidPeriphery {
                    details: format!("consecutive periphery vertices {v} and {next} share no edge"),
                });
            }
        }

        for edge in &self.edges {
            let (a, b) = edge.endpoints();
            match (self.vertex(a), self.vertex(b)) {
                (Some(va), Some(vb)) => {
                    if !va.is_adjacent_to(b) || !vb.is_adjacent_to(a) {
                        return Err(TriangulationError::InvalidPeriphery {
                            details: format!("edge {edge} is not mirrored in the neighbor sets"),
                        });
                    }
                }
                _ => {
                    return Err(TriangulationError::InvalidPeriphery {
                        details: format!("edge {edge} references a missing vertex"),
                    });
                }
            }
        }
        for vertex in &self.vertices {
            for &n in vertex.neighbors() {
                if !self.contains_edge(vertex.id(), n) {
                    return Err(TriangulationError::InvalidPeriphery {
                        details: format!(
                            "neighbor {} of vertex {} has no matching edge",
                            n,
                            vertex.id()
                        ),
                    });
                }
            }
        }

        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn is_visible(&self, id: VertexId) -> bool {
        self.truncation.is_none_or(|m| id <= m)
    }

    fn alloc_vertex(&mut self, position: Point2, color: ColorClass) -> VertexId {
        let id = VertexId::new(self.vertices.len() as u32 + 1);
        self.vertices.push(Vertex::new(id, position, color));
        id
    }

    fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        (id.get() as usize)
            .checked_sub(1)
            .and_then(|i| self.vertices.get_mut(i))
    }

    fn add_edge(&mut self, a: VertexId, b: VertexId) {
        if a == b {
            return;
        }
        self.edges.insert(EdgeKey::new(a, b));
        if let Some(v) = self.vertex_mut(a) {
            v.record_neighbor(b);
        }
        if let Some(v) = self.vertex_mut(b) {
            v.record_neighbor(a);
        }
    }
}

/// Placement heuristic for a fanned vertex: the arc centroid pushed toward
/// the midpoint of the arc endpoints, scaled to [`NOMINAL_SPAN`]. When that
/// direction degenerates (endpoints coincide with the centroid) the offset
/// falls back to straight down.
fn fan_position(arc_points: &[Point2]) -> Point2 {
    let (Some(centroid), Some(first), Some(last)) = (
        Point2::centroid(arc_points),
        arc_points.first(),
        arc_points.last(),
    ) else {
        return Point2::new(0.0, -NOMINAL_SPAN);
    };

    let mid = Point2::midpoint(first, last);
    let (dx, dy) = (mid.x - centroid.x, mid.y - centroid.y);
    let len = dx.hypot(dy);
    if len > 0.0 {
        Point2::new(
            centroid.x + dx / len * NOMINAL_SPAN,
            centroid.y + dy / len * NOMINAL_SPAN,
        )
    } else {
        Point2::new(centroid.x, centroid.y - NOMINAL_SPAN)
    }
}
