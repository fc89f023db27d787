//! Data and operations on graph vertices.
//!
//! A [`Vertex`] couples a permanent 1-based [`VertexId`] with a mutable 2-D
//! position, a categorical [`ColorClass`], and an index-based neighbor set.
//! Vertices are only ever created, never removed, so ids double as insertion
//! order and never get reused.

use crate::geometry::point::Point2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// =============================================================================
// VERTEX ID
// =============================================================================

/// Identifier of a vertex: its 1-based creation index.
///
/// Ids are assigned by the engine in strictly increasing order starting at 1
/// and stay valid for the lifetime of the graph.
///
/// # Examples
///
/// ```rust
/// use planegraph::core::vertex::VertexId;
///
/// let first = VertexId::new(1);
/// let second = VertexId::new(2);
/// assert!(first < second);
/// assert_eq!(first.get(), 1);
/// ```
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct VertexId(u32);

impl VertexId {
    /// Creates an id from a 1-based index.
    ///
    /// Index 0 is never assigned by the engine; constructing it is a caller
    /// bug caught in debug builds.
    #[inline]
    #[must_use]
    pub const fn new(index: u32) -> Self {
        debug_assert!(index >= 1);
        Self(index)
    }

    /// Returns the underlying 1-based index.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// COLOR CLASS
// =============================================================================

/// Number of color classes in the default palette.
pub const COLOR_CLASSES: u8 = 4;

/// A small categorical tag attached to each vertex.
///
/// This is a display category, *not* a graph coloring: no adjacency
/// constraint is enforced. Values at or above [`COLOR_CLASSES`] are legal and
/// wrap at presentation time.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ColorClass(u8);

impl ColorClass {
    /// Creates a color class from a raw tag.
    #[inline]
    #[must_use]
    pub const fn new(class: u8) -> Self {
        Self(class)
    }

    /// Returns the raw tag.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Picks a class uniformly from the default palette.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random_range(0..COLOR_CLASSES))
    }
}

impl fmt::Display for ColorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// VERTEX
// =============================================================================

/// A vertex of the planar graph.
///
/// The id and creation order are immutable; the position may be moved for
/// layout purposes (the engine itself never moves it after placement); the
/// neighbor set records adjacency by id, mirroring the edge set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    id: VertexId,
    position: Point2,
    color: ColorClass,
    neighbors: BTreeSet<VertexId>,
}

impl Vertex {
    /// Creates an isolated vertex.
    #[must_use]
    pub fn new(id: VertexId, position: Point2, color: ColorClass) -> Self {
        Self {
            id,
            position,
            color,
            neighbors: BTreeSet::new(),
        }
    }

    /// The permanent 1-based id.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> VertexId {
        self.id
    }

    /// Current position.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Point2 {
        self.position
    }

    /// Moves the vertex. Layout-only: adjacency and the maintained periphery
    /// are untouched, so the incremental periphery and the geometric hull may
    /// diverge after calling this.
    #[inline]
    pub fn set_position(&mut self, position: Point2) {
        self.position = position;
    }

    /// The categorical color tag.
    #[inline]
    #[must_use]
    pub const fn color(&self) -> ColorClass {
        self.color
    }

    /// Re-tags the vertex.
    #[inline]
    pub fn set_color(&mut self, color: ColorClass) {
        self.color = color;
    }

    /// Ids of adjacent vertices.
    #[inline]
    #[must_use]
    pub const fn neighbors(&self) -> &BTreeSet<VertexId> {
        &self.neighbors
    }

    /// Number of incident edges.
    #[inline]
    #[must_use]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Whether an edge to `other` exists.
    #[inline]
    #[must_use]
    pub fn is_adjacent_to(&self, other: VertexId) -> bool {
        self.neighbors.contains(&other)
    }

    /// Euclidean distance from this vertex to `point`.
    #[inline]
    #[must_use]
    pub fn distance_to(&self, point: &Point2) -> f64 {
        self.position.distance_to(point)
    }

    pub(crate) fn record_neighbor(&mut self, other: VertexId) {
        if other != self.id {
            self.neighbors.insert(other);
        }
    }
}
