//! Canonical edge identifiers.
//!
//! Edges are undirected and stored once regardless of insertion direction, so
//! we expose a lightweight `EdgeKey` that:
//!
//! - identifies an edge purely by its two endpoint [`VertexId`]s
//! - canonicalizes endpoint ordering so `(a, b)` and `(b, a)` map to the same
//!   edge
//! - is `Copy`/`Hash`/`Ord` for fast use in sets and maps
//!
//! Because [`VertexId`] is the 1-based creation index, `EdgeKey` ordering is
//! deterministic across processes and serialization round-trips.

use crate::core::vertex::VertexId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical identifier for an (undirected) edge.
///
/// # Examples
///
/// ```rust
/// use planegraph::core::edge::EdgeKey;
/// use planegraph::core::vertex::VertexId;
///
/// let a = VertexId::new(1);
/// let b = VertexId::new(2);
/// let edge = EdgeKey::new(b, a);
/// assert_eq!(edge, EdgeKey::new(a, b));
/// assert_eq!(edge.endpoints(), (a, b));
/// ```
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct EdgeKey {
    v0: VertexId,
    v1: VertexId,
}

impl EdgeKey {
    /// Creates a new canonical edge key.
    ///
    /// The endpoints are reordered so that `v0 <= v1`. Equal endpoints would
    /// be a self-loop, which the graph never contains; constructing one is a
    /// caller bug caught in debug builds.
    #[must_use]
    pub fn new(a: VertexId, b: VertexId) -> Self {
        debug_assert!(a != b, "self-loop edge {a}-{b}");
        if a <= b {
            Self { v0: a, v1: b }
        } else {
            Self { v0: b, v1: a }
        }
    }

    /// Returns the smaller endpoint.
    #[inline]
    #[must_use]
    pub const fn v0(self) -> VertexId {
        self.v0
    }

    /// Returns the larger endpoint.
    #[inline]
    #[must_use]
    pub const fn v1(self) -> VertexId {
        self.v1
    }

    /// Returns both endpoints in canonical order.
    #[inline]
    #[must_use]
    pub const fn endpoints(self) -> (VertexId, VertexId) {
        (self.v0, self.v1)
    }

    /// Whether `v` is one of the endpoints.
    #[inline]
    #[must_use]
    pub fn contains(self, v: VertexId) -> bool {
        self.v0 == v || self.v1 == v
    }

    /// Given one endpoint, returns the other, or `None` if `v` is not an
    /// endpoint.
    #[must_use]
    pub fn other(self, v: VertexId) -> Option<VertexId> {
        if v == self.v0 {
            Some(self.v1)
        } else if v == self.v1 {
            Some(self.v0)
        } else {
            None
        }
    }
}

impl From<(VertexId, VertexId)> for EdgeKey {
    fn from((a, b): (VertexId, VertexId)) -> Self {
        Self::new(a, b)
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.v0, self.v1)
    }
}
