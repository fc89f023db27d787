//! The periphery: the ordered boundary cycle of the outer face.
//!
//! The periphery is stored as a linear listing of vertex ids whose cyclic
//! order is counter-clockwise under the crate's orientation convention. It is
//! the only structural summary maintained incrementally during insertion; the
//! from-scratch geometric recovery lives in
//! [`crate::geometry::algorithms::convex_hull`].
//!
//! Invariants (checked by [`Triangulation::validate`]):
//!
//! - once the graph is non-empty the periphery has at least 3 vertices
//! - consecutive entries (cyclically) are always connected by an edge
//!
//! [`Triangulation::validate`]: crate::core::triangulation::Triangulation::validate

use crate::core::vertex::VertexId;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Buffer sized for typical arcs; longer arcs spill to the heap.
pub type ArcBuffer = SmallVec<[VertexId; 8]>;

/// The ordered cyclic boundary of the current outer face.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Periphery {
    ring: Vec<VertexId>,
}

impl Periphery {
    /// Number of boundary vertices.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Whether the boundary is empty (graph never seeded).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// The linear listing of the cycle, counter-clockwise.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[VertexId] {
        &self.ring
    }

    /// Iterates the cycle in its stored orientation.
    pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.ring.iter().copied()
    }

    /// Whether `v` currently lies on the boundary.
    #[inline]
    #[must_use]
    pub fn contains(&self, v: VertexId) -> bool {
        self.ring.contains(&v)
    }

    /// Position of `v` in the linear listing.
    #[must_use]
    pub fn position_of(&self, v: VertexId) -> Option<usize> {
        self.ring.iter().position(|&x| x == v)
    }

    /// Minimum distance between two listing positions measured along the
    /// cycle in either direction.
    #[must_use]
    pub fn cyclic_separation(&self, i: usize, j: usize) -> usize {
        let n = self.ring.len();
        if n == 0 {
            return 0;
        }
        let forward = (j + n - i) % n;
        forward.min(n - forward)
    }

    /// The contiguous arc from listing position `p` to `q`, inclusive on both
    /// ends, walking the stored orientation. When `p > q` the arc wraps past
    /// the end of the listing; that is the normal wrap case, not an error.
    #[must_use]
    pub fn arc_between(&self, p: usize, q: usize) -> ArcBuffer {
        let n = self.ring.len();
        let mut arc = ArcBuffer::new();
        let mut i = p;
        loop {
            arc.push(self.ring[i]);
            if i == q {
                break;
            }
            i = (i + 1) % n;
        }
        arc
    }

    /// Replaces the *interior* of the arc from position `p` to `q` with the
    /// single vertex `new`, keeping both endpoints on the boundary:
    /// `[.. vp, interior .., vq ..]` becomes `[.. vp, new, vq ..]`. The
    /// cyclic order and orientation of the untouched remainder is preserved.
    pub(crate) fn splice(&mut self, p: usize, q: usize, new: VertexId) {
        debug_assert!(p != q);
        debug_assert!(p < self.ring.len() && q < self.ring.len());

        if p < q {
            let mut next = Vec::with_capacity(p + 2 + self.ring.len() - q);
            next.extend_from_slice(&self.ring[..=p]);
            next.push(new);
            next.extend_from_slice(&self.ring[q..]);
            self.ring = next;
        } else {
            // Wrap case: everything strictly after vp and strictly before vq
            // is interior; the kept remainder runs from vq forward to vp.
            let mut next = self.ring[q..=p].to_vec();
            next.push(new);
            self.ring = next;
        }
    }

    pub(crate) fn install(&mut self, ring: Vec<VertexId>) {
        self.ring = ring;
    }

    pub(crate) fn clear(&mut self) {
        self.ring.clear();
    }
}

impl<'a> IntoIterator for &'a Periphery {
    type Item = &'a VertexId;
    type IntoIter = std::slice::Iter<'a, VertexId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ring.iter()
    }
}
