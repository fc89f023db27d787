//! # planegraph
//!
//! A library for maintaining an incrementally-growing *planar triangulated
//! graph*: a maximal planar graph built by repeatedly fanning a new vertex
//! onto a contiguous arc of the current **periphery** (the ordered boundary
//! cycle of the outer face).
//!
//! # Features
//!
//! - Seed-triangle construction and atomic whole-graph reset
//! - Fan insertion onto any periphery arc, including wrap-around arcs, with
//!   incremental periphery maintenance (no from-scratch recomputation on the
//!   hot path)
//! - Independent gift-wrapping boundary recovery as a diagnostic cross-check
//! - Display-only truncation views ("show the graph as of vertex *m*")
//! - A two-pick selection state machine for interactive vertex insertion
//! - Serialization/Deserialization with [serde](https://serde.rs)
//!
//! # Basic Usage
//!
//! ```rust
//! use planegraph::prelude::*;
//!
//! // Seed triangle: vertices 1, 2, 3 with periphery [1, 2, 3].
//! let mut graph = Triangulation::seeded();
//! assert_eq!(graph.vertex_count(), 3);
//! assert_eq!(graph.edge_count(), 3);
//!
//! // Fan a new vertex onto the boundary arc from vertex 1 to vertex 2.
//! let v4 = graph
//!     .insert_on_arc(VertexId::new(1), VertexId::new(2), ColorClass::new(0))
//!     .unwrap();
//!
//! assert_eq!(graph.vertex_count(), 4);
//! assert!(graph.periphery().contains(v4));
//! assert!(graph.contains_edge(VertexId::new(1), v4));
//! assert!(graph.contains_edge(VertexId::new(2), v4));
//! ```
//!
//! # Periphery vs. recovered boundary
//!
//! The periphery is maintained incrementally and is the authoritative
//! boundary for insertion. [`Triangulation::recompute_boundary`] runs an
//! independent gift-wrapping walk over the vertex positions and returns the
//! *geometric* convex hull, which is a best-effort diagnostic: vertex
//! placement during insertion is an outward heuristic, not a proven geometric
//! guarantee, so the two boundaries are treated as independent data sources.
//!
//! # Concurrency
//!
//! The engine is single-threaded and synchronous. Every mutating operation
//! runs to completion atomically with respect to reads; there is no internal
//! locking. A multi-threaded host must serialize all calls behind a single
//! mutex.

#![forbid(unsafe_code)]

pub mod core {
    //! Core graph data structures and the triangulation engine.

    pub mod edge;
    pub mod periphery;
    pub mod selection;
    pub mod triangulation;
    pub mod vertex;

    pub use edge::*;
    pub use periphery::*;
    pub use selection::*;
    pub use triangulation::*;
    pub use vertex::*;
}

pub mod geometry {
    //! Geometric primitives and algorithms.

    pub mod algorithms {
        //! Geometric algorithms operating on vertex positions.

        pub mod convex_hull;
        pub use convex_hull::*;
    }

    pub mod point;
    pub mod predicates;

    pub use algorithms::*;
    pub use point::*;
    pub use predicates::*;
}

/// A prelude module that re-exports commonly used types.
/// This makes it easier to import the most commonly used items from the crate.
pub mod prelude {
    pub use crate::core::{edge::*, periphery::*, selection::*, triangulation::*, vertex::*};

    pub use crate::geometry::{algorithms::convex_hull::*, point::*, predicates::*};
}
