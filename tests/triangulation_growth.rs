//! Growth scenarios for the triangulation engine.
//!
//! Covers the seed triangle invariants, fan insertion on plain and
//! wrap-around arcs, error paths (with the graph left untouched), truncation
//! views, and the diagnostic boundary recovery.

use planegraph::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeSet;

fn v(i: u32) -> VertexId {
    VertexId::new(i)
}

fn ids(raw: &[u32]) -> Vec<VertexId> {
    raw.iter().map(|&i| VertexId::new(i)).collect()
}

#[test]
fn seed_triangle_invariants() {
    let graph = Triangulation::seeded();

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.periphery().len(), 3);
    assert_eq!(graph.periphery().as_slice(), ids(&[1, 2, 3]).as_slice());

    for vertex in graph.vertices() {
        assert_eq!(vertex.degree(), 2);
    }
    for (a, b) in [(1, 2), (2, 3), (3, 1)] {
        assert!(graph.contains_edge(v(a), v(b)));
    }
    graph.validate().unwrap();
}

#[test]
fn reset_replaces_grown_state_atomically() {
    let mut graph = Triangulation::seeded();
    graph.insert_on_arc(v(1), v(2), ColorClass::new(0)).unwrap();
    graph.insert_on_arc(v(4), v(3), ColorClass::new(1)).unwrap();
    graph.set_truncation(v(4));
    graph.begin_add();

    graph.reset();

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.periphery().as_slice(), ids(&[1, 2, 3]).as_slice());
    assert!(graph.truncation().is_none());
    assert_eq!(graph.selection_state(), SelectionState::Idle);
    graph.validate().unwrap();
}

#[test]
fn pair_arc_inserts_between_its_endpoints() {
    let mut graph = Triangulation::seeded();

    let v4 = graph.insert_on_arc(v(1), v(2), ColorClass::new(0)).unwrap();

    assert_eq!(v4, v(4));
    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 5);
    assert!(graph.contains_edge(v(1), v4));
    assert!(graph.contains_edge(v(2), v4));
    assert_eq!(graph.periphery().as_slice(), ids(&[1, 4, 2, 3]).as_slice());
    assert_eq!(graph.vertex(v4).unwrap().degree(), 2);
    graph.validate().unwrap();
}

#[test]
fn longer_arc_encloses_its_interior() {
    let mut graph = Triangulation::seeded();
    graph.insert_on_arc(v(1), v(2), ColorClass::new(0)).unwrap();

    // Arc [4, 2, 3]: vertex 2 becomes interior, endpoints 4 and 3 stay.
    let v5 = graph.insert_on_arc(v(4), v(3), ColorClass::new(0)).unwrap();

    assert_eq!(v5, v(5));
    for n in [4, 2, 3] {
        assert!(graph.contains_edge(v(n), v5));
    }
    assert_eq!(graph.vertex(v5).unwrap().degree(), 3);
    assert_eq!(graph.periphery().as_slice(), ids(&[1, 4, 5, 3]).as_slice());
    assert!(!graph.periphery().contains(v(2)));
    graph.validate().unwrap();
}

#[test]
fn arc_deltas_follow_its_length() {
    // For an arc of k vertices: +1 vertex, +k edges, periphery grows by 3-k.
    let mut graph = Triangulation::seeded();
    graph.insert_on_arc(v(1), v(2), ColorClass::new(0)).unwrap();
    graph.insert_on_arc(v(4), v(2), ColorClass::new(0)).unwrap();

    let before_vertices = graph.vertex_count();
    let before_edges = graph.edge_count();
    let before_periphery = graph.periphery().len();

    let ring = graph.periphery().as_slice().to_vec();
    let (vp, vq) = (ring[0], ring[3]);
    let k = 4;

    graph.insert_on_arc(vp, vq, ColorClass::new(0)).unwrap();

    assert_eq!(graph.vertex_count(), before_vertices + 1);
    assert_eq!(graph.edge_count(), before_edges + k);
    assert_eq!(graph.periphery().len(), before_periphery + 3 - k);
    graph.validate().unwrap();
}

#[test]
fn wrap_around_arc_connects_the_cyclic_run() {
    let mut graph = Triangulation::seeded();
    graph.insert_on_arc(v(1), v(2), ColorClass::new(0)).unwrap();
    assert_eq!(graph.periphery().as_slice(), ids(&[1, 4, 2, 3]).as_slice());

    // vp = 2 appears after vq = 4 in the listing: the arc wraps around the
    // end and covers [2, 3, 1, 4], exactly as it would on a listing rotated
    // to start at vertex 2.
    let v5 = graph.insert_on_arc(v(2), v(4), ColorClass::new(0)).unwrap();

    let added: BTreeSet<EdgeKey> = graph
        .edges()
        .filter(|e| e.contains(v5))
        .collect();
    let expected: BTreeSet<EdgeKey> = [1, 2, 3, 4]
        .into_iter()
        .map(|i| EdgeKey::new(v(i), v5))
        .collect();
    assert_eq!(added, expected);
    assert_eq!(graph.vertex(v5).unwrap().degree(), 4);

    // Endpoints stay, interior [3, 1] is enclosed.
    let boundary: BTreeSet<VertexId> = graph.periphery().iter().collect();
    assert_eq!(boundary, [v(2), v(4), v5].into_iter().collect());
    graph.validate().unwrap();
}

#[test]
fn wrap_arc_with_interior_encloses_it() {
    let mut wrapped = Triangulation::seeded();
    wrapped.insert_on_arc(v(1), v(2), ColorClass::new(0)).unwrap();
    // Listing [1, 4, 2, 3]: arc 3 -> 4 wraps and covers [3, 1, 4].
    let w = wrapped.insert_on_arc(v(3), v(4), ColorClass::new(0)).unwrap();
    let wrapped_fan: BTreeSet<VertexId> = wrapped
        .vertex(w)
        .unwrap()
        .neighbors()
        .iter()
        .copied()
        .collect();

    assert_eq!(wrapped_fan, [v(3), v(1), v(4)].into_iter().collect());
    wrapped.validate().unwrap();
}

#[test]
fn failed_insertions_leave_the_graph_unchanged() {
    let mut graph = Triangulation::seeded();
    let before = graph.clone();

    assert_eq!(
        graph.insert_on_arc(v(1), v(1), ColorClass::new(0)),
        Err(TriangulationError::InvalidBoundaryVertex { vertex: v(1) })
    );
    assert_eq!(
        graph.insert_on_arc(v(1), v(99), ColorClass::new(0)),
        Err(TriangulationError::InvalidBoundaryVertex { vertex: v(99) })
    );
    assert_eq!(
        graph.insert_on_arc(v(42), v(2), ColorClass::new(0)),
        Err(TriangulationError::InvalidBoundaryVertex { vertex: v(42) })
    );

    assert_eq!(graph.vertex_count(), before.vertex_count());
    assert_eq!(graph.edge_count(), before.edge_count());
    assert_eq!(graph.periphery(), before.periphery());
}

#[test]
fn truncation_is_a_reversible_view() {
    let mut graph = Triangulation::seeded();
    graph.insert_on_arc(v(1), v(2), ColorClass::new(0)).unwrap();
    graph.insert_on_arc(v(4), v(3), ColorClass::new(0)).unwrap();

    let full_vertices: Vec<VertexId> = graph.visible_vertices().map(Vertex::id).collect();
    let full_edges: Vec<EdgeKey> = graph.visible_edges().collect();
    let full_periphery: Vec<VertexId> = graph.visible_periphery().collect();

    graph.set_truncation(v(3));

    let cut_vertices: Vec<VertexId> = graph.visible_vertices().map(Vertex::id).collect();
    assert_eq!(cut_vertices, ids(&[1, 2, 3]));
    for e in graph.visible_edges() {
        assert!(e.v1() <= v(3));
    }
    assert!(graph.visible_periphery().all(|p| p <= v(3)));

    // Hidden, not gone: direct lookup still works.
    assert!(graph.vertex(v(5)).is_some());
    assert_eq!(graph.vertex_count(), 5);

    graph.clear_truncation();
    let restored_vertices: Vec<VertexId> = graph.visible_vertices().map(Vertex::id).collect();
    let restored_edges: Vec<EdgeKey> = graph.visible_edges().collect();
    let restored_periphery: Vec<VertexId> = graph.visible_periphery().collect();

    assert_eq!(restored_vertices, full_vertices);
    assert_eq!(restored_edges, full_edges);
    assert_eq!(restored_periphery, full_periphery);
}

#[test]
fn truncation_never_mutates_structure() {
    let mut graph = Triangulation::seeded();
    graph.insert_on_arc(v(1), v(2), ColorClass::new(0)).unwrap();
    let before = graph.clone();

    graph.set_truncation(v(1));
    assert_eq!(graph.vertices(), before.vertices());
    assert_eq!(graph.periphery(), before.periphery());
    assert_eq!(graph.edge_count(), before.edge_count());
}

#[test]
fn recovered_boundary_of_a_square_is_a_4_cycle() {
    let mut graph = Triangulation::seeded();
    graph.insert_on_arc(v(1), v(2), ColorClass::new(0)).unwrap();

    // Lay the four vertices out as a square; all of them are hull members.
    let corners = [
        (1, (0.0, 0.0)),
        (2, (10.0, 0.0)),
        (4, (10.0, 10.0)),
        (3, (0.0, 10.0)),
    ];
    for (i, (x, y)) in corners {
        assert!(graph.set_vertex_position(v(i), Point2::new(x, y)));
    }

    let hull = graph.recompute_boundary();
    assert_eq!(hull.len(), 4);
    let members: BTreeSet<VertexId> = hull.iter().copied().collect();
    assert_eq!(members, ids(&[1, 2, 3, 4]).into_iter().collect());

    // Diagnostic only: the maintained periphery is untouched.
    assert_eq!(graph.periphery().as_slice(), ids(&[1, 4, 2, 3]).as_slice());
}

#[test]
fn recovered_boundary_of_empty_graph_is_empty() {
    let graph = Triangulation::new();
    assert!(graph.recompute_boundary().is_empty());
}

#[test]
fn random_insertion_needs_a_non_adjacent_pair() {
    let mut graph = Triangulation::seeded();
    let mut rng = StdRng::seed_from_u64(11);

    // On the seed triangle every boundary pair is cyclically adjacent.
    assert!(graph.insert_random(&mut rng).is_none());
    assert_eq!(graph.vertex_count(), 3);

    // One deliberate insertion widens the boundary to 4; random growth can
    // proceed from there and always fans at least 3 vertices.
    graph.insert_on_arc(v(1), v(2), ColorClass::new(0)).unwrap();
    for _ in 0..40 {
        let id = graph.insert_random(&mut rng).unwrap();
        assert!(graph.vertex(id).unwrap().degree() >= 3);
        assert!(graph.periphery().contains(id));
    }
    graph.validate().unwrap();
}

#[test]
fn every_vertex_stays_queryable_by_id() {
    let mut graph = Triangulation::seeded();
    graph.insert_on_arc(v(1), v(2), ColorClass::new(0)).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..30 {
        graph.insert_random(&mut rng);
    }
    graph.set_truncation(v(2));

    for i in 1..=graph.vertex_count() as u32 {
        let vertex = graph.vertex(v(i)).unwrap();
        assert_eq!(vertex.id(), v(i));
    }
}

#[test]
fn hit_testing_respects_truncation() {
    let mut graph = Triangulation::seeded();
    let v4 = graph.insert_on_arc(v(1), v(2), ColorClass::new(0)).unwrap();
    let target = graph.vertex(v4).unwrap().position();

    assert_eq!(graph.vertex_at(target, 1.0), Some(v4));

    graph.set_truncation(v(3));
    assert_eq!(graph.vertex_at(target, 1.0), None);

    graph.clear_truncation();
    assert_eq!(graph.vertex_at(target, 1.0), Some(v4));
}
