use std::{ops::Range, path::PathBuf};

use rand::Rng;

use crate::{
    constants::Weight,
    edge,
    graph::{vertex_index, Graph},
};

/// The textbook Bellman-Ford example with negative edges but no negative cycle.
pub fn generate_negative_weight_graph() -> Graph<&'static str> {
    let mut g = Graph::new();

    let a = g.create_vertex("A");
    let b = g.create_vertex("B");
    let c = g.create_vertex("C");
    let d = g.create_vertex("D");
    let e = g.create_vertex("E");

    g.add_edge(edge!(a => b, 6.0));
    g.add_edge(edge!(a => d, 7.0));
    g.add_edge(edge!(b => c, 5.0));
    g.add_edge(edge!(b => e, -4.0));
    g.add_edge(edge!(c => b, -2.0));
    g.add_edge(edge!(d => c, -3.0));

    g
}

pub fn generate_simple_graph() -> Graph<&'static str> {
    let mut g = Graph::new();

    let a = g.create_vertex("A");
    let b = g.create_vertex("B");
    let c = g.create_vertex("C");
    let d = g.create_vertex("D");
    let e = g.create_vertex("E");

    g.add_edge(edge!(a => b, 2.0));
    g.add_edge(edge!(b => c, 1.0));
    g.add_edge(edge!(a => c, 5.5));
    g.add_edge(edge!(a => d, 1.0));
    g.add_edge(edge!(c => d, 1.0));
    g.add_edge(edge!(d => e, 4.5));

    g
}

pub fn generate_negative_cycle_graph() -> Graph<&'static str> {
    let mut g = Graph::new();

    let a = g.create_vertex("A");
    let b = g.create_vertex("B");
    let c = g.create_vertex("C");
    let d = g.create_vertex("D");
    let e = g.create_vertex("E");

    g.add_edge(edge!(a => b, 1.0));
    g.add_edge(edge!(b => c, -3.0));
    g.add_edge(edge!(c => b, 1.0));
    g.add_edge(edge!(d => e, 1.0));

    g
}

/// Random graph with up to `num_edges` directed edges and integral weights from `weights`.
/// Self loops are skipped.
pub fn generate_random_graph<R: Rng>(
    rng: &mut R,
    num_vertices: usize,
    num_edges: usize,
    weights: Range<i32>,
) -> Graph<usize> {
    let mut g = Graph::with_capacity(num_vertices);
    for i in 0..num_vertices {
        g.create_vertex(i);
    }

    for _ in 0..num_edges {
        let from = rng.gen_range(0..num_vertices);
        let to = rng.gen_range(0..num_vertices);
        if from == to {
            continue;
        }
        let weight = rng.gen_range(weights.clone()) as Weight;
        g.add_edge(edge!(vertex_index(from) => vertex_index(to), weight));
    }

    g
}

pub fn test_data(file_name: &str) -> PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join(file_name)
}
