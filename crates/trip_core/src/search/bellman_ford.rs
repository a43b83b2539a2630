//! Single source shortest paths with Bellman-Ford.
//!
//! Chosen over Dijkstra because prices may be negative. Runs in O(|V||E|), which is fine
//! for the size of a connection list but not for large road networks.
use std::hash::Hash;

use crate::constants::Weight;
use crate::graph::*;
use crate::search::shortest_path::ShortestPath;
use crate::search::solver_result::SolverResult;
use crate::statistics::SearchStats;
use log::{debug, info, warn};

pub struct BellmanFord<'a, L> {
    pub stats: SearchStats,
    g: &'a Graph<L>,
}

impl<'a, L: Clone + Eq + Hash> BellmanFord<'a, L> {
    pub fn new(graph: &'a Graph<L>) -> Self {
        BellmanFord {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    /// Relaxes all edges for at most `|V| - 1` passes, stopping early once a pass changes
    /// nothing.
    ///
    /// Returns `None` if a negative cycle is reachable from `source`.
    ///
    /// **Panics** if the source vertex does not exist
    pub fn run(&mut self, source: VertexIndex) -> Option<SolverResult> {
        let num_vertices = self.g.num_vertices();
        assert!(
            source.index() < num_vertices,
            "Source vertex index ({}) does not exist",
            source.index()
        );

        self.stats.init();

        // The graph does not change during a run, enumerate once
        let edges: Vec<Edge> = self.g.edges().collect();

        let mut distances = vec![Weight::INFINITY; num_vertices];
        let mut predecessors: Vec<Option<VertexIndex>> = vec![None; num_vertices];
        distances[source.index()] = 0.0;
        predecessors[source.index()] = Some(source);

        for _ in 0..num_vertices - 1 {
            self.stats.passes += 1;
            let mut updated = false;

            for edge in &edges {
                let relaxed = distances[edge.source.index()] + edge.weight;
                if relaxed < distances[edge.target.index()] {
                    distances[edge.target.index()] = relaxed;
                    predecessors[edge.target.index()] = Some(edge.source);
                    self.stats.edges_relaxed += 1;
                    updated = true;
                }
            }

            if !updated {
                break;
            }
        }

        let negative_cycle = edges
            .iter()
            .any(|edge| distances[edge.source.index()] + edge.weight < distances[edge.target.index()]);

        self.stats.finish();

        if negative_cycle {
            warn!(
                "Negative cycle reachable from vertex {}, no result: {}",
                source, self.stats
            );
            return None;
        }

        info!(
            "Converged from vertex {}: {} vertices, {} edges, {}",
            source,
            num_vertices,
            edges.len(),
            self.stats
        );

        Some(SolverResult::new(source, distances, predecessors))
    }

    pub fn search(&mut self, source: VertexIndex, target: VertexIndex) -> Option<ShortestPath> {
        let sp = self.run(source)?.shortest_path(target);
        if sp.is_some() {
            debug!("Path found: {:?}", sp);
        } else {
            debug!("No path found from {} to {}", source, target);
        }
        sp
    }
}
