use crate::{
    constants::Weight,
    graph::VertexIndex,
    search::shortest_path::ShortestPath,
};

/// Distances and predecessors of one Bellman-Ford run from a single source.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverResult {
    source: VertexIndex,
    distances: Vec<Weight>,
    predecessors: Vec<Option<VertexIndex>>,
}

impl SolverResult {
    pub(crate) fn new(
        source: VertexIndex,
        distances: Vec<Weight>,
        predecessors: Vec<Option<VertexIndex>>,
    ) -> Self {
        SolverResult {
            source,
            distances,
            predecessors,
        }
    }

    pub fn source(&self) -> VertexIndex {
        self.source
    }

    /// Raw distances indexed by vertex, `f64::INFINITY` for unreached vertices
    pub fn distances(&self) -> &[Weight] {
        &self.distances
    }

    pub fn predecessor(&self, vertex: VertexIndex) -> Option<VertexIndex> {
        self.predecessors.get(vertex.index()).copied().flatten()
    }

    /// Minimum cost from the source to `vertex`, `None` if it was never reached.
    pub fn distance_to(&self, vertex: VertexIndex) -> Option<Weight> {
        let distance = *self.distances.get(vertex.index())?;
        if distance == Weight::INFINITY {
            None
        } else {
            Some(distance)
        }
    }

    /// Walks the predecessor chain back from `target` to `source()` and returns the
    /// vertices from the source to `target`.
    ///
    /// Returns `None` if `target` is unreached or the chain is broken.
    pub fn path_to(&self, target: VertexIndex) -> Option<Vec<VertexIndex>> {
        self.distance_to(target)?;

        let mut path = vec![target];
        let mut current = target;

        while current != self.source() {
            let previous = self.predecessor(current)?;
            // A chain longer than the vertex count can only be a loop
            if path.len() >= self.distances.len() {
                return None;
            }
            path.push(previous);
            current = previous;
        }

        path.reverse();
        Some(path)
    }

    pub fn shortest_path(&self, target: VertexIndex) -> Option<ShortestPath> {
        let weight = self.distance_to(target)?;
        let nodes = self.path_to(target)?;
        Some(ShortestPath::new(nodes, weight))
    }
}
