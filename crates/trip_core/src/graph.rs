use crate::constants::Weight;
use log::debug;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, fmt, hash::Hash};

/// Default integer type for vertex indices
pub type DefaultIdx = u32;

/// Vertex identifier. Dense and zero based, doubles as row/column of the weight matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct VertexIndex(DefaultIdx);

impl VertexIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        VertexIndex(x as DefaultIdx)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn end() -> Self {
        VertexIndex(DefaultIdx::MAX)
    }
}

impl From<usize> for VertexIndex {
    fn from(ix: usize) -> Self {
        VertexIndex::new(ix)
    }
}

impl fmt::Display for VertexIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Short version of `VertexIndex::new`
pub fn vertex_index(index: usize) -> VertexIndex {
    VertexIndex::new(index)
}

/// A labeled vertex. The label is the identity, the index its slot in the matrix.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Vertex<L> {
    pub label: L,
    pub index: VertexIndex,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Edge {
    pub source: VertexIndex,
    pub target: VertexIndex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: VertexIndex, target: VertexIndex, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }
}

/// Directed graph backed by a square adjacency matrix.
///
/// `matrix[from][to]` holds the weight of the edge `from -> to`, `None` if there is no
/// such edge. The matrix grows by one row and one column per new vertex.
#[derive(Debug, Clone)]
pub struct Graph<L = String> {
    vertices: Vec<Vertex<L>>,
    label_index: FxHashMap<L, VertexIndex>,
    matrix: Vec<Vec<Option<Weight>>>,
}

impl<L: Clone + Eq + Hash> Graph<L> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            label_index: FxHashMap::default(),
            matrix: Vec::new(),
        }
    }

    pub fn with_capacity(num_vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(num_vertices),
            label_index: FxHashMap::with_capacity_and_hasher(num_vertices, Default::default()),
            matrix: Vec::with_capacity(num_vertices),
        }
    }

    /// Returns the vertex for `label`, creating it if it does not exist yet.
    ///
    /// **Panics** if the Graph is at the maximum number of vertices for its index type
    pub fn create_vertex(&mut self, label: L) -> VertexIndex {
        if let Some(vertex_idx) = self.label_index.get(&label) {
            return *vertex_idx;
        }

        let vertex_idx = VertexIndex::new(self.vertices.len());

        assert!(
            VertexIndex::end() != vertex_idx,
            "Maximum number of vertices for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        // Keep the matrix square
        for row in self.matrix.iter_mut() {
            row.push(None);
        }
        self.matrix.push(vec![None; self.vertices.len() + 1]);

        self.label_index.insert(label.clone(), vertex_idx);
        self.vertices.push(Vertex {
            label,
            index: vertex_idx,
        });

        vertex_idx
    }

    /// Sets the weight of the directed edge `from -> to`. A `None` weight removes the edge.
    ///
    /// **Panics** if the source or target vertex does not exist
    /// **Panics** if the weight is not finite
    pub fn add_directed_edge(&mut self, from: VertexIndex, to: VertexIndex, weight: Option<Weight>) {
        assert!(
            from.index() < self.vertices.len(),
            "Source vertex index ({}) does not exist",
            from.index()
        );
        assert!(
            to.index() < self.vertices.len(),
            "Target vertex index ({}) does not exist",
            to.index()
        );
        if let Some(weight) = weight {
            assert!(weight.is_finite(), "Edge weight ({}) is not finite", weight);
        }

        self.matrix[from.index()][to.index()] = weight;
    }

    /// Add a new `edge` to the graph, replacing the weight of an existing one.
    pub fn add_edge(&mut self, edge: Edge) {
        self.add_directed_edge(edge.source, edge.target, Some(edge.weight));
    }

    pub fn add_edges(&mut self, edges: Vec<Edge>) {
        for edge in edges {
            self.add_edge(edge);
        }
    }

    pub fn weight(&self, from: VertexIndex, to: VertexIndex) -> Option<Weight> {
        self.matrix.get(from.index())?.get(to.index()).copied().flatten()
    }

    pub fn find_vertex<Q>(&self, label: &Q) -> Option<VertexIndex>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.label_index.get(label).copied()
    }

    pub fn vertex(&self, vertex_idx: VertexIndex) -> Option<&Vertex<L>> {
        self.vertices.get(vertex_idx.index())
    }

    /// Returns an iterator over all vertices in index order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<L>> {
        self.vertices.iter()
    }

    /// Returns an iterator over all edges of the graph.
    ///
    /// The order is fixed: outer loop over the source index, inner loop over the target
    /// index, both ascending. Relaxation order and therefore tie-breaking depend on it.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.matrix.iter().enumerate().flat_map(|(from, row)| {
            row.iter().enumerate().filter_map(move |(to, weight)| {
                weight.map(|weight| Edge::new(VertexIndex::new(from), VertexIndex::new(to), weight))
            })
        })
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.matrix.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    pub fn print_info(&self) {
        println!(
            "Graph:\t#Vertices: {}, #Edges: {}",
            self.num_vertices(),
            self.num_edges()
        );
        debug!("Matrix is {0}x{0}", self.matrix.len());
    }
}

impl<L: Clone + Eq + Hash> Default for Graph<L> {
    fn default() -> Self {
        Self::new()
    }
}

/// Macro to create a edge from source to target with a weight
///
/// edge!(0 , 1, 3.0) Returns edge in both directions
///
/// edge!(0 => 1, 3.0) Returns directed edge
#[macro_export]
macro_rules! edge {
    ($source:expr => $target:expr, $weight:expr) => {
        $crate::graph::Edge::new($source.into(), $target.into(), $weight)
    };
    ($source:expr , $target:expr, $weight:expr) => {
        vec![
            $crate::graph::Edge::new($source.into(), $target.into(), $weight),
            $crate::graph::Edge::new($target.into(), $source.into(), $weight),
        ]
    };
}
