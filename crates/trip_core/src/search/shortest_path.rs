use crate::{constants::Weight, graph::VertexIndex};

#[derive(Debug, PartialEq, Clone)]
pub struct ShortestPath {
    pub nodes: Vec<VertexIndex>,
    pub weight: Weight,
}

impl ShortestPath {
    pub fn new(nodes: Vec<VertexIndex>, weight: Weight) -> Self {
        ShortestPath { nodes, weight }
    }
}
