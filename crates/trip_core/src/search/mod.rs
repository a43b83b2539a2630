pub mod bellman_ford;
pub mod shortest_path;
pub mod solver_result;

pub use bellman_ford::BellmanFord;
pub use solver_result::SolverResult;

#[cfg(test)]
use crate::{constants::Weight, graph::VertexIndex};

#[cfg(test)]
use self::shortest_path::ShortestPath;

#[cfg(test)]
pub(crate) fn assert_no_path(path: Option<ShortestPath>) {
    assert_eq!(None, path);
}

#[cfg(test)]
pub(crate) fn assert_path(
    expected_path: Vec<usize>,
    expected_weight: Weight,
    path: Option<ShortestPath>,
) {
    let expected_path = expected_path.into_iter().map(VertexIndex::new).collect();
    assert_eq!(
        Some(ShortestPath::new(expected_path, expected_weight)),
        path
    );
}
