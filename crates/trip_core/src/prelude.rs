//! Re-exports of the most commonly used items in `trip_core`.
pub use crate::planner_params::PlannerParams;
pub use crate::trip::planner::{cheapest_route, RouteOutcome, RoutePlanner, TripPlan};
pub use crate::trip::source::{self, ConnectionSource};

pub use crate::search;
pub use crate::search::BellmanFord;

pub use crate::graph::vertex_index;
pub use crate::graph::Graph;
pub use crate::util::test_graphs::generate_negative_weight_graph;
