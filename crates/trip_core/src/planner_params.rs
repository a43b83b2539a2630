//! Parameters for the route planner

/// Parameters for the route planner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerParams {
    /// Repair invalid coordinates before building the graph
    pub(crate) fix_coordinates: bool,
    /// Refuse to solve graphs with more vertices than this
    pub(crate) vertex_limit: Option<usize>,
}

impl PlannerParams {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn fix_coordinates(mut self, fix: bool) -> Self {
        self.fix_coordinates = fix;
        self
    }

    pub fn vertex_limit(mut self, limit: usize) -> Self {
        self.vertex_limit = Some(limit);
        self
    }
}

impl Default for PlannerParams {
    fn default() -> Self {
        PlannerParams {
            fix_coordinates: true,
            vertex_limit: None,
        }
    }
}
