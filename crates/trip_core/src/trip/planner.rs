//! Turns a connection list into a graph, solves it and converts the cheapest path into
//! an itinerary.
use anyhow::{bail, Context};
use log::{debug, info, warn};
use rustc_hash::FxHashSet;
use serde::Serialize;

use super::{
    fix::validate_and_fix,
    itinerary::Itinerary,
    model::Connection,
    source::ConnectionSource,
};
use crate::{
    constants::Weight,
    graph::{Graph, VertexIndex},
    planner_params::PlannerParams,
    search::BellmanFord,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RouteOutcome {
    Found,
    Unreachable,
    NegativeCycle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripPlan {
    /// Cheapest total price, 0 if no route was found. Check `outcome` to tell a free
    /// route from a missing one.
    pub total: Weight,
    pub itinerary: Itinerary,
    /// Location labels along the route, source first
    pub stops: Vec<String>,
    /// Every location known to the graph in vertex order
    pub locations: Vec<String>,
    pub outcome: RouteOutcome,
}

impl TripPlan {
    fn without_route(outcome: RouteOutcome, locations: Vec<String>) -> Self {
        TripPlan {
            total: 0.0,
            itinerary: Itinerary::default(),
            stops: Vec::new(),
            locations,
            outcome,
        }
    }

    pub fn is_found(&self) -> bool {
        self.outcome == RouteOutcome::Found
    }
}

/// Graph over location labels. Each vertex keeps the connection it was first created from,
/// flipped if the label was on the arriving side, so its `coordinates.from` is the
/// location of the vertex itself.
struct StopGraph {
    graph: Graph<String>,
    holders: Vec<Option<Connection>>,
    source: VertexIndex,
    destination: VertexIndex,
}

impl StopGraph {
    fn build(connections: &[Connection], from: &str, dest: &str) -> Self {
        let mut stops = StopGraph {
            graph: Graph::with_capacity(connections.len() * 2 + 2),
            holders: Vec::new(),
            source: VertexIndex::end(),
            destination: VertexIndex::end(),
        };

        for c in connections {
            if !c.price.is_finite() {
                warn!("Skipping {} -> {}: price {} is not finite", c.from, c.to, c.price);
                continue;
            }
            let from_vertex = stops.stop(&c.from, || Some(c.clone()));
            let to_vertex = stops.stop(&c.to, || Some(c.swapped()));
            stops.graph.add_directed_edge(from_vertex, to_vertex, Some(c.price));
            stops.graph.add_directed_edge(to_vertex, from_vertex, Some(c.price));
            debug!("{} -> {}: {}", c.from, c.to, c.price);
        }

        // Unknown endpoints still get a vertex, they just stay unreached
        stops.source = stops.stop(from, || None);
        stops.destination = stops.stop(dest, || None);

        stops
    }

    fn stop(&mut self, label: &str, holder: impl FnOnce() -> Option<Connection>) -> VertexIndex {
        let vertex_idx = self.graph.create_vertex(label.to_string());
        if vertex_idx.index() == self.holders.len() {
            self.holders.push(holder());
        }
        vertex_idx
    }

    fn holder(&self, vertex_idx: VertexIndex) -> Option<&Connection> {
        self.holders.get(vertex_idx.index())?.as_ref()
    }

    fn label(&self, vertex_idx: VertexIndex) -> Option<String> {
        self.graph.vertex(vertex_idx).map(|v| v.label.clone())
    }

    fn route(&self) -> TripPlan {
        let locations: Vec<String> = self.graph.vertices().map(|v| v.label.clone()).collect();

        let mut bf = BellmanFord::new(&self.graph);
        let result = match bf.run(self.source) {
            Some(result) => result,
            None => {
                warn!("Negative price cycle, no route can be trusted");
                return TripPlan::without_route(RouteOutcome::NegativeCycle, locations);
            }
        };

        let path = match result.path_to(self.destination) {
            Some(path) => path,
            None => {
                info!(
                    "No route from {:?} to {:?}",
                    self.label(self.source),
                    self.label(self.destination)
                );
                return TripPlan::without_route(RouteOutcome::Unreachable, locations);
            }
        };

        let total = result.distance_to(self.destination).unwrap_or(0.0);
        let stops: Vec<String> = path.iter().filter_map(|v| self.label(*v)).collect();
        let itinerary = self.itinerary(&path);

        info!(
            "Cheapest route {} for {} with {} legs",
            stops.join(" -> "),
            total,
            itinerary.len()
        );

        TripPlan {
            total,
            itinerary,
            stops,
            locations,
            outcome: RouteOutcome::Found,
        }
    }

    fn itinerary(&self, path: &[VertexIndex]) -> Itinerary {
        let mut fare_sum = 0.0;
        let mut points = Vec::with_capacity(path.len() + 1);

        for vertex_idx in path {
            if let Some(c) = self.holder(*vertex_idx) {
                fare_sum += c.price;
                points.push(c.coordinates.from);
            }
        }

        // An odd number of points repeats the last one, which adds a zero length leg.
        // Kept as is until someone decides the final leg should go.
        if points.len() % 2 > 0 {
            if let Some(c) = path.last().and_then(|v| self.holder(*v)) {
                points.push(c.coordinates.from);
            }
        }

        debug!("Fares of the stop connections add up to {}", fare_sum);
        Itinerary::from_points(&points)
    }
}

/// Number of vertices `StopGraph::build` would create, counted without building it.
fn count_locations(connections: &[Connection], from: &str, dest: &str) -> usize {
    let mut labels: FxHashSet<&str> = connections
        .iter()
        .filter(|c| c.price.is_finite())
        .flat_map(|c| [c.from.as_str(), c.to.as_str()])
        .collect();
    labels.insert(from);
    labels.insert(dest);
    labels.len()
}

/// Cheapest route from `from` to `dest` with default parameters.
pub fn cheapest_route(mut connections: Vec<Connection>, from: &str, dest: &str) -> TripPlan {
    validate_and_fix(&mut connections);
    StopGraph::build(&connections, from, dest).route()
}

/// Route planner over an injected connection source.
pub struct RoutePlanner<S> {
    source: S,
    params: PlannerParams,
}

impl<S: ConnectionSource> RoutePlanner<S> {
    pub fn new(source: S) -> Self {
        Self::with_params(source, PlannerParams::default())
    }

    pub fn with_params(source: S, params: PlannerParams) -> Self {
        RoutePlanner { source, params }
    }

    pub fn params(&self) -> &PlannerParams {
        &self.params
    }

    pub fn plan(&self, from: &str, dest: &str) -> anyhow::Result<TripPlan> {
        let mut connections = self
            .source
            .connections()
            .context("Failed to load connections")?;

        if self.params.fix_coordinates {
            validate_and_fix(&mut connections);
        }

        if let Some(limit) = self.params.vertex_limit {
            let num_vertices = count_locations(&connections, from, dest);
            if num_vertices > limit {
                bail!(
                    "Graph has {} locations, more than the limit of {}",
                    num_vertices,
                    limit
                );
            }
        }

        Ok(StopGraph::build(&connections, from, dest).route())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        trip::{itinerary::Leg, model::LatLong, source::JsonFile},
        util::test_graphs::test_data,
    };

    const LONDON: LatLong = LatLong {
        lat: 51.5285582,
        long: -0.241681,
    };
    const TOKYO: LatLong = LatLong {
        lat: 35.652832,
        long: 139.839478,
    };
    const PORTO: LatLong = LatLong {
        lat: 41.14961,
        long: -8.61099,
    };
    const SYDNEY: LatLong = LatLong {
        lat: -33.865143,
        long: 151.2099,
    };

    fn init_log() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn sample_planner() -> RoutePlanner<JsonFile> {
        RoutePlanner::new(JsonFile::new(test_data("connections.json")))
    }

    fn leg(departure: LatLong, arrival: LatLong) -> Leg {
        Leg { departure, arrival }
    }

    #[test]
    fn odd_number_of_stops_repeats_last_point() {
        init_log();
        let plan = sample_planner().plan("London", "Sydney").unwrap();

        assert_eq!(plan.outcome, RouteOutcome::Found);
        assert_abs_diff_eq!(plan.total, 300.0);
        assert_eq!(plan.stops, vec!["London", "Tokyo", "Sydney"]);
        assert_eq!(
            plan.itinerary.legs,
            vec![
                leg(LONDON, TOKYO),
                leg(TOKYO, SYDNEY),
                leg(SYDNEY, SYDNEY)
            ]
        );
    }

    #[test]
    fn even_number_of_stops() {
        init_log();
        let plan = sample_planner().plan("London", "Porto").unwrap();

        assert_abs_diff_eq!(plan.total, 50.0);
        assert_eq!(plan.stops, vec!["London", "Porto"]);
        assert_eq!(plan.itinerary.legs, vec![leg(LONDON, PORTO)]);
    }

    #[test]
    fn route_through_arriving_side() {
        // Porto only appears as a destination, the flight back uses the reverse edge
        let plan = sample_planner().plan("Porto", "Tokyo").unwrap();

        assert_abs_diff_eq!(plan.total, 250.0);
        assert_eq!(plan.stops, vec!["Porto", "London", "Tokyo"]);
        assert_eq!(plan.itinerary.legs[0], leg(PORTO, LONDON));
    }

    #[test]
    fn later_connection_overwrites_price() {
        // London -> Tokyo is listed at 220 and Tokyo -> London at 200, both directions end at 200
        let plan = sample_planner().plan("London", "Tokyo").unwrap();
        assert_abs_diff_eq!(plan.total, 200.0);

        let plan = sample_planner().plan("Tokyo", "London").unwrap();
        assert_abs_diff_eq!(plan.total, 200.0);
    }

    #[test]
    fn locations_in_vertex_order() {
        let plan = sample_planner().plan("London", "Porto").unwrap();

        assert_eq!(
            plan.locations,
            vec![
                "London",
                "Tokyo",
                "Porto",
                "Sydney",
                "Cape Town",
                "New York",
                "Los Angeles"
            ]
        );
    }

    #[test]
    fn unknown_destination() {
        init_log();
        let plan = sample_planner().plan("London", "Atlantis").unwrap();

        assert_eq!(plan.outcome, RouteOutcome::Unreachable);
        assert!(!plan.is_found());
        assert_eq!(plan.total, 0.0);
        assert!(plan.itinerary.is_empty());
        assert!(plan.stops.is_empty());
        assert_eq!(plan.locations.len(), 8);
        assert_eq!(plan.locations.last().map(String::as_str), Some("Atlantis"));
    }

    #[test]
    fn both_endpoints_unknown() {
        let plan = cheapest_route(Vec::new(), "Atlantis", "El Dorado");

        assert_eq!(plan.outcome, RouteOutcome::Unreachable);
        assert_eq!(plan.locations, vec!["Atlantis", "El Dorado"]);
    }

    #[test]
    fn same_source_and_destination() {
        let plan = sample_planner().plan("London", "London").unwrap();

        assert!(plan.is_found());
        assert_eq!(plan.total, 0.0);
        assert_eq!(plan.stops, vec!["London"]);
        assert_eq!(plan.itinerary.legs, vec![leg(LONDON, LONDON)]);
    }

    #[test]
    fn free_route_is_not_missing_route() {
        let connections = vec![Connection::new("Porto", "Lisbon", 0.0, PORTO, LONDON)];

        let free = cheapest_route(connections.clone(), "Porto", "Lisbon");
        let missing = cheapest_route(connections, "Porto", "Madrid");

        assert_eq!(free.total, missing.total);
        assert_eq!(free.outcome, RouteOutcome::Found);
        assert_eq!(missing.outcome, RouteOutcome::Unreachable);
    }

    #[test]
    fn negative_price_is_a_cycle() {
        init_log();
        // Every connection is bidirectional, so one negative price is already a cycle
        let connections = vec![
            Connection::new("London", "Porto", 50.0, LONDON, PORTO),
            Connection::new("Porto", "Tokyo", -10.0, PORTO, TOKYO),
        ];

        let plan = RoutePlanner::new(connections).plan("London", "Tokyo").unwrap();

        assert_eq!(plan.outcome, RouteOutcome::NegativeCycle);
        assert_eq!(plan.total, 0.0);
        assert!(plan.itinerary.is_empty());
    }

    #[test]
    fn non_finite_price_skipped() {
        let connections = vec![
            Connection::new("London", "Porto", f64::NAN, LONDON, PORTO),
            Connection::new("London", "Tokyo", 200.0, LONDON, TOKYO),
        ];

        let plan = cheapest_route(connections, "London", "Tokyo");

        assert_abs_diff_eq!(plan.total, 200.0);
        assert_eq!(plan.locations, vec!["London", "Tokyo"]);
    }

    #[test]
    fn invalid_coordinates_fixed_before_routing() {
        init_log();
        let planner = RoutePlanner::new(JsonFile::new(test_data("invalid_coordinates.json")));
        let plan = planner.plan("London", "Tokyo").unwrap();

        assert_eq!(plan.itinerary.legs[0], leg(LONDON, TOKYO));
    }

    #[test]
    fn raw_coordinates_kept_without_fix() {
        let planner = RoutePlanner::with_params(
            JsonFile::new(test_data("invalid_coordinates.json")),
            PlannerParams::new().fix_coordinates(false),
        );
        let plan = planner.plan("London", "Tokyo").unwrap();

        assert_eq!(plan.itinerary.legs[0].departure.lat, -999.0);
    }

    #[test]
    fn vertex_limit() {
        let planner = RoutePlanner::with_params(
            JsonFile::new(test_data("connections.json")),
            PlannerParams::new().vertex_limit(3),
        );

        let err = planner.plan("London", "Porto").unwrap_err();
        assert!(err.to_string().contains("more than the limit of 3"));
    }

    #[test]
    fn load_error_propagates() {
        let planner = RoutePlanner::new(JsonFile::new(test_data("missing.json")));
        let err = planner.plan("London", "Porto").unwrap_err();
        assert!(err.to_string().contains("Failed to load connections"));
    }

    #[test]
    fn location_count_matches_built_graph() {
        let connections = JsonFile::new(test_data("connections.json"))
            .connections()
            .unwrap();
        for (from, dest) in [("London", "Sydney"), ("Porto", "Atlantis"), ("Nowhere", "Atlantis")] {
            let stops = StopGraph::build(&connections, from, dest);
            assert_eq!(
                count_locations(&connections, from, dest),
                stops.graph.num_vertices()
            );
        }

        let mut with_nan = connections.clone();
        with_nan.push(Connection::new(
            "Lima",
            "Quito",
            Weight::NAN,
            LONDON,
            PORTO,
        ));
        assert_eq!(
            count_locations(&with_nan, "London", "Sydney"),
            StopGraph::build(&with_nan, "London", "Sydney").graph.num_vertices()
        );
    }

    #[test]
    fn oversized_input_refused_before_building() {
        // Large enough that building the matrix first would take gigabytes
        let connections: Vec<Connection> = (0..20_000)
            .map(|i| {
                Connection::new(
                    &format!("from-{}", i),
                    &format!("to-{}", i),
                    1.0,
                    LONDON,
                    TOKYO,
                )
            })
            .collect();
        assert_eq!(count_locations(&connections, "from-0", "to-0"), 40_000);

        let planner =
            RoutePlanner::with_params(connections, PlannerParams::new().vertex_limit(10));
        let err = planner.plan("from-0", "to-0").unwrap_err();
        assert!(err
            .to_string()
            .contains("40000 locations, more than the limit of 10"));
    }
}
