//! Interactive trip planner over a connection file
use std::path::{Path, PathBuf};

use reedline_repl_rs::clap::{Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};
use rustc_hash::FxHashSet;
use trip_core::{
    prelude::*,
    trip::{fix::validate_and_fix, model::Connection},
};

/// Print dataset info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(format!(
        "Dataset has {} connections between {} locations",
        context.connections.len(),
        context.locations().len()
    )))
}

fn locations(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(context.locations().join("\n")))
}

fn route(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let from = args.get_one::<String>("from").map(String::as_str).unwrap_or_default();
    let to = args.get_one::<String>("to").map(String::as_str).unwrap_or_default();

    let now = std::time::Instant::now();
    let plan = cheapest_route(context.connections.clone(), from, to);
    let took = now.elapsed();

    let mut out = String::new();
    match plan.outcome {
        RouteOutcome::Found => {
            out.push_str(&format!("Cheapest: {}\n", plan.total));
            for stop in &plan.stops {
                out.push_str(&format!("{}\n", stop));
            }
            out.push_str(&format!(
                "{} legs, {:.0} km\n",
                plan.itinerary.len(),
                plan.itinerary.distance_km()
            ));
        }
        RouteOutcome::Unreachable => out.push_str("No route found\n"),
        RouteOutcome::NegativeCycle => out.push_str("Negative price cycle, no route\n"),
    }
    out.push_str(&format!("Took: {:?}", took));
    Ok(Some(out))
}

fn fix(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let mut connections = context.connections.clone();
    let report = validate_and_fix(&mut connections);
    Ok(Some(format!(
        "{} invalid coordinates, {} replaced, {} left as is",
        report.invalid,
        report.replaced,
        report.unresolved()
    )))
}

#[derive(Default)]
struct Context {
    connections: Vec<Connection>,
}

impl Context {
    fn new(connections: Vec<Connection>) -> Self {
        Self { connections }
    }

    /// Distinct location labels in order of first appearance
    fn locations(&self) -> Vec<String> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        self.connections
            .iter()
            .flat_map(|c| [c.from.as_str(), c.to.as_str()])
            .filter(|label| seen.insert(*label))
            .map(str::to_string)
            .collect()
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // Init dataset
    let path = std::env::args().nth(1).expect("No path to connection file given");
    let connections = source::from_path(Path::new(&path))
        .and_then(|source| source.connections())
        .expect("Failed to load connections");
    let context = Context::new(connections);

    let mut repl = Repl::new(context)
        .with_name("TripPlanner")
        .with_version("v0.1.0")
        .with_description("Simple REPL to plan the cheapest trip")
        .with_banner("Welcome to TripPlanner")
        .with_history(PathBuf::from(r".\history"), 100)
        .with_command(Command::new("info").about("Print dataset info"), info)
        .with_command(
            Command::new("locations").about("List all known locations"),
            locations,
        )
        .with_command(
            Command::new("route")
                .arg(Arg::new("from").required(true).help("Location to depart from"))
                .arg(Arg::new("to").required(true).help("Location to arrive at"))
                .about("Calculate the cheapest route using Bellman-Ford"),
            route,
        )
        .with_command(
            Command::new("fix").about("Report invalid coordinates and how many can be repaired"),
            fix,
        );

    repl.run()
}
