use anyhow::Context;
use trip_core::{prelude::*, util::cli};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cfg = cli::parse();

    let source = source::from_path(&cfg.data_file)?;
    let planner = RoutePlanner::with_params(source, cfg.params);

    let now = std::time::Instant::now();
    let plan = planner.plan(&cfg.from, &cfg.to)?;
    let elapsed = now.elapsed();

    if cfg.json {
        let json = serde_json::to_string_pretty(&plan).context("Failed to serialize plan")?;
        println!("{}", json);
        return Ok(());
    }

    match plan.outcome {
        RouteOutcome::Found => {
            println!("Cheapest: {}", plan.total);
            println!("Stops: {}", plan.stops.join(" -> "));
            for (i, leg) in plan.itinerary.legs.iter().enumerate() {
                println!(
                    "{:>3}: ({:.4}, {:.4}) -> ({:.4}, {:.4}) {:.0} km",
                    i + 1,
                    leg.departure.lat,
                    leg.departure.long,
                    leg.arrival.lat,
                    leg.arrival.long,
                    leg.distance_km()
                );
            }
        }
        RouteOutcome::Unreachable => println!("No route from {} to {}", cfg.from, cfg.to),
        RouteOutcome::NegativeCycle => {
            println!("Prices contain a negative cycle, no cheapest route exists")
        }
    }

    println!(
        "Planned over {} locations in {}.{:03} seconds",
        plan.locations.len(),
        elapsed.as_secs(),
        elapsed.subsec_millis()
    );
    Ok(())
}
