use std::path::PathBuf;

use clap::Parser;

use crate::planner_params::PlannerParams;

#[derive(Parser)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    /// Path to the .json or .csv connection file
    data_file: String,

    /// Location to depart from
    #[arg(short, long)]
    from: String,

    /// Location to arrive at
    #[arg(short, long)]
    to: String,

    /// If set invalid coordinates are not repaired
    #[arg(long, default_value = "false")]
    raw: bool,

    /// Refuse to plan on graphs with more locations than this
    #[arg(short, long, value_name = "count")]
    max_vertices: Option<usize>,

    /// Print the plan as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub data_file: PathBuf,
    pub from: String,
    pub to: String,
    pub params: PlannerParams,
    pub json: bool,
}

pub fn parse() -> Cfg {
    from_cli(Cli::parse())
}

fn from_cli(cli: Cli) -> Cfg {
    let mut params = PlannerParams::new().fix_coordinates(!cli.raw);

    if let Some(limit) = cli.max_vertices {
        params = params.vertex_limit(limit);
    }

    Cfg {
        data_file: PathBuf::from(cli.data_file),
        from: cli.from,
        to: cli.to,
        params,
        json: cli.json,
    }
}
