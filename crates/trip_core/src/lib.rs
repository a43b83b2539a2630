//! Crate to find the cheapest route through a list of priced connections.
//!
//! # Basic usage
//! ```no_run
//! use trip_core::prelude::*;
//! use std::path::Path;
//!
//! // Connections are read from a JSON or CSV file
//! let source = source::from_path(Path::new("path/to/connections.json"))
//!     .expect("Unsupported connection file");
//!
//! // The planner owns its source, nothing is read before `plan` is called
//! let planner = RoutePlanner::new(source);
//!
//! let plan = planner.plan("London", "Sydney").expect("Failed to plan route");
//! println!("Cost: {} via {:?}", plan.total, plan.stops);
//!```
//! [`RoutePlanner`]: crate::trip::planner::RoutePlanner
pub mod constants;
pub mod graph;
pub mod planner_params;
pub mod prelude;
pub mod search;
pub mod statistics;
pub mod trip;
pub mod util;
