//! Cheapest flight route over a list of priced connections.
pub mod fix;
pub mod itinerary;
pub mod model;
pub mod planner;
pub mod source;
