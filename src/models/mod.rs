//! Domain model types for route optimization.
//!
//! Provides geographic coordinates, waypoints with caller-defined
//! identifiers, and routes as ordered, origin-first visiting sequences.

mod coordinate;
mod route;
mod waypoint;

pub use coordinate::Coordinate;
pub use route::{Leg, Route, SearchMethod};
pub use waypoint::{Waypoint, WaypointId};
