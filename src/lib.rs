//! # geo-route
//!
//! Fixed-origin route optimization over geographic waypoints: find the
//! visiting order that minimizes total great-circle distance from a start
//! point, without returning to it.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Coordinate, Waypoint, Route)
//! - [`distance`] — Haversine distance and distance matrix
//! - [`constructive`] — Nearest-neighbor construction
//! - [`local_search`] — Local search operators (2-opt, Or-opt)
//! - [`search`] — Exhaustive and heuristic route search strategies
//! - [`optimizer`] — Strategy selection by input size, configuration
//! - [`termination`] — Deadlines and cancellation
//! - [`request`] — Serializable request shape for the bindings
//!
//! ## Example
//!
//! ```
//! use geo_route::{optimize, Waypoint};
//!
//! let origin = Waypoint::at("office", 0.0, 0.0).unwrap();
//! let customers = vec![
//!     Waypoint::at("A", 0.0, 1.0).unwrap(),
//!     Waypoint::at("B", 0.0, 2.0).unwrap(),
//!     Waypoint::at("C", 0.0, -1.0).unwrap(),
//! ];
//! let route = optimize(&origin, &customers).unwrap();
//! assert_eq!(route.ids(), vec![&"office", &"C", &"A", &"B"]);
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod local_search;
pub mod models;
pub mod optimizer;
pub mod request;
pub mod search;
pub mod termination;

#[cfg(feature = "ffi")]
pub mod ffi;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use distance::distance;
pub use error::{InvalidInput, Result, RoutingError};
pub use models::{Coordinate, Route, Waypoint};
pub use optimizer::{optimize, OptimizerConfig, RouteOptimizer};
