//! Serializable optimization request.
//!
//! The shape accepted by the `ffi` and `wasm` entry points:
//!
//! ```json
//! {
//!   "origin": { "id": "depot", "latitude": 52.37, "longitude": 4.89 },
//!   "destinations": [
//!     { "id": "a", "latitude": 52.09, "longitude": 5.12 }
//!   ],
//!   "config": { "exact_limit": 8, "unit": "miles" }
//! }
//! ```
//!
//! `destinations` and `config` may be omitted.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Route, Waypoint};
use crate::optimizer::{OptimizerConfig, RouteOptimizer};

/// An origin, its destinations and optimizer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    /// Fixed starting waypoint.
    pub origin: Waypoint<String>,
    /// Waypoints to order.
    #[serde(default)]
    pub destinations: Vec<Waypoint<String>>,
    /// Optimizer settings; defaults apply to omitted fields.
    #[serde(default)]
    pub config: OptimizerConfig,
}

impl OptimizeRequest {
    /// Runs the optimizer described by this request.
    pub fn solve(&self) -> Result<Route<String>> {
        RouteOptimizer::new(self.config.clone())?.optimize(&self.origin, &self.destinations)
    }
}
