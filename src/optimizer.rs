//! Route optimizer: validation, strategy selection and fallback.
//!
//! Destination counts up to [`OptimizerConfig::exact_limit`] are solved with
//! [`ExhaustiveSearch`]; larger inputs use [`HeuristicSearch`], which keeps
//! the same input/output contract but does not guarantee a minimal route.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::distance::DistanceUnit;
use crate::error::{InvalidInput, Result};
use crate::models::{Route, SearchMethod, Waypoint, WaypointId};
use crate::search::{
    ExhaustiveSearch, HeuristicSearch, RouteSearch, RoutingInstance, SearchContext,
};
use crate::termination::StopCondition;

/// Largest accepted [`OptimizerConfig::exact_limit`].
pub const MAX_EXACT_LIMIT: usize = 12;

/// Optimizer settings.
///
/// # Examples
///
/// ```
/// use geo_route::optimizer::OptimizerConfig;
///
/// let config = OptimizerConfig::default()
///     .with_exact_limit(6)
///     .with_time_limit_ms(250);
/// assert_eq!(config.exact_limit, 6);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Largest destination count solved exhaustively.
    pub exact_limit: usize,
    /// Destination count from which exhaustive search runs in parallel.
    pub parallel_threshold: usize,
    /// Run 2-opt and Or-opt after nearest-neighbor construction.
    pub local_search: bool,
    /// Wall-clock budget per optimization, in milliseconds.
    pub time_limit_ms: Option<u64>,
    /// Unit of reported distances.
    pub unit: DistanceUnit,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            exact_limit: 9,
            parallel_threshold: 8,
            local_search: true,
            time_limit_ms: None,
            unit: DistanceUnit::Kilometers,
        }
    }
}

impl OptimizerConfig {
    /// Sets the largest destination count solved exhaustively.
    pub fn with_exact_limit(mut self, limit: usize) -> Self {
        self.exact_limit = limit;
        self
    }

    /// Sets the destination count from which exhaustive search runs in parallel.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Enables or disables local search in the heuristic.
    pub fn with_local_search(mut self, enabled: bool) -> Self {
        self.local_search = enabled;
        self
    }

    /// Sets a per-call time budget.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Sets the reporting unit.
    pub fn with_unit(mut self, unit: DistanceUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Checks that the settings are usable.
    pub fn validate(&self) -> Result<()> {
        if self.exact_limit > MAX_EXACT_LIMIT {
            return Err(InvalidInput::ExactLimitTooLarge {
                limit: self.exact_limit,
                max: MAX_EXACT_LIMIT,
            }
            .into());
        }
        Ok(())
    }
}

/// Finds short visiting orders from a fixed origin.
///
/// # Examples
///
/// ```
/// use geo_route::models::{SearchMethod, Waypoint};
/// use geo_route::optimizer::{OptimizerConfig, RouteOptimizer};
///
/// let optimizer = RouteOptimizer::new(OptimizerConfig::default()).unwrap();
/// let origin = Waypoint::at("origin", 0.0, 0.0).unwrap();
/// let stops = vec![
///     Waypoint::at("a", 0.0, 1.0).unwrap(),
///     Waypoint::at("b", 0.0, 2.0).unwrap(),
///     Waypoint::at("c", 0.0, -1.0).unwrap(),
/// ];
/// let route = optimizer.optimize(&origin, &stops).unwrap();
/// assert_eq!(route.ids(), vec![&"origin", &"c", &"a", &"b"]);
/// assert_eq!(route.method(), SearchMethod::Exhaustive);
/// assert!(route.is_optimal());
/// ```
#[derive(Debug, Clone)]
pub struct RouteOptimizer {
    config: OptimizerConfig,
    exhaustive: ExhaustiveSearch,
    heuristic: HeuristicSearch,
}

impl RouteOptimizer {
    /// Creates an optimizer, rejecting invalid settings.
    pub fn new(config: OptimizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: OptimizerConfig) -> Self {
        let exhaustive = ExhaustiveSearch::new().with_parallel_threshold(config.parallel_threshold);
        let heuristic = HeuristicSearch::new().with_local_search(config.local_search);
        Self {
            config,
            exhaustive,
            heuristic,
        }
    }

    /// Active settings.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// The strategy used for `destinations` destinations.
    pub fn strategy_for(&self, destinations: usize) -> &dyn RouteSearch {
        if destinations <= self.config.exact_limit {
            &self.exhaustive
        } else {
            &self.heuristic
        }
    }

    /// Orders `destinations` after `origin`, minimizing total distance.
    ///
    /// Fails with [`RoutingError::InvalidInput`](crate::RoutingError::InvalidInput)
    /// if the origin is among the destinations, an identifier repeats, or a
    /// coordinate is out of range.
    pub fn optimize<Id: WaypointId>(
        &self,
        origin: &Waypoint<Id>,
        destinations: &[Waypoint<Id>],
    ) -> Result<Route<Id>> {
        self.optimize_until(origin, destinations, &StopCondition::never())
    }

    /// Like [`RouteOptimizer::optimize`], giving up early when `stop` fires.
    ///
    /// An exhaustive search cut short is compared with the heuristic route
    /// and the shorter one is returned, marked as not optimal.
    #[instrument(skip_all, fields(destinations = destinations.len()))]
    pub fn optimize_until<Id: WaypointId>(
        &self,
        origin: &Waypoint<Id>,
        destinations: &[Waypoint<Id>],
        stop: &StopCondition,
    ) -> Result<Route<Id>> {
        let instance = RoutingInstance::new(origin, destinations, self.config.unit)?;

        let stop = match self.config.time_limit_ms {
            Some(ms) => stop.clone().with_time_limit(Duration::from_millis(ms)),
            None => stop.clone(),
        };
        let ctx = SearchContext::new(instance.distances(), &stop);

        let strategy = self.strategy_for(instance.num_destinations());
        let mut method = strategy.method();
        debug!(?method, exact_limit = self.config.exact_limit, "selected strategy");

        let mut outcome = strategy.search_order(&ctx);
        if method == SearchMethod::Exhaustive && !outcome.optimal {
            warn!(
                distance = outcome.distance,
                "exhaustive search interrupted, comparing with heuristic"
            );
            let fallback = self.heuristic.search_order(&ctx);
            if fallback.distance < outcome.distance {
                outcome = fallback;
                method = SearchMethod::Heuristic;
            }
            outcome.optimal = false;
        }

        instance.into_route(outcome, method)
    }
}

impl Default for RouteOptimizer {
    fn default() -> Self {
        Self::from_valid(OptimizerConfig::default())
    }
}

/// Optimizes with the default configuration.
///
/// Exact for up to 9 destinations, heuristic beyond. Distances are in
/// kilometers.
///
/// # Examples
///
/// ```
/// use geo_route::{optimize, Waypoint};
///
/// let origin = Waypoint::at(0, 0.0, 0.0).unwrap();
/// let route = optimize(&origin, &[]).unwrap();
/// assert_eq!(route.ids(), vec![&0]);
/// assert_eq!(route.total_distance(), 0.0);
/// ```
pub fn optimize<Id: WaypointId>(
    origin: &Waypoint<Id>,
    destinations: &[Waypoint<Id>],
) -> Result<Route<Id>> {
    RouteOptimizer::default().optimize(origin, destinations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RoutingError;
    use crate::termination::CancellationToken;

    fn wp(id: &'static str, lat: f64, lon: f64) -> Waypoint<&'static str> {
        Waypoint::at(id, lat, lon).expect("valid")
    }

    fn ring(n: usize) -> Vec<Waypoint<usize>> {
        (1..=n)
            .map(|i| {
                let a = i as f64 * 0.9;
                Waypoint::at(i, a.sin() * 0.5, a.cos() * 0.5).expect("valid")
            })
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = OptimizerConfig::default();
        assert_eq!(config.exact_limit, 9);
        assert_eq!(config.parallel_threshold, 8);
        assert!(config.local_search);
        assert_eq!(config.time_limit_ms, None);
        assert_eq!(config.unit, DistanceUnit::Kilometers);
    }

    #[test]
    fn test_rejects_large_exact_limit() {
        let err = RouteOptimizer::new(OptimizerConfig::default().with_exact_limit(13)).unwrap_err();
        assert_eq!(
            err,
            RoutingError::InvalidInput(InvalidInput::ExactLimitTooLarge { limit: 13, max: 12 })
        );
    }

    #[test]
    fn test_strategy_selection() {
        let optimizer = RouteOptimizer::new(OptimizerConfig::default().with_exact_limit(4))
            .expect("valid config");
        assert_eq!(optimizer.strategy_for(4).method(), SearchMethod::Exhaustive);
        assert_eq!(optimizer.strategy_for(5).method(), SearchMethod::Heuristic);
    }

    #[test]
    fn test_empty_destinations() {
        let route = optimize(&wp("o", 1.0, 1.0), &[]).expect("valid");
        assert_eq!(route.ids(), vec![&"o"]);
        assert!(route.is_optimal());
    }

    #[test]
    fn test_single_destination() {
        let (o, d) = (wp("o", 0.0, 0.0), wp("d", 1.0, 1.0));
        let route = optimize(&o, &[d.clone()]).expect("valid");
        assert_eq!(route.ids(), vec![&"o", &"d"]);
        assert!((route.total_distance() - o.distance_to(&d)).abs() < 1e-9);
    }

    #[test]
    fn test_origin_in_destinations() {
        let dests = [wp("a", 0.0, 1.0), wp("o", 0.0, 0.0)];
        let err = optimize(&wp("o", 0.0, 0.0), &dests).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_duplicate_coordinates_allowed() {
        let route = optimize(
            &wp("o", 0.0, 0.0),
            &[wp("a", 0.0, 1.0), wp("b", 0.0, 1.0), wp("c", 0.0, 0.0)],
        )
        .expect("valid");
        assert_eq!(route.ids(), vec![&"o", &"c", &"a", &"b"]);
    }

    #[test]
    fn test_heuristic_above_limit() {
        let optimizer = RouteOptimizer::new(OptimizerConfig::default().with_exact_limit(3))
            .expect("valid config");
        let origin = Waypoint::at(0, 0.0, 0.0).expect("valid");
        let route = optimizer.optimize(&origin, &ring(10)).expect("valid");
        assert_eq!(route.method(), SearchMethod::Heuristic);
        assert!(!route.is_optimal());
        assert_eq!(route.len(), 11);
    }

    #[test]
    fn test_unit_applies_to_total() {
        let origin = Waypoint::at(0, 0.0, 0.0).expect("valid");
        let km = optimize(&origin, &ring(5)).expect("valid");
        let miles = RouteOptimizer::new(OptimizerConfig::default().with_unit(DistanceUnit::Miles))
            .expect("valid config")
            .optimize(&origin, &ring(5))
            .expect("valid");
        assert_eq!(km.ids(), miles.ids());
        assert_eq!(miles.unit(), DistanceUnit::Miles);
        assert!((miles.total_distance() - km.total_distance() * 0.621_371_192).abs() < 1e-6);
    }

    #[test]
    fn test_cancelled_exhaustive_is_not_optimal() {
        let origin = Waypoint::at(0, 0.0, 0.0).expect("valid");
        let token = CancellationToken::new();
        token.cancel();
        let stop = StopCondition::never().with_token(token);
        let optimizer = RouteOptimizer::new(OptimizerConfig::default().with_exact_limit(12))
            .expect("valid config");
        let route = optimizer
            .optimize_until(&origin, &ring(12), &stop)
            .expect("valid");
        assert_eq!(route.len(), 13);
        assert!(!route.is_optimal());

        // The walk stops at its first complete orders, which zig-zag around
        // the ring; the heuristic route replaces them.
        let instance =
            RoutingInstance::new(&origin, &ring(12), DistanceUnit::Kilometers).expect("valid");
        let partial = optimizer
            .exhaustive
            .search_order(&SearchContext::new(instance.distances(), &stop));
        assert!(!partial.optimal);
        assert_eq!(route.method(), SearchMethod::Heuristic);
        assert!(route.total_distance() < partial.distance);
    }

    #[test]
    fn test_zero_time_limit_still_returns_route() {
        let origin = Waypoint::at(0, 0.0, 0.0).expect("valid");
        let route = RouteOptimizer::new(
            OptimizerConfig::default()
                .with_exact_limit(12)
                .with_time_limit_ms(0),
        )
        .expect("valid config")
        .optimize(&origin, &ring(12))
        .expect("valid");
        assert_eq!(route.len(), 13);
        assert!(!route.is_optimal());
    }
}
