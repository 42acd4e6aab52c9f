//! Exact search over all visiting orders.
//!
//! # Algorithm
//!
//! Depth-first enumeration of permutations in lexicographic index order,
//! accumulating the open-path length left to right. A complete order
//! replaces the incumbent only if strictly shorter, so among equally short
//! orders the lexicographically first wins.
//!
//! A prefix whose length already reaches the incumbent is abandoned: legs
//! are non-negative, so no completion of it could be strictly shorter. The
//! result is identical to scoring every permutation.
//!
//! # Parallelism
//!
//! From `parallel_threshold` destinations on, the permutation space is split
//! by first destination and the shards run on the rayon pool. Shard minima
//! are reduced in shard order with the same strict comparison, which picks
//! the same order as the sequential search.
//!
//! # Complexity
//!
//! O(n!) worst case; pruning typically cuts this by orders of magnitude on
//! geographic inputs.

use rayon::prelude::*;
use tracing::debug;

use super::{RouteSearch, SearchContext, SearchOutcome, ORIGIN};
use crate::distance::DistanceMatrix;
use crate::models::SearchMethod;
use crate::termination::StopCondition;

/// Search nodes expanded between two stop-condition checks.
const POLL_INTERVAL: u64 = 4096;

/// Exact route search.
///
/// Finds a minimal open path from the origin through every destination.
/// Runtime grows factorially; stop it early through the context's
/// [`StopCondition`] to get the best order found so far.
///
/// # Examples
///
/// ```
/// use geo_route::distance::DistanceMatrix;
/// use geo_route::search::{ExhaustiveSearch, RouteSearch, SearchContext};
/// use geo_route::termination::StopCondition;
///
/// // Origin at 0, destinations at 2, 1 and -1 along a line.
/// let xs = [0.0_f64, 2.0, 1.0, -1.0];
/// let mut dm = DistanceMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         dm.set(i, j, (xs[i] - xs[j]).abs());
///     }
/// }
/// let stop = StopCondition::never();
/// let outcome = ExhaustiveSearch::new().search_order(&SearchContext::new(&dm, &stop));
/// assert_eq!(outcome.order, vec![3, 2, 1]);
/// assert!((outcome.distance - 4.0).abs() < 1e-10);
/// assert!(outcome.optimal);
/// ```
#[derive(Debug, Clone)]
pub struct ExhaustiveSearch {
    parallel_threshold: usize,
}

impl ExhaustiveSearch {
    /// Creates a sequential exhaustive search.
    pub fn new() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }

    /// Runs shards on the rayon pool once there are at least `threshold`
    /// destinations.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold.max(2);
        self
    }

    /// Destination count from which the search runs in parallel.
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    fn search_sequential(&self, ctx: &SearchContext<'_>) -> SearchOutcome {
        let mut walk = Enumeration::new(ctx.distances(), ctx.stop());
        walk.descend(0.0);
        walk.into_outcome()
    }

    fn search_parallel(&self, ctx: &SearchContext<'_>) -> SearchOutcome {
        let n = ctx.num_destinations();
        let distances = ctx.distances();
        let stop = ctx.stop();

        let shards: Vec<SearchOutcome> = (1..=n)
            .into_par_iter()
            .map(|first| {
                let mut walk = Enumeration::new(distances, stop);
                walk.visit(first);
                walk.descend(distances.get(ORIGIN, first));
                walk.into_outcome()
            })
            .collect();

        let interrupted = shards.iter().any(|s| !s.optimal);
        let mut best: Option<SearchOutcome> = None;
        for shard in shards {
            let better = match &best {
                Some(b) => shard.distance < b.distance,
                None => true,
            };
            if better {
                best = Some(shard);
            }
        }

        match best {
            Some(mut outcome) => {
                outcome.optimal = !interrupted;
                outcome
            }
            // n >= 2 here, so there is at least one shard.
            None => self.search_sequential(ctx),
        }
    }
}

impl Default for ExhaustiveSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteSearch for ExhaustiveSearch {
    fn method(&self) -> SearchMethod {
        SearchMethod::Exhaustive
    }

    fn search_order(&self, ctx: &SearchContext<'_>) -> SearchOutcome {
        let n = ctx.num_destinations();
        let outcome = if n >= self.parallel_threshold {
            self.search_parallel(ctx)
        } else {
            self.search_sequential(ctx)
        };
        debug!(
            destinations = n,
            distance = outcome.distance,
            optimal = outcome.optimal,
            "exhaustive search finished"
        );
        outcome
    }
}

/// State of one depth-first walk over permutations.
struct Enumeration<'a> {
    distances: &'a DistanceMatrix,
    stop: &'a StopCondition,
    n: usize,
    path: Vec<usize>,
    used: Vec<bool>,
    best_order: Vec<usize>,
    best_distance: f64,
    expanded: u64,
    next_poll: u64,
    interrupted: bool,
}

impl<'a> Enumeration<'a> {
    fn new(distances: &'a DistanceMatrix, stop: &'a StopCondition) -> Self {
        let n = distances.size().saturating_sub(1);
        Self {
            distances,
            stop,
            n,
            path: Vec::with_capacity(n),
            used: vec![false; n + 1],
            best_order: Vec::new(),
            best_distance: f64::INFINITY,
            expanded: 0,
            next_poll: 0,
            interrupted: false,
        }
    }

    fn visit(&mut self, next: usize) {
        self.used[next] = true;
        self.path.push(next);
    }

    fn unvisit(&mut self, next: usize) {
        self.path.pop();
        self.used[next] = false;
    }

    fn descend(&mut self, prefix: f64) {
        if self.path.len() == self.n {
            if prefix < self.best_distance {
                self.best_distance = prefix;
                self.best_order.clone_from(&self.path);
            }
            return;
        }
        if prefix >= self.best_distance {
            return;
        }

        // Only poll once a complete order exists, so an interrupted walk
        // always has something to return.
        self.expanded += 1;
        if self.best_distance.is_finite() && self.expanded >= self.next_poll {
            self.next_poll = self.expanded + POLL_INTERVAL;
            if self.stop.is_stopped() {
                self.interrupted = true;
                return;
            }
        }

        let last = self.path.last().copied().unwrap_or(ORIGIN);
        for next in 1..=self.n {
            if self.used[next] {
                continue;
            }
            self.visit(next);
            self.descend(prefix + self.distances.get(last, next));
            self.unvisit(next);
            if self.interrupted {
                return;
            }
        }
    }

    fn into_outcome(self) -> SearchOutcome {
        SearchOutcome {
            order: self.best_order,
            distance: if self.best_distance.is_finite() {
                self.best_distance
            } else {
                0.0
            },
            optimal: !self.interrupted,
        }
    }
}
