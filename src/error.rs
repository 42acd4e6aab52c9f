//! Error types.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RoutingError>;

/// Errors returned by route optimization.
///
/// Geometry never fails for valid coordinates. Input problems are reported
/// before any search work begins; a strategy that breaks the ordering
/// contract is caught before a route is assembled.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// Malformed or contradictory arguments.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
    /// A search strategy returned something other than a permutation of
    /// `1..=destinations`.
    #[error("search returned order {order:?}, expected each of 1..={destinations} exactly once")]
    InvalidOrder {
        /// Number of destinations to order.
        destinations: usize,
        /// The rejected order.
        order: Vec<usize>,
    },
}

impl RoutingError {
    /// Returns `true` for [`RoutingError::InvalidInput`].
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, RoutingError::InvalidInput(_))
    }
}

/// The specific reason an input was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    /// The origin's identifier also appears among the destinations.
    #[error("origin {id} is also listed as a destination")]
    OriginInDestinations {
        /// Debug rendering of the offending identifier.
        id: String,
    },
    /// Two destinations share an identifier.
    #[error("waypoint {id} is listed more than once")]
    DuplicateWaypoint {
        /// Debug rendering of the duplicated identifier.
        id: String,
    },
    /// Latitude or longitude is non-finite or outside its geographic range.
    #[error("coordinate ({latitude}, {longitude}) is outside the valid geographic range")]
    CoordinateOutOfRange {
        /// Rejected latitude in degrees.
        latitude: f64,
        /// Rejected longitude in degrees.
        longitude: f64,
    },
    /// Exhaustive search was configured beyond what it can finish.
    #[error("exact search limit {limit} exceeds the supported maximum of {max}")]
    ExactLimitTooLarge {
        /// Requested limit.
        limit: usize,
        /// Largest accepted limit.
        max: usize,
    },
}
