//! Great-circle distance on a spherical Earth.
//!
//! # Formula
//!
//! ```text
//! h = sin²(Δφ/2) + cos φ1 · cos φ2 · sin²(Δλ/2)
//! d = 2R · asin(√h)
//! ```
//!
//! with φ latitude, λ longitude (radians) and R the mean Earth radius.
//!
//! # Reference
//!
//! Sinnott, R.W. (1984). "Virtues of the Haversine", *Sky and Telescope* 68(2), 159.

use serde::{Deserialize, Serialize};

use crate::models::Coordinate;

/// Mean Earth radius (IUGG), in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Unit in which distances are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    /// Kilometers.
    #[default]
    Kilometers,
    /// Meters.
    Meters,
    /// Statute miles.
    Miles,
    /// Nautical miles.
    NauticalMiles,
}

impl DistanceUnit {
    /// Number of this unit in one kilometer.
    pub fn per_kilometer(self) -> f64 {
        match self {
            DistanceUnit::Kilometers => 1.0,
            DistanceUnit::Meters => 1000.0,
            DistanceUnit::Miles => 0.621_371_192,
            DistanceUnit::NauticalMiles => 0.539_956_803,
        }
    }
}

/// Great-circle distance between two coordinates, in kilometers.
///
/// Pure and symmetric; `distance(a, a)` is exactly zero.
///
/// # Examples
///
/// ```
/// use geo_route::distance::distance;
/// use geo_route::models::Coordinate;
///
/// let lyon = Coordinate::new(45.7597, 4.8422).unwrap();
/// let paris = Coordinate::new(48.8567, 2.3508).unwrap();
/// assert!((distance(lyon, paris) - 392.2).abs() < 0.5);
/// ```
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let (lat1, lon1) = (a.latitude().to_radians(), a.longitude().to_radians());
    let (lat2, lon2) = (b.latitude().to_radians(), b.longitude().to_radians());

    let half_dlat = ((lat2 - lat1) * 0.5).sin();
    let half_dlon = ((lon2 - lon1) * 0.5).sin();
    let h = half_dlat * half_dlat + lat1.cos() * lat2.cos() * half_dlon * half_dlon;

    // Rounding can push h marginally above 1 for antipodal points.
    2.0 * EARTH_RADIUS_KM * h.clamp(0.0, 1.0).sqrt().asin()
}

/// Great-circle distance expressed in the given unit.
pub fn distance_in(a: Coordinate, b: Coordinate, unit: DistanceUnit) -> f64 {
    distance(a, b) * unit.per_kilometer()
}
