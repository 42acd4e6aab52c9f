//! Geographic coordinate type.

use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;

/// A latitude/longitude pair in decimal degrees.
///
/// Latitude must lie in `[-90, 90]` and longitude in `[-180, 180]`.
///
/// # Examples
///
/// ```
/// use geo_route::models::Coordinate;
///
/// let c = Coordinate::new(48.8566, 2.3522).unwrap();
/// assert_eq!(c.latitude(), 48.8566);
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Creates a validated coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidInput> {
        let c = Self {
            latitude,
            longitude,
        };
        if c.is_valid() {
            Ok(c)
        } else {
            Err(InvalidInput::CoordinateOutOfRange {
                latitude,
                longitude,
            })
        }
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns `true` if both components are finite and within range.
    ///
    /// Deserialized values bypass [`Coordinate::new`], so the optimizer
    /// re-checks every coordinate with this before searching.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Returns the coordinate as a `(latitude, longitude)` tuple.
    pub fn to_tuple(self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = InvalidInput;

    fn try_from((latitude, longitude): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(latitude, longitude)
    }
}
