//! Distance between geographic coordinates.
//!
//! The default method is the spherical law of cosines on the WGS-84
//! equatorial radius, rounded to whole metres. The haversine variant goes
//! through the `geo` crate.

use geo::{HaversineDistance, Point as GeoPoint};
use waypointkit_core::{DistanceMethod, GeoCoordinate};

/// Sphere radius used by [`DistanceMethod::SphericalCosine`], in metres.
pub const EARTH_RADIUS_METERS: f64 = 6_378_137.0;

/// Default rounding step for reported distances, in metres.
pub const DEFAULT_ACCURACY_METERS: f64 = 1.0;

/// Computes rounded distances between coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceCalculator {
    method: DistanceMethod,
    accuracy: f64,
}

impl DistanceCalculator {
    /// Creates a calculator.
    ///
    /// `accuracy` is the rounding step in metres. Non-positive or non-finite
    /// values fall back to [`DEFAULT_ACCURACY_METERS`].
    pub fn new(method: DistanceMethod, accuracy: f64) -> Self {
        let accuracy = if accuracy.is_finite() && accuracy > 0.0 {
            accuracy
        } else {
            tracing::warn!(
                "Distance accuracy {} is not usable, falling back to {} m",
                accuracy,
                DEFAULT_ACCURACY_METERS
            );
            DEFAULT_ACCURACY_METERS
        };
        Self { method, accuracy }
    }

    /// Gets the distance method.
    pub fn method(&self) -> DistanceMethod {
        self.method
    }

    /// Gets the rounding step in metres.
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    /// Distance in metres between `a` and `b`, or 0 when either is absent.
    ///
    /// The absent case covers the first point of a sequence, which has no
    /// predecessor.
    pub fn between(&self, a: Option<&GeoCoordinate>, b: Option<&GeoCoordinate>) -> f64 {
        match (a, b) {
            (Some(a), Some(b)) => self.distance(a, b),
            _ => 0.0,
        }
    }

    /// Distance in metres between two coordinates.
    pub fn distance(&self, a: &GeoCoordinate, b: &GeoCoordinate) -> f64 {
        let raw = match self.method {
            DistanceMethod::SphericalCosine => spherical_cosine(a, b),
            DistanceMethod::Haversine => haversine(a, b),
        };
        (raw / self.accuracy).round() * self.accuracy
    }
}

impl Default for DistanceCalculator {
    fn default() -> Self {
        Self {
            method: DistanceMethod::default(),
            accuracy: DEFAULT_ACCURACY_METERS,
        }
    }
}

fn spherical_cosine(a: &GeoCoordinate, b: &GeoCoordinate) -> f64 {
    let lat_a = a.latitude().to_radians();
    let lat_b = b.latitude().to_radians();
    // abs() keeps the argument identical for (a, b) and (b, a)
    let delta_lon = (a.longitude() - b.longitude()).abs().to_radians();

    let cos_angle = lat_a.sin() * lat_b.sin() + lat_a.cos() * lat_b.cos() * delta_lon.cos();
    // Rounding can push the cosine just outside [-1, 1]
    cos_angle.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_METERS
}

fn haversine(a: &GeoCoordinate, b: &GeoCoordinate) -> f64 {
    let from = GeoPoint::new(a.longitude(), a.latitude());
    let to = GeoPoint::new(b.longitude(), b.latitude());
    from.haversine_distance(&to)
}

/// Distance between two coordinates using the default calculator.
pub fn distance(a: Option<&GeoCoordinate>, b: Option<&GeoCoordinate>) -> f64 {
    DistanceCalculator::default().between(a, b)
}
