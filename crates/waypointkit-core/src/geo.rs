//! Geographic value types
//!
//! `GeoCoordinate` is the unit stored in waypoint sequences and polygon
//! drafts. Both components are guaranteed finite: every constructor
//! (including deserialization) rejects NaN and infinities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GeoError;

/// Number of decimal digits kept for stored and displayed coordinates.
pub const COORDINATE_DECIMALS: i32 = 8;

/// Rounds a coordinate component to [`COORDINATE_DECIMALS`] digits.
///
/// Magnitudes too large to scale are returned unchanged; they carry no
/// fractional digits at that precision anyway.
pub fn round_coordinate(value: f64) -> f64 {
    let scale = 10f64.powi(COORDINATE_DECIMALS);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

/// A longitude/latitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate", into = "RawCoordinate")]
pub struct GeoCoordinate {
    longitude: f64,
    latitude: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate, rejecting non-finite components.
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, GeoError> {
        Ok(Self {
            longitude: GeoError::check_finite("longitude", longitude)?,
            latitude: GeoError::check_finite("latitude", latitude)?,
        })
    }

    /// Longitude in decimal degrees, nominally [-180, 180].
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude in decimal degrees, nominally [-90, 90].
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = COORDINATE_DECIMALS as usize;
        write!(
            f,
            "{:.digits$}, {:.digits$}",
            self.longitude, self.latitude
        )
    }
}

#[derive(Serialize, Deserialize)]
struct RawCoordinate {
    longitude: f64,
    latitude: f64,
}

impl TryFrom<RawCoordinate> for GeoCoordinate {
    type Error = GeoError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        GeoCoordinate::new(raw.longitude, raw.latitude)
    }
}

impl From<GeoCoordinate> for RawCoordinate {
    fn from(coord: GeoCoordinate) -> Self {
        Self {
            longitude: coord.longitude,
            latitude: coord.latitude,
        }
    }
}

/// Drawing-surface position in pixels, (0,0) at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    /// Creates a new pixel point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a pixel point, rejecting non-finite components.
    pub fn checked(x: f64, y: f64) -> Result<Self, GeoError> {
        Ok(Self {
            x: GeoError::check_finite("x", x)?,
            y: GeoError::check_finite("y", y)?,
        })
    }
}

impl From<(f64, f64)> for PixelPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Great-circle distance formula used between waypoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMethod {
    /// Spherical law of cosines on the WGS-84 equatorial radius
    #[default]
    SphericalCosine,
    /// Haversine formula on the mean earth radius
    Haversine,
}

impl fmt::Display for DistanceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SphericalCosine => write!(f, "spherical_cosine"),
            Self::Haversine => write!(f, "haversine"),
        }
    }
}

impl FromStr for DistanceMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spherical_cosine" | "cosine" => Ok(Self::SphericalCosine),
            "haversine" => Ok(Self::Haversine),
            _ => Err(format!("Unknown distance method: {}", s)),
        }
    }
}
