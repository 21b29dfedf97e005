//! # WaypointKit Core
//!
//! Core types and error definitions for WaypointKit.
//! Provides the geographic value types shared by the designer and
//! settings crates, and the error types used at their boundaries.

pub mod error;
pub mod geo;

pub use error::GeoError;

pub use geo::{round_coordinate, DistanceMethod, GeoCoordinate, PixelPoint, COORDINATE_DECIMALS};
