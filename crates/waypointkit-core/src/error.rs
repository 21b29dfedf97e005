//! Error handling for WaypointKit
//!
//! Nothing in the planner fails under normal input: empty sequences,
//! out-of-range insertion rows and degenerate polygons all resolve to
//! no-ops or valid-but-degenerate results. The only rejected input is
//! numeric garbage reaching the geographic boundary:
//! - Non-finite pixel or coordinate components
//! - Drawing surfaces without a usable size
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geographic boundary error type
///
/// Raised when pixel positions or coordinates entering the model are not
/// finite numbers, so that NaN never propagates into stored waypoints.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    /// A numeric component was NaN or infinite
    #[error("Invalid input: {field} must be finite, got {value}")]
    InvalidInput {
        /// The name of the offending component.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The drawing surface has no usable size
    #[error("Invalid surface size {width}x{height}: dimensions must be finite and positive")]
    InvalidSurface {
        /// The rejected surface width in pixels.
        width: f64,
        /// The rejected surface height in pixels.
        height: f64,
    },
}

impl GeoError {
    /// Rejects `value` unless it is finite.
    pub fn check_finite(field: &'static str, value: f64) -> std::result::Result<f64, GeoError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(GeoError::InvalidInput { field, value })
        }
    }
}
