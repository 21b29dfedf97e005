//! Pixel to geographic coordinate mapping.
//!
//! Handles conversion between pixel coordinates (surface space) and
//! geographic coordinates. The mapping is a placeholder equirectangular
//! stretch of the whole globe over the drawing surface, not a real map
//! projection:
//!
//! ```text
//! longitude = x / width * 360 - 180
//! latitude  = (1 - y / height) * 180 - 90     // Flip Y-axis
//! ```
//!
//! Pixels outside the surface are not clamped; they extrapolate linearly.

use std::fmt;

use waypointkit_core::{round_coordinate, GeoCoordinate, GeoError, PixelPoint};

/// Default surface width in pixels.
pub const DEFAULT_SURFACE_WIDTH: f64 = 800.0;
/// Default surface height in pixels.
pub const DEFAULT_SURFACE_HEIGHT: f64 = 600.0;

/// Maps drawing-surface pixels to longitude/latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoMapper {
    surface_width: f64,
    surface_height: f64,
}

impl GeoMapper {
    /// Creates a mapper for a surface of the given pixel dimensions.
    pub fn new(surface_width: f64, surface_height: f64) -> Result<Self, GeoError> {
        check_surface(surface_width, surface_height)?;
        Ok(Self {
            surface_width,
            surface_height,
        })
    }

    /// Gets the surface width.
    pub fn surface_width(&self) -> f64 {
        self.surface_width
    }

    /// Gets the surface height.
    pub fn surface_height(&self) -> f64 {
        self.surface_height
    }

    /// Sets the surface dimensions (typically called when the window resizes).
    pub fn set_surface_size(&mut self, width: f64, height: f64) -> Result<(), GeoError> {
        check_surface(width, height)?;
        self.surface_width = width;
        self.surface_height = height;
        Ok(())
    }

    /// Converts a pixel position to a geographic coordinate.
    ///
    /// Both components are rounded to 8 decimal digits. Non-finite pixel
    /// components are rejected.
    pub fn pixel_to_geo(&self, x: f64, y: f64) -> Result<GeoCoordinate, GeoError> {
        let pixel = PixelPoint::checked(x, y)?;
        let longitude = pixel.x / self.surface_width * 360.0 - 180.0;
        let latitude = (1.0 - pixel.y / self.surface_height) * 180.0 - 90.0;
        GeoCoordinate::new(round_coordinate(longitude), round_coordinate(latitude))
    }

    /// Converts a geographic coordinate back to a pixel position.
    ///
    /// Inverse of [`GeoMapper::pixel_to_geo`] up to the 8-digit rounding.
    pub fn geo_to_pixel(&self, coord: &GeoCoordinate) -> PixelPoint {
        let x = (coord.longitude() + 180.0) / 360.0 * self.surface_width;
        let y = (1.0 - (coord.latitude() + 90.0) / 180.0) * self.surface_height;
        PixelPoint::new(x, y)
    }
}

/// Maps a pixel on a `surface_width` x `surface_height` surface in one call.
pub fn map_pixel(
    x: f64,
    y: f64,
    surface_width: f64,
    surface_height: f64,
) -> Result<GeoCoordinate, GeoError> {
    GeoMapper::new(surface_width, surface_height)?.pixel_to_geo(x, y)
}

fn check_surface(width: f64, height: f64) -> Result<(), GeoError> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(GeoError::InvalidSurface { width, height })
    }
}

impl fmt::Display for GeoMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Surface: {:.0}x{:.0} px",
            self.surface_width, self.surface_height
        )
    }
}

impl Default for GeoMapper {
    fn default() -> Self {
        Self {
            surface_width: DEFAULT_SURFACE_WIDTH,
            surface_height: DEFAULT_SURFACE_HEIGHT,
        }
    }
}
