//! Rendering collaborator for the drawing surface.
//!
//! The planner never draws. It hands out immutable [`RenderFrame`]s and
//! callers pass them to a [`Renderer`]. [`RasterRenderer`] is the stock
//! implementation: it redraws the mock map grid and the path into a
//! tiny-skia pixmap that can be exported as an image.

use std::path::Path;

use image::{Rgb, RgbImage};
use thiserror::Error;
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};
use waypointkit_core::PixelPoint;

/// Default spacing of the background grid, in pixels.
pub const DEFAULT_GRID_SPACING: u32 = 50;

const PATH_WIDTH: f32 = 2.0;
const POINT_RADIUS: f32 = 5.0;

fn bg_color() -> Color {
    Color::from_rgba8(0xf0, 0xf0, 0xf0, 255)
}
fn grid_color() -> Color {
    Color::from_rgba8(0xdd, 0xdd, 0xdd, 255)
}
fn path_color() -> Color {
    Color::from_rgba8(0x19, 0x76, 0xd2, 255)
}
fn committed_color() -> Color {
    Color::from_rgba8(0x90, 0xca, 0xf9, 255)
}

/// Errors raised by the raster renderer.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The pixmap could not be allocated.
    #[error("Cannot allocate a {width}x{height} surface")]
    Surface { width: u32, height: u32 },

    /// Encoding or writing the image failed.
    #[error("Image export failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Everything a renderer needs to redraw the surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderFrame {
    /// Committed waypoints projected back onto the surface.
    pub committed: Vec<PixelPoint>,
    /// Pixels clicked in the current drawing act.
    pub in_progress: Vec<PixelPoint>,
    /// Join the last in-progress point back to the first.
    pub close_loop: bool,
}

/// Consumer of render frames. Must not feed back into the planner.
pub trait Renderer {
    fn redraw(&mut self, frame: &RenderFrame);
}

impl<F> Renderer for F
where
    F: FnMut(&RenderFrame),
{
    fn redraw(&mut self, frame: &RenderFrame) {
        self(frame)
    }
}

/// Renderer that ignores every frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn redraw(&mut self, _frame: &RenderFrame) {}
}

/// Software renderer backed by a tiny-skia pixmap.
pub struct RasterRenderer {
    pixmap: Pixmap,
    grid_spacing: u32,
    frames_drawn: usize,
}

impl RasterRenderer {
    /// Creates a renderer for a `width` x `height` surface.
    pub fn new(width: u32, height: u32, grid_spacing: u32) -> Result<Self, RenderError> {
        let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::Surface { width, height })?;
        pixmap.fill(bg_color());
        Ok(Self {
            pixmap,
            grid_spacing: grid_spacing.max(1),
            frames_drawn: 0,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Number of frames drawn so far.
    pub fn frames_drawn(&self) -> usize {
        self.frames_drawn
    }

    /// RGB color of the pixel at (x, y), if inside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some([color.red(), color.green(), color.blue()])
    }

    /// Current surface contents as an RGB image.
    pub fn to_rgb_image(&self) -> RgbImage {
        let width = self.pixmap.width();
        let data = self.pixmap.data();
        RgbImage::from_fn(width, self.pixmap.height(), |x, y| {
            let idx = ((y * width + x) * 4) as usize;
            // Background is opaque, so premultiplied == straight RGB
            Rgb([data[idx], data[idx + 1], data[idx + 2]])
        })
    }

    /// Writes the current surface to an image file (format from extension).
    pub fn save(&self, path: &Path) -> Result<(), RenderError> {
        self.to_rgb_image().save(path)?;
        Ok(())
    }

    fn draw_grid(&mut self) {
        let mut paint = Paint::default();
        paint.set_color(grid_color());
        paint.anti_alias = false;
        let stroke = Stroke {
            width: 1.0,
            ..Default::default()
        };

        let (width, height) = (self.pixmap.width(), self.pixmap.height());
        let mut pb = PathBuilder::new();
        // Half-pixel offset keeps 1px lines on a single pixel column/row
        for x in (0..width).step_by(self.grid_spacing as usize) {
            let x = x as f32 + 0.5;
            pb.move_to(x, 0.0);
            pb.line_to(x, height as f32);
        }
        for y in (0..height).step_by(self.grid_spacing as usize) {
            let y = y as f32 + 0.5;
            pb.move_to(0.0, y);
            pb.line_to(width as f32, y);
        }
        if let Some(path) = pb.finish() {
            self.pixmap
                .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }

    fn draw_polyline(&mut self, points: &[PixelPoint], close: bool, color: Color) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };

        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;
        let stroke = Stroke {
            width: PATH_WIDTH,
            ..Default::default()
        };

        let mut pb = PathBuilder::new();
        pb.move_to(first.x as f32, first.y as f32);
        for point in rest {
            pb.line_to(point.x as f32, point.y as f32);
        }
        if close {
            pb.line_to(first.x as f32, first.y as f32);
        }
        // A single point yields no drawable segment
        if let Some(path) = pb.finish() {
            self.pixmap
                .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }

        for point in points {
            if let Some(dot) = PathBuilder::from_circle(point.x as f32, point.y as f32, POINT_RADIUS)
            {
                self.pixmap
                    .fill_path(&dot, &paint, FillRule::Winding, Transform::identity(), None);
            }
        }
    }
}

impl Renderer for RasterRenderer {
    fn redraw(&mut self, frame: &RenderFrame) {
        self.pixmap.fill(bg_color());
        self.draw_grid();
        self.draw_polyline(&frame.committed, false, committed_color());
        self.draw_polyline(&frame.in_progress, frame.close_loop, path_color());
        self.frames_drawn += 1;
        tracing::trace!(
            "Redrew surface: {} committed, {} in progress, closed={}",
            frame.committed.len(),
            frame.in_progress.len(),
            frame.close_loop
        );
    }
}
