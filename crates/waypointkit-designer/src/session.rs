//! Drawing session: which collection pointer input currently feeds.
//!
//! ```text
//! Idle --start(kind)--> DrawingLine | DrawingPolygon
//! Drawing* --record_pixel--> Drawing*
//! Drawing* --commit--> Idle
//! ```
//!
//! The session only tracks the mode and the raw pixel path used for
//! rendering. Routing mapped coordinates into the waypoint sequence or the
//! polygon draft is done by [`crate::PlannerState`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use waypointkit_core::{GeoCoordinate, PixelPoint};

/// What the operator is drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawKind {
    /// Open path appended to the waypoint sequence
    Line,
    /// Closed region collected in the polygon draft
    Polygon,
}

impl fmt::Display for DrawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line => write!(f, "line"),
            Self::Polygon => write!(f, "polygon"),
        }
    }
}

impl FromStr for DrawKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "line" | "linestring" => Ok(Self::Line),
            "polygon" => Ok(Self::Polygon),
            _ => Err(format!("Unknown draw kind: {}", s)),
        }
    }
}

/// Drawing modes for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingMode {
    #[default]
    Idle,
    DrawingLine,
    DrawingPolygon,
}

impl DrawingMode {
    /// Mode entered when drawing `kind`.
    pub fn for_kind(kind: DrawKind) -> Self {
        match kind {
            DrawKind::Line => Self::DrawingLine,
            DrawKind::Polygon => Self::DrawingPolygon,
        }
    }

    /// Kind being drawn, `None` when idle.
    pub fn kind(&self) -> Option<DrawKind> {
        match self {
            Self::Idle => None,
            Self::DrawingLine => Some(DrawKind::Line),
            Self::DrawingPolygon => Some(DrawKind::Polygon),
        }
    }

    pub fn is_drawing(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Unlabelled coordinates collected while drawing a polygon.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonDraft {
    coordinates: Vec<GeoCoordinate>,
}

impl PolygonDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, coordinate: GeoCoordinate) {
        self.coordinates.push(coordinate);
    }

    /// Closes the ring by repeating the first coordinate.
    ///
    /// An empty draft stays empty; a single-point draft becomes a
    /// degenerate two-point ring.
    pub fn close(&mut self) {
        if let Some(first) = self.coordinates.first().copied() {
            self.coordinates.push(first);
        }
    }

    pub fn clear(&mut self) {
        self.coordinates.clear();
    }

    pub fn coordinates(&self) -> &[GeoCoordinate] {
        &self.coordinates
    }

    /// Moves the coordinates out, leaving the draft empty.
    pub fn take(&mut self) -> Vec<GeoCoordinate> {
        std::mem::take(&mut self.coordinates)
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

/// Transient drawing state.
#[derive(Debug, Clone, Default)]
pub struct DrawingSession {
    mode: DrawingMode,
    /// Last kind started; survives the return to `Idle` so the table keeps
    /// showing the collection that was just drawn.
    kind: Option<DrawKind>,
    raw_pixel_path: Vec<PixelPoint>,
}

impl DrawingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the current drawing mode.
    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    /// Gets the active draw kind.
    pub fn kind(&self) -> Option<DrawKind> {
        self.kind
    }

    /// Switches the active kind, keeping the raw pixel path.
    ///
    /// A drawing session keeps drawing, now as `kind`; an idle one stays idle.
    pub fn switch_kind(&mut self, kind: DrawKind) {
        self.kind = Some(kind);
        if self.mode.is_drawing() {
            let previous = self.mode;
            self.mode = DrawingMode::for_kind(kind);
            tracing::debug!("Drawing mode {:?} -> {:?}", previous, self.mode);
        }
    }

    /// Pixels clicked since the last `start`, in order.
    pub fn raw_pixel_path(&self) -> &[PixelPoint] {
        &self.raw_pixel_path
    }

    /// Enters drawing mode for `kind`, discarding the raw pixel path.
    pub fn start(&mut self, kind: DrawKind) {
        let previous = self.mode;
        self.mode = DrawingMode::for_kind(kind);
        self.kind = Some(kind);
        self.raw_pixel_path.clear();
        tracing::debug!("Drawing mode {:?} -> {:?}", previous, self.mode);
    }

    /// Kind that accepts the next pointer click, `None` while idle.
    pub fn accepting(&self) -> Option<DrawKind> {
        self.mode.kind()
    }

    /// Records an accepted click.
    pub fn record_pixel(&mut self, pixel: PixelPoint) {
        self.raw_pixel_path.push(pixel);
    }

    /// Returns to `Idle`. Yields the kind that was being drawn, or `None`
    /// if the session was already idle.
    pub fn commit(&mut self) -> Option<DrawKind> {
        let finished = self.mode.kind()?;
        tracing::debug!("Drawing mode {:?} -> {:?}", self.mode, DrawingMode::Idle);
        self.mode = DrawingMode::Idle;
        Some(finished)
    }
}
