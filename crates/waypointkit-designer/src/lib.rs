//! # WaypointKit Designer
//!
//! This crate turns clicks on a 2-D drawing surface into a geographic path
//! of labelled, distance-annotated waypoints, and lets a separately drawn
//! polygon be spliced into that path.
//!
//! ## Core Components
//!
//! - **Geo Mapper**: pixel position to longitude/latitude
//! - **Distance**: great-circle distance between coordinates
//! - **Waypoint Sequence**: ordered path, index-derived labels, splicing
//! - **Drawing Session**: idle / drawing-line / drawing-polygon state machine
//! - **Polygon Import**: draw a polygon, then splice it after a chosen row
//! - **Planner State**: the single session object every input event mutates
//! - **Renderer**: frame consumer, with a tiny-skia raster implementation
//!
//! ## Architecture
//!
//! ```text
//! InputEvent
//!   └── PlannerState
//!         ├── DrawingSession (mode, raw pixel path)
//!         ├── GeoMapper (pixel -> coordinate)
//!         ├── WaypointSequence (append / splice_after)
//!         └── PolygonImport (draft, selected row, pending insertion)
//!
//! PlannerState::frame() -> RenderFrame -> Renderer
//! PlannerState::table() -> TableView
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use waypointkit_designer::{DrawKind, PlannerState};
//!
//! let mut state = PlannerState::default();
//! state.start_drawing(DrawKind::Line);
//! state.pointer_click(10.0, 10.0).unwrap();
//! state.pointer_click(20.0, 20.0).unwrap();
//! state.commit_key();
//!
//! let table = state.table();
//! assert_eq!(table.rows[1].label, "WP01");
//! ```

pub mod distance;
pub mod geo_mapper;
pub mod planner;
pub mod planner_state;
pub mod polygon_import;
pub mod renderer;
pub mod session;
pub mod table;
pub mod waypoint;

pub use distance::{distance, DistanceCalculator, EARTH_RADIUS_METERS};
pub use geo_mapper::{map_pixel, GeoMapper};
pub use planner::Planner;
pub use planner_state::{InputEvent, PlannerOptions, PlannerState, Update};
pub use polygon_import::{InsertPosition, PendingInsertion, PolygonImport};
pub use renderer::{NullRenderer, RasterRenderer, RenderError, RenderFrame, Renderer};
pub use session::{DrawKind, DrawingMode, DrawingSession, PolygonDraft};
pub use table::{TableRow, TableView, MISSION_PLANNER_TITLE, POLYGON_CREATOR_TITLE};
pub use waypoint::{LabelStyle, Waypoint, WaypointSequence};

pub use waypointkit_core::{DistanceMethod, GeoCoordinate, GeoError, PixelPoint};
