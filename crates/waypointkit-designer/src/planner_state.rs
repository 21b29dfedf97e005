//! Planner state: the single session object every input event mutates.
//!
//! All handlers are synchronous and run to completion. None of them draw;
//! they report whether the model changed and callers pull a fresh
//! [`RenderFrame`] / [`TableView`] when it did.

use serde::{Deserialize, Serialize};
use waypointkit_core::{DistanceMethod, GeoError, PixelPoint};

use crate::distance::{DistanceCalculator, DEFAULT_ACCURACY_METERS};
use crate::geo_mapper::{GeoMapper, DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH};
use crate::polygon_import::{InsertPosition, PolygonImport};
use crate::renderer::RenderFrame;
use crate::session::{DrawKind, DrawingMode, DrawingSession, PolygonDraft};
use crate::table::TableView;
use crate::waypoint::{LabelStyle, WaypointSequence};

/// Outcome of an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    /// The event was ignored; nothing needs redrawing.
    Unchanged,
    /// State changed; the surface and table should be refreshed.
    Changed,
}

impl Update {
    pub fn is_changed(&self) -> bool {
        matches!(self, Update::Changed)
    }
}

/// Construction options for [`PlannerState`].
#[derive(Clone, Debug, PartialEq)]
pub struct PlannerOptions {
    pub surface_width: f64,
    pub surface_height: f64,
    pub distance_method: DistanceMethod,
    pub distance_accuracy: f64,
    pub waypoint_labels: LabelStyle,
    pub draft_labels: LabelStyle,
    /// Make "insert polygon before" splice ahead of the selected row
    /// instead of after it.
    pub insert_before_splices_before: bool,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            surface_width: DEFAULT_SURFACE_WIDTH,
            surface_height: DEFAULT_SURFACE_HEIGHT,
            distance_method: DistanceMethod::default(),
            distance_accuracy: DEFAULT_ACCURACY_METERS,
            waypoint_labels: LabelStyle::waypoints(),
            draft_labels: LabelStyle::draft(),
            insert_before_splices_before: false,
        }
    }
}

/// A discrete input event, as produced by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InputEvent {
    StartDrawing { kind: DrawKind },
    Click { x: f64, y: f64 },
    Commit,
    SelectRow { index: usize },
    CloseRowMenu,
    ChooseInsertion { position: InsertPosition },
    ImportPoints,
    ClearWaypoints,
}

/// Waypoint sequence, polygon draft and drawing session for one operator.
#[derive(Debug, Clone)]
pub struct PlannerState {
    mapper: GeoMapper,
    waypoints: WaypointSequence,
    session: DrawingSession,
    import: PolygonImport,
    draft_labels: LabelStyle,
    insert_before_splices_before: bool,
}

impl PlannerState {
    /// Creates an empty planner.
    pub fn new(options: PlannerOptions) -> Result<Self, GeoError> {
        let mapper = GeoMapper::new(options.surface_width, options.surface_height)?;
        let distance = DistanceCalculator::new(options.distance_method, options.distance_accuracy);
        Ok(Self {
            mapper,
            waypoints: WaypointSequence::with_labels(distance, options.waypoint_labels),
            session: DrawingSession::new(),
            import: PolygonImport::new(),
            draft_labels: options.draft_labels,
            insert_before_splices_before: options.insert_before_splices_before,
        })
    }

    pub fn mapper(&self) -> &GeoMapper {
        &self.mapper
    }

    pub fn waypoints(&self) -> &WaypointSequence {
        &self.waypoints
    }

    pub fn draft(&self) -> &PolygonDraft {
        self.import.draft()
    }

    pub fn mode(&self) -> DrawingMode {
        self.session.mode()
    }

    /// Kind whose collection the table shows.
    pub fn kind(&self) -> Option<DrawKind> {
        self.session.kind()
    }

    pub fn raw_pixel_path(&self) -> &[PixelPoint] {
        self.session.raw_pixel_path()
    }

    pub fn selected_row(&self) -> Option<usize> {
        self.import.selected_row()
    }

    /// Row the next polygon import splices at, if one is pending.
    pub fn pending_insertion_index(&self) -> Option<usize> {
        self.import.pending().map(|p| p.row)
    }

    /// Enters drawing mode for `kind`.
    ///
    /// Entering polygon mode discards the current draft.
    pub fn start_drawing(&mut self, kind: DrawKind) -> Update {
        if kind == DrawKind::Polygon {
            self.import.draft_mut().clear();
        }
        self.session.start(kind);
        Update::Changed
    }

    /// Maps and records a click on the drawing surface.
    ///
    /// Ignored while idle. Fails only on non-finite pixel components, in
    /// which case nothing is recorded.
    pub fn pointer_click(&mut self, x: f64, y: f64) -> Result<Update, GeoError> {
        let Some(kind) = self.session.accepting() else {
            tracing::trace!("Ignoring click at ({}, {}) while idle", x, y);
            return Ok(Update::Unchanged);
        };

        let coordinate = self.mapper.pixel_to_geo(x, y)?;
        match kind {
            DrawKind::Line => {
                self.waypoints.append(coordinate);
            }
            DrawKind::Polygon => {
                self.import.draft_mut().push(coordinate);
                tracing::debug!("Added polygon point {}", coordinate);
            }
        }
        self.session.record_pixel(PixelPoint::new(x, y));
        Ok(Update::Changed)
    }

    /// Ends the current drawing act. Closes the draft in polygon mode.
    pub fn commit_key(&mut self) -> Update {
        match self.session.commit() {
            Some(DrawKind::Polygon) => {
                self.import.draft_mut().close();
                Update::Changed
            }
            Some(DrawKind::Line) => Update::Changed,
            None => Update::Unchanged,
        }
    }

    /// Opens the row menu on waypoint `index`.
    ///
    /// Only waypoint rows have a menu, so this is ignored while the draft is
    /// displayed or when `index` is not a row.
    pub fn select_row(&mut self, index: usize) -> Update {
        if !self.shows_waypoints() || index >= self.waypoints.len() {
            tracing::warn!(
                "Ignoring selection of row {} ({} waypoint rows shown)",
                index,
                if self.shows_waypoints() { self.waypoints.len() } else { 0 }
            );
            return Update::Unchanged;
        }
        self.import.select_row(index);
        Update::Changed
    }

    /// Closes the row menu without choosing anything.
    pub fn close_row_menu(&mut self) -> Update {
        if self.import.selected_row().is_none() {
            return Update::Unchanged;
        }
        self.import.close_menu();
        Update::Changed
    }

    /// "Insert polygon before/after" on the selected row.
    ///
    /// Remembers the row and starts drawing a fresh polygon. Ignored when no
    /// row is selected.
    pub fn choose_insertion(&mut self, position: InsertPosition) -> Update {
        if !self.import.begin(position) {
            tracing::warn!("Ignoring insert-polygon {} with no row selected", position);
            return Update::Unchanged;
        }
        self.session.start(DrawKind::Polygon);
        Update::Changed
    }

    /// Splices the closed draft into the waypoint sequence.
    ///
    /// Ignored unless an insertion is pending and the draft has points. An
    /// import made while still drawing keeps drawing, as a line.
    pub fn import_points(&mut self) -> Update {
        match self
            .import
            .import_into(&mut self.waypoints, self.insert_before_splices_before)
        {
            Some(_) => {
                self.session.switch_kind(DrawKind::Line);
                Update::Changed
            }
            None => {
                tracing::debug!("Nothing to import");
                Update::Unchanged
            }
        }
    }

    /// Empties the waypoint sequence.
    pub fn clear_waypoints(&mut self) -> Update {
        if self.waypoints.is_empty() {
            return Update::Unchanged;
        }
        self.waypoints.clear();
        self.import.close_menu();
        Update::Changed
    }

    /// Dispatches a single input event.
    pub fn apply(&mut self, event: InputEvent) -> Result<Update, GeoError> {
        Ok(match event {
            InputEvent::StartDrawing { kind } => self.start_drawing(kind),
            InputEvent::Click { x, y } => return self.pointer_click(x, y),
            InputEvent::Commit => self.commit_key(),
            InputEvent::SelectRow { index } => self.select_row(index),
            InputEvent::CloseRowMenu => self.close_row_menu(),
            InputEvent::ChooseInsertion { position } => self.choose_insertion(position),
            InputEvent::ImportPoints => self.import_points(),
            InputEvent::ClearWaypoints => self.clear_waypoints(),
        })
    }

    /// Snapshot for the rendering collaborator.
    pub fn frame(&self) -> RenderFrame {
        let in_progress = self.session.raw_pixel_path().to_vec();
        RenderFrame {
            committed: self
                .waypoints
                .iter()
                .map(|w| self.mapper.geo_to_pixel(&w.coordinate))
                .collect(),
            close_loop: self.kind() == Some(DrawKind::Polygon) && in_progress.len() > 2,
            in_progress,
        }
    }

    /// Table of whichever collection is active.
    pub fn table(&self) -> TableView {
        if self.shows_waypoints() {
            TableView::for_waypoints(&self.waypoints)
        } else {
            TableView::for_draft(
                self.import.draft(),
                self.waypoints.distance_calculator(),
                &self.draft_labels,
            )
        }
    }

    fn shows_waypoints(&self) -> bool {
        self.kind() != Some(DrawKind::Polygon)
    }
}

impl Default for PlannerState {
    fn default() -> Self {
        Self {
            mapper: GeoMapper::default(),
            waypoints: WaypointSequence::default(),
            session: DrawingSession::new(),
            import: PolygonImport::new(),
            draft_labels: LabelStyle::draft(),
            insert_before_splices_before: false,
        }
    }
}
