//! Read-only table view of the active point collection.

use serde::Serialize;
use std::fmt;
use waypointkit_core::{GeoCoordinate, COORDINATE_DECIMALS};

use crate::distance::DistanceCalculator;
use crate::session::PolygonDraft;
use crate::waypoint::{LabelStyle, WaypointSequence};

/// Title shown while the waypoint sequence is displayed.
pub const MISSION_PLANNER_TITLE: &str = "Mission Planner";
/// Title shown while a polygon draft is displayed.
pub const POLYGON_CREATOR_TITLE: &str = "Polygon Creator";

/// One displayed point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub label: String,
    pub longitude: f64,
    pub latitude: f64,
    pub distance_meters: f64,
}

impl TableRow {
    fn new(label: String, coordinate: &GeoCoordinate, distance_meters: f64) -> Self {
        Self {
            label,
            longitude: coordinate.longitude(),
            latitude: coordinate.latitude(),
            distance_meters,
        }
    }

    /// `"longitude, latitude"` with fixed precision.
    pub fn coordinates_text(&self) -> String {
        let digits = COORDINATE_DECIMALS as usize;
        format!("{:.digits$}, {:.digits$}", self.longitude, self.latitude)
    }
}

/// Snapshot of the table, re-derived after every mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub title: &'static str,
    pub rows: Vec<TableRow>,
    /// Rows offer the insert-polygon menu (waypoint view only).
    pub row_actions: bool,
    /// The "Import Points" action is offered (draft view only).
    pub import_available: bool,
}

impl TableView {
    /// Rows for the main waypoint sequence.
    pub fn for_waypoints(sequence: &WaypointSequence) -> Self {
        let rows = sequence
            .labelled()
            .map(|(label, waypoint)| {
                TableRow::new(label, &waypoint.coordinate, waypoint.distance_from_previous)
            })
            .collect();
        Self {
            title: MISSION_PLANNER_TITLE,
            rows,
            row_actions: true,
            import_available: false,
        }
    }

    /// Rows for a polygon draft, measured point to point within the draft.
    pub fn for_draft(
        draft: &PolygonDraft,
        distance: &DistanceCalculator,
        labels: &LabelStyle,
    ) -> Self {
        let coordinates = draft.coordinates();
        let rows = coordinates
            .iter()
            .enumerate()
            .map(|(i, coord)| {
                let previous = i.checked_sub(1).map(|p| &coordinates[p]);
                TableRow::new(labels.label(i), coord, distance.between(previous, Some(coord)))
            })
            .collect();
        Self {
            title: POLYGON_CREATOR_TITLE,
            rows,
            row_actions: false,
            import_available: true,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for TableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{:<8} {:<40} {:>14}", "Waypoint", "Coordinates", "Distance (m)")?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<8} {:<40} {:>14}",
                row.label,
                row.coordinates_text(),
                row.distance_meters
            )?;
        }
        Ok(())
    }
}
