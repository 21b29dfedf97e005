//! Waypoint sequence: the ordered, distance-annotated main path.
//!
//! Waypoint labels (`WP00`, `WP01`, ...) are not stored. They are derived
//! from the waypoint's current index every time they are read, so a splice
//! renumbers every downstream waypoint for free and labels can never drift
//! out of order.
//!
//! Stored distances are computed once, at insertion time:
//! - `append` measures against the current last waypoint.
//! - `splice_after` measures each inserted waypoint against its predecessor
//!   *within the inserted run*; the first one in the run gets 0 and the
//!   waypoint that ends up after the run keeps its old distance.

use serde::{Deserialize, Serialize};
use waypointkit_core::GeoCoordinate;

use crate::distance::DistanceCalculator;

/// Formats sequence labels: a prefix followed by the zero-padded index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelStyle {
    pub prefix: String,
    pub width: usize,
}

impl LabelStyle {
    /// Creates a label style.
    pub fn new(prefix: impl Into<String>, width: usize) -> Self {
        Self {
            prefix: prefix.into(),
            width,
        }
    }

    /// Style used for main-path waypoints (`WP00`).
    pub fn waypoints() -> Self {
        Self::new("WP", 2)
    }

    /// Style used for polygon draft rows (`P00`).
    pub fn draft() -> Self {
        Self::new("P", 2)
    }

    /// Label for the element at `index`.
    pub fn label(&self, index: usize) -> String {
        format!("{}{:0width$}", self.prefix, index, width = self.width)
    }
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self::waypoints()
    }
}

/// A point on the main path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub coordinate: GeoCoordinate,
    /// Metres to the waypoint that preceded this one when it was inserted.
    pub distance_from_previous: f64,
}

impl Waypoint {
    /// Creates a waypoint.
    pub fn new(coordinate: GeoCoordinate, distance_from_previous: f64) -> Self {
        Self {
            coordinate,
            distance_from_previous,
        }
    }
}

/// Ordered list of waypoints. Insertion order is path order.
#[derive(Debug, Clone, Default)]
pub struct WaypointSequence {
    waypoints: Vec<Waypoint>,
    distance: DistanceCalculator,
    labels: LabelStyle,
}

impl WaypointSequence {
    /// Creates an empty sequence.
    pub fn new(distance: DistanceCalculator) -> Self {
        Self::with_labels(distance, LabelStyle::waypoints())
    }

    /// Creates an empty sequence with a custom label style.
    pub fn with_labels(distance: DistanceCalculator, labels: LabelStyle) -> Self {
        Self {
            waypoints: Vec::new(),
            distance,
            labels,
        }
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    pub fn last(&self) -> Option<&Waypoint> {
        self.waypoints.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.waypoints.iter()
    }

    pub fn as_slice(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn distance_calculator(&self) -> &DistanceCalculator {
        &self.distance
    }

    pub fn label_style(&self) -> &LabelStyle {
        &self.labels
    }

    /// Label of the waypoint at `index`, if it exists.
    pub fn label(&self, index: usize) -> Option<String> {
        (index < self.waypoints.len()).then(|| self.labels.label(index))
    }

    /// Waypoints paired with their current labels.
    pub fn labelled(&self) -> impl Iterator<Item = (String, &Waypoint)> + '_ {
        self.waypoints
            .iter()
            .enumerate()
            .map(|(index, waypoint)| (self.labels.label(index), waypoint))
    }

    /// Coordinates in path order.
    pub fn coordinates(&self) -> Vec<GeoCoordinate> {
        self.waypoints.iter().map(|w| w.coordinate).collect()
    }

    /// Sum of stored distances along the path.
    pub fn total_distance(&self) -> f64 {
        self.waypoints.iter().map(|w| w.distance_from_previous).sum()
    }

    /// Appends a waypoint measured against the current last one.
    pub fn append(&mut self, coordinate: GeoCoordinate) -> Waypoint {
        let previous = self.waypoints.last().map(|w| &w.coordinate);
        let waypoint = Waypoint::new(
            coordinate,
            self.distance.between(previous, Some(&coordinate)),
        );
        self.waypoints.push(waypoint);
        tracing::debug!(
            "Appended {} at {} ({} m)",
            self.labels.label(self.waypoints.len() - 1),
            coordinate,
            waypoint.distance_from_previous
        );
        waypoint
    }

    /// Inserts `coordinates` immediately after position `index`.
    ///
    /// `None` inserts at the head; an index past the end inserts at the end.
    /// Returns the inserted waypoints in order.
    pub fn splice_after(
        &mut self,
        index: Option<usize>,
        coordinates: &[GeoCoordinate],
    ) -> Vec<Waypoint> {
        let position = match index {
            Some(index) => index.saturating_add(1).min(self.waypoints.len()),
            None => 0,
        };

        let run: Vec<Waypoint> = coordinates
            .iter()
            .enumerate()
            .map(|(i, coord)| {
                let previous = i.checked_sub(1).map(|p| &coordinates[p]);
                Waypoint::new(*coord, self.distance.between(previous, Some(coord)))
            })
            .collect();

        let tail = self.waypoints.split_off(position);
        self.waypoints.extend(run.iter().copied());
        self.waypoints.extend(tail);

        tracing::debug!(
            "Spliced {} waypoints at position {} (sequence now {} long)",
            run.len(),
            position,
            self.waypoints.len()
        );
        run
    }

    /// Removes every waypoint.
    pub fn clear(&mut self) {
        self.waypoints.clear();
    }
}
