//! Polygon import workflow.
//!
//! Splices a separately drawn polygon into the main path:
//! 1. A row of the waypoint table is selected (the row menu opens).
//! 2. "Insert polygon before/after" remembers the row as the pending
//!    insertion point and starts a fresh polygon draft.
//! 3. The operator draws and commits the polygon.
//! 4. "Import points" splices the closed draft after the pending row.
//!
//! Only one draft may be in flight; starting a new insertion discards an
//! unimported one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::session::PolygonDraft;
use crate::waypoint::{Waypoint, WaypointSequence};

/// Which side of the selected row the operator asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertPosition {
    Before,
    After,
}

impl fmt::Display for InsertPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Before => write!(f, "before"),
            Self::After => write!(f, "after"),
        }
    }
}

impl FromStr for InsertPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "before" => Ok(Self::Before),
            "after" => Ok(Self::After),
            _ => Err(format!("Unknown insert position: {}", s)),
        }
    }
}

/// Row and side remembered until the draft is imported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingInsertion {
    pub row: usize,
    pub position: InsertPosition,
}

impl PendingInsertion {
    /// Index to pass to [`WaypointSequence::splice_after`].
    ///
    /// "After" always splices after `row`. "Before" does the same unless
    /// `before_splices_before` is set, in which case the run lands ahead of
    /// `row` (`None` meaning the head of the sequence).
    pub fn splice_index(&self, before_splices_before: bool) -> Option<usize> {
        match self.position {
            InsertPosition::Before if before_splices_before => self.row.checked_sub(1),
            _ => Some(self.row),
        }
    }
}

/// Draft, menu selection and pending insertion for one import.
#[derive(Debug, Clone, Default)]
pub struct PolygonImport {
    draft: PolygonDraft,
    selected_row: Option<usize>,
    pending: Option<PendingInsertion>,
}

impl PolygonImport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &PolygonDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut PolygonDraft {
        &mut self.draft
    }

    /// Row whose menu is open.
    pub fn selected_row(&self) -> Option<usize> {
        self.selected_row
    }

    pub fn pending(&self) -> Option<PendingInsertion> {
        self.pending
    }

    /// Opens the row menu on `row`.
    pub fn select_row(&mut self, row: usize) {
        self.selected_row = Some(row);
    }

    /// Closes the row menu, forgetting the selection.
    pub fn close_menu(&mut self) {
        self.selected_row = None;
    }

    /// Turns the selected row into the pending insertion point and empties
    /// the draft. Returns `false` when no row is selected.
    pub fn begin(&mut self, position: InsertPosition) -> bool {
        let Some(row) = self.selected_row.take() else {
            return false;
        };
        if !self.draft.is_empty() {
            tracing::debug!(
                "Discarding unimported polygon draft of {} points",
                self.draft.len()
            );
        }
        self.draft.clear();
        self.pending = Some(PendingInsertion { row, position });
        true
    }

    /// Splices the draft into `sequence` and resets the workflow.
    ///
    /// Returns `None`, leaving everything untouched, when there is no
    /// pending insertion or the draft is empty.
    pub fn import_into(
        &mut self,
        sequence: &mut WaypointSequence,
        before_splices_before: bool,
    ) -> Option<Vec<Waypoint>> {
        let pending = self.pending?;
        if self.draft.is_empty() {
            return None;
        }

        let coordinates = self.draft.take();
        let inserted = sequence.splice_after(
            pending.splice_index(before_splices_before),
            &coordinates,
        );
        self.pending = None;
        tracing::info!(
            "Imported {} polygon points {} row {}",
            inserted.len(),
            pending.position,
            pending.row
        );
        Some(inserted)
    }
}
