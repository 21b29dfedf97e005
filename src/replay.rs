//! Event script replay.
//!
//! A script is a JSON array of input events, e.g.
//! `[{"event":"start_drawing","kind":"line"},{"event":"click","x":10,"y":10}]`.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use waypointkit_designer::{
    InputEvent, LabelStyle, Planner, PlannerOptions, PlannerState,
    RasterRenderer, TableView,
};
use waypointkit_settings::Config;

use crate::cli::ReplayArgs;

/// Result of replaying a script.
#[derive(Debug, Clone)]
pub struct ReplayOutcome {
    /// Table shown after the last event.
    pub table: TableView,
    /// Events in the script.
    pub events: usize,
    /// Events that changed the planner.
    pub changed: usize,
    /// Total path length over the stored waypoint distances, in metres.
    pub total_distance: f64,
    /// Image written, if one was requested.
    pub png: Option<PathBuf>,
}

/// Planner construction options from a validated configuration.
pub fn planner_options(config: &Config) -> PlannerOptions {
    let labels = &config.labels;
    PlannerOptions {
        surface_width: config.surface.width,
        surface_height: config.surface.height,
        distance_method: config.distance.method,
        distance_accuracy: config.distance.accuracy,
        waypoint_labels: LabelStyle::new(labels.waypoint_prefix.clone(), labels.pad_width),
        draft_labels: LabelStyle::new(labels.draft_prefix.clone(), labels.pad_width),
        insert_before_splices_before: config.workflow.insert_before_splices_before,
    }
}

/// Parses a script from JSON text.
pub fn parse_script(text: &str) -> Result<Vec<InputEvent>> {
    serde_json::from_str(text).context("Invalid event script")
}

/// Reads and parses a script file.
pub fn load_script(path: &Path) -> Result<Vec<InputEvent>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    parse_script(&text).with_context(|| format!("In script {}", path.display()))
}

/// Replays `events` against a fresh planner built from `config`.
///
/// Stops at the first rejected event. When `png` is set, the final surface
/// is written there.
pub fn replay(
    events: &[InputEvent],
    config: &Config,
    png: Option<&Path>,
) -> Result<ReplayOutcome> {
    let state = PlannerState::new(planner_options(config)).context("Invalid planner surface")?;
    let renderer = RasterRenderer::new(
        config.surface.width.ceil() as u32,
        config.surface.height.ceil() as u32,
        config.surface.grid_spacing,
    )?;
    let mut planner = Planner::new(state, renderer);

    let mut changed = 0;
    for (index, event) in events.iter().enumerate() {
        let update = planner
            .dispatch(*event)
            .with_context(|| format!("Event #{} {:?} was rejected", index + 1, event))?;
        if update.is_changed() {
            changed += 1;
        }
    }
    tracing::info!("Replayed {} events, {} changed the planner", events.len(), changed);

    let table = planner.table();
    let total_distance = planner.state().waypoints().total_distance();
    let (_, renderer) = planner.into_parts();

    let png = match png {
        Some(path) => {
            renderer
                .save(path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote surface to {}", path.display());
            Some(path.to_path_buf())
        }
        None => None,
    };

    Ok(ReplayOutcome {
        table,
        events: events.len(),
        changed,
        total_distance,
        png,
    })
}

/// Loads configuration and script for `args`, then replays.
pub fn run(args: &ReplayArgs) -> Result<ReplayOutcome> {
    let config = Config::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")?;
    tracing::debug!(
        "Surface {}x{}, distance {} rounded to {} m",
        config.surface.width,
        config.surface.height,
        config.distance.method,
        config.distance.accuracy
    );

    let events = load_script(&args.script)?;
    replay(&events, &config, args.png.as_deref())
}
