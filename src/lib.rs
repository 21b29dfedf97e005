//! # WaypointKit
//!
//! Interactive waypoint and polygon planner. Clicks on a 2-D drawing surface
//! become geographic waypoints; a separately drawn polygon can be spliced
//! into the path after any waypoint.
//!
//! ## Architecture
//!
//! WaypointKit is organized as a workspace with multiple crates:
//!
//! 1. **waypointkit-core** - Coordinates, pixel points, distance methods, errors
//! 2. **waypointkit-designer** - Mapper, distance, waypoint model, drawing
//!    session, polygon import, planner state, rendering
//! 3. **waypointkit-settings** - Configuration files and validation
//! 4. **waypointkit** - Event-script replay binary that ties the crates together

pub mod cli;
pub mod replay;

pub use waypointkit_designer as designer;
pub use waypointkit_settings as settings;

pub use waypointkit_core::GeoError;

pub use cli::{parse_args, Command, ReplayArgs, USAGE};
pub use replay::{load_script, parse_script, planner_options, replay, run, ReplayOutcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support, `info` by default
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
