use anyhow::{bail, Context, Result};
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: waypointkit <script.json> [--config <file>] [--png <file>]

Replays a JSON list of planner input events and prints the final table.

Options:
  --config <file>   Configuration file (.json or .toml)
  --png <file>      Write the final drawing surface to an image
  -h, --help        Show this help
  -V, --version     Show version";

/// Arguments of a replay run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayArgs {
    pub script: PathBuf,
    pub config: Option<PathBuf>,
    pub png: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Replay(ReplayArgs),
    Help,
    Version,
}

/// Parses `std::env::args()`-style arguments (program name first).
pub fn parse_args(args: &[String]) -> Result<Command> {
    let mut script = None;
    let mut config = None;
    let mut png = None;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--config" => {
                let value = iter.next().context("--config needs a file argument")?;
                config = Some(PathBuf::from(value));
            }
            "--png" => {
                let value = iter.next().context("--png needs a file argument")?;
                png = Some(PathBuf::from(value));
            }
            flag if flag.starts_with('-') => bail!("Unknown option: {}\n\n{}", flag, USAGE),
            path => {
                if script.is_some() {
                    bail!("Only one script may be given\n\n{}", USAGE);
                }
                script = Some(PathBuf::from(path));
            }
        }
    }

    let script = script.with_context(|| format!("Missing script argument\n\n{}", USAGE))?;
    Ok(Command::Replay(ReplayArgs {
        script,
        config,
        png,
    }))
}
