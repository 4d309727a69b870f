use std::{fs::OpenOptions, path::Path, sync::Mutex};

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "climate_odds=info";
const ONE_SHOT_FILTER: &str = "climate_odds=warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    Disabled,
}

/// Chooses where logs go. Stderr would tear the TUI, so interactive runs log
/// only when a file was given.
#[must_use]
pub fn target<'a>(log_file: Option<&'a Path>, one_shot: bool) -> LogTarget<'a> {
    match (log_file, one_shot) {
        (Some(path), _) => LogTarget::File(path),
        (None, true) => LogTarget::Stderr,
        (None, false) => LogTarget::Disabled,
    }
}

pub fn init(target: LogTarget<'_>) -> Result<()> {
    match target {
        LogTarget::Disabled => Ok(()),
        LogTarget::Stderr => {
            fmt()
                .with_env_filter(filter(ONE_SHOT_FILTER))
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init()
                .map_err(|err| anyhow::anyhow!(err))
                .context("installing stderr logger failed")
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {} failed", path.display()))?;
            fmt()
                .with_env_filter(filter(DEFAULT_FILTER))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|err| anyhow::anyhow!(err))
                .context("installing file logger failed")
        }
    }
}

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
