use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use crate::config::Settings;

/// Install the global logger, appending to `settings.log_file`.
///
/// The alternate screen owns the terminal while the app runs, so log lines
/// never go to stdout or stderr.
pub fn init_logging(settings: &Settings) -> Result<()> {
    let Some(path) = &settings.log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Opening log file: {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or(settings.log_level.as_str()))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("Installing logger")?;

    Ok(())
}
